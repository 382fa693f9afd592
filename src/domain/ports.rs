use crate::utils::error::Result;

/// Producer of the raw rotation tokens, one per command. Where the tokens
/// come from (file, literal list) is an adapter concern; the core only sees
/// an ordered sequence of strings.
pub trait TokenSource {
    fn tokens(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn start_position(&self) -> u8;
}
