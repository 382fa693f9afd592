use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The token matched the `<letter><digits>` pattern but its digits do
    /// not fit in a u64. Silent wrapping would corrupt the crossing
    /// arithmetic, so this is surfaced instead of skipped.
    #[error("Rotation magnitude in token '{token}' exceeds the supported range")]
    MagnitudeOverflow { token: String },

    #[error("Position {value} is outside the dial range 0..=99")]
    PositionOutOfRange { value: u8 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DialError>;
