use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dial-sim")]
#[command(about = "Simulates a 100-position dial driven by L/R rotation tokens")]
pub struct CliConfig {
    /// Puzzle input file, one rotation token per line.
    #[arg(long, default_value = "input.txt")]
    pub input_path: String,

    /// Dial position before the first rotation.
    #[arg(long, default_value = "50")]
    pub start_position: u8,

    /// Print the final report as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn start_position(&self) -> u8 {
        self.start_position
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_range("start_position", self.start_position, 0, 99)?;
        Ok(())
    }
}
