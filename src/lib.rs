pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::input::{FileTokenSource, StaticTokenSource};
pub use core::{dial::Dial, engine::DialEngine};
pub use domain::model::{CountingPolicy, DialReport, Direction, RotationCommand};
pub use utils::error::{DialError, Result};
