pub mod dial;
pub mod engine;
pub mod parser;

pub use crate::domain::model::{CountingPolicy, DialReport, Direction, RotationCommand};
pub use crate::domain::ports::{ConfigProvider, TokenSource};
pub use crate::utils::error::Result;
