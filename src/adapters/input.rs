use crate::core::TokenSource;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Reads the rotation sequence from a puzzle input file, one token per
/// line. Lines are not trimmed or filtered here; a blank or garbled line
/// simply parses to an invalid command downstream.
#[derive(Debug, Clone)]
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenSource for FileTokenSource {
    fn tokens(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

/// An in-memory token sequence, for tests and embedded examples.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenSource {
    tokens: Vec<String>,
}

impl StaticTokenSource {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl TokenSource for StaticTokenSource {
    fn tokens(&self) -> Result<Vec<String>> {
        Ok(self.tokens.clone())
    }
}
