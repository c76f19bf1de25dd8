//! Dataset file parser.

use crate::dataset::Dataset;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when parsing datasets.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),
}

/// Parser for cutting-stock dataset files.
#[derive(Debug, Default)]
pub struct DatasetParser;

impl DatasetParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a dataset from a JSON file.
    ///
    /// An unnamed dataset takes the file stem as its name.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut dataset = self.parse_json(&content)?;
        if dataset.name == "unnamed" {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                dataset.name = stem.to_string();
            }
        }
        Ok(dataset)
    }

    /// Parses a dataset from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Dataset, ParseError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        if dataset.input.stock_items.is_empty() && dataset.input.requirements.is_empty() {
            return Err(ParseError::InvalidFormat(
                "document has neither stockItems nor requirements".to_string(),
            ));
        }
        log::debug!(
            "Parsed dataset '{}': {} stock items, {} requirements",
            dataset.name,
            dataset.input.stock_items.len(),
            dataset.input.requirements.len()
        );
        Ok(dataset)
    }

    /// Resolves a dataset: a built-in name, or else a path to a JSON file.
    pub fn load(&self, name_or_path: &str) -> Result<Dataset, ParseError> {
        match Dataset::builtin(name_or_path) {
            Some(ds) => Ok(ds),
            None => self.parse_file(name_or_path),
        }
    }

    /// Serializes a dataset to pretty JSON.
    pub fn to_json(&self, dataset: &Dataset) -> Result<String, ParseError> {
        Ok(serde_json::to_string_pretty(dataset)?)
    }
}
