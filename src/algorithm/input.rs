//! Input Data Loading
//!
//! Reads the JSON document an algorithm will be initialized with.
//! The document's shape is algorithm-specific; the loader only checks
//! that there is something to work on at all.

use std::fs;
use std::path::Path;

use log::info;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while loading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Input file contains no data")]
    Empty,
}

/// Loads input data from a JSON file.
///
/// Returns the parsed document. `null` and the empty array are rejected
/// since no algorithm can produce a meaningful trace from them.
pub fn load_input(path: impl AsRef<Path>) -> Result<Value, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    match &value {
        Value::Null => return Err(InputError::Empty),
        Value::Array(items) if items.is_empty() => return Err(InputError::Empty),
        _ => {}
    }

    info!("Loaded input from {}", path.display());

    Ok(value)
}
