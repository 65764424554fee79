//! Reading configuration documents from disk.
//!
//! Compiler json files are hand-maintained and carry `//` and `/* */`
//! comments, so they are parsed with a JSON5 reader rather than strict JSON.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Parse comment-bearing JSON text into a document tree.
pub fn parse_document(text: &str) -> Result<Value, json5::Error> {
    json5::from_str(text)
}

/// Read and parse the configuration document at `path`.
pub fn load_document(path: &Path) -> ConfigResult<Value> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_document(&text).map_err(|e| ConfigError::parse(path, e))?;

    log::debug!(
        target: "buildcfg::config",
        "Loaded configuration document from {}",
        path.display()
    );

    Ok(document)
}
