//! Configuration management module
//!
//! Handles the `.eslintrc` JSON document, flavor selection, and the
//! extends-field merge engine.

pub mod flavor;
pub mod merge;

use crate::error::EsbnbError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Project-relative path of the ESLint config file
pub const ESLINTRC: &str = "./.eslintrc";

/// Load the `.eslintrc` document, distinguishing absence from bad JSON
///
/// Returns `None` when no file exists at `path`. A file that exists
/// but is not valid JSON is a terminal error, never treated as absent:
/// the document on disk is left untouched and the user is told which
/// file is broken.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contents are not valid JSON (`InvalidSyntax`)
pub fn load_eslintrc(system: &dyn System, path: &str) -> Result<Option<Value>> {
    let path_obj = Path::new(path);

    if !system.is_file(path_obj) {
        return Ok(None);
    }

    let content = system
        .read_to_string(path_obj)
        .with_context(|| format!("Failed to read config file: {path}"))?;

    let doc: Value = serde_json::from_str(&content)
        .map_err(|e| EsbnbError::invalid_syntax(path, e.to_string()))?;

    Ok(Some(doc))
}

/// Persist a config document as pretty-printed JSON
///
/// The write is whole-document; there are no partial writes.
///
/// # Errors
///
/// Returns `EsbnbError::Persistence` if the file cannot be written.
pub fn save_eslintrc(system: &dyn System, path: &str, doc: &Map<String, Value>) -> Result<()> {
    let mut content = serde_json::to_string_pretty(doc)
        .with_context(|| format!("Failed to serialize config for: {path}"))?;
    content.push('\n');

    system
        .write(Path::new(path), content.as_bytes())
        .map_err(|e| EsbnbError::persistence(format!("Failed to write {path}: {e}")))?;

    Ok(())
}
