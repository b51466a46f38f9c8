//! Project descriptor handling
//!
//! Reads `package.json` to confirm the invocation runs inside an npm
//! project and to pick the name used to key the backup archive.

use crate::error::EsbnbError;
use crate::system::System;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Project-relative path of the npm project descriptor
pub const PACKAGE_JSON: &str = "./package.json";

/// Sentinel project name when package.json carries no usable name
pub const ANONYMOUS_PROJECT: &str = "anonymous";

/// The slice of package.json this tool cares about
#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    /// Project name; anything non-string deserializes as `None`
    #[serde(default, deserialize_with = "string_or_none")]
    name: Option<String>,
}

/// Accept only a JSON string for `name`, mapping other shapes to `None`
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

/// Read the project name from `package.json`
///
/// The descriptor must exist and be valid JSON; a project without it
/// is not an npm project and the run aborts before touching anything.
/// A missing, non-string, or blank `name` falls back to the
/// `"anonymous"` sentinel (trimmed otherwise).
///
/// # Errors
///
/// Returns `EsbnbError::Project` if the file is missing, unreadable,
/// or not valid JSON.
pub fn read_project_name(system: &dyn System, path: &str) -> Result<String> {
    let path_obj = Path::new(path);

    if !system.is_file(path_obj) {
        return Err(missing_descriptor(path).into());
    }

    let content = system
        .read_to_string(path_obj)
        .map_err(|_| missing_descriptor(path))?;

    let descriptor: PackageDescriptor =
        serde_json::from_str(&content).map_err(|_| missing_descriptor(path))?;

    let name = match descriptor.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ => ANONYMOUS_PROJECT.to_owned(),
    };

    Ok(name)
}

fn missing_descriptor(path: &str) -> EsbnbError {
    EsbnbError::project(format!(
        "\"{path}\" is required to install eslint with an airbnb config. \
        Please make sure it exists and has a valid JSON format"
    ))
}
