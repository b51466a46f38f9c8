//! npm invocation: peer dependency lookup and package installation

use crate::error::EsbnbError;
use anyhow::{Context as _, Result};
use regex::Regex;
use std::process::{Command, Output, Stdio};
use tracing::{debug, info};

/// Run npm with the given arguments, capturing output
fn run_npm(args: &[&str]) -> Result<Output> {
    debug!("Running: npm {}", args.join(" "));

    Command::new("npm")
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to execute npm {}", args.join(" ")))
}

/// Look up the peer dependencies of a package
///
/// Runs `npm info <package> peerDependencies --json` and returns the
/// peers as `name@range` install specs. A package without peers prints
/// nothing, which is not an error.
///
/// # Errors
///
/// Returns `EsbnbError::Install` if npm fails or prints a shape other
/// than a JSON object.
pub fn peer_dependencies(package: &str) -> Result<Vec<String>> {
    let output = run_npm(&["info", package, "peerDependencies", "--json"])?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(EsbnbError::install(format!(
            "npm info failed for \"{package}\": {}",
            stderr.trim()
        ))
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_peer_specs(&stdout, package)
}

/// Parse `npm info ... peerDependencies --json` output into install specs
fn parse_peer_specs(stdout: &str, package: &str) -> Result<Vec<String>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let peers: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| {
        EsbnbError::install(format!(
            "Unexpected npm info output for \"{package}\": {e}"
        ))
    })?;

    let map = peers.as_object().ok_or_else(|| {
        EsbnbError::install(format!(
            "Unexpected npm info output for \"{package}\": expected a JSON object"
        ))
    })?;

    Ok(map
        .iter()
        .map(|(name, range)| match range.as_str() {
            Some(range) => format!("{name}@{range}"),
            None => name.clone(),
        })
        .collect())
}

/// Install packages as dev dependencies
///
/// Runs one `npm install --save-dev` for the whole spec list. Empty
/// output from npm is treated as a failure signal. Returns the
/// `name@x.y.z` tokens scraped from npm's report, for display.
///
/// # Errors
///
/// Returns `EsbnbError::Install` if npm exits non-zero or reports
/// nothing at all.
pub fn install(specs: &[String]) -> Result<Vec<String>> {
    let mut args = vec!["install", "--save-dev"];
    args.extend(specs.iter().map(String::as_str));

    let output = run_npm(&args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);

        let mut error_msg = format!(
            "npm install failed with exit code {}\n",
            output.status.code().unwrap_or(-1)
        );

        if !stderr.trim().is_empty() {
            error_msg.push_str(&format!("Error output:\n{}\n", stderr.trim()));
        }

        if !stdout.trim().is_empty() {
            error_msg.push_str(&format!("Standard output:\n{}", stdout.trim()));
        }

        return Err(EsbnbError::install(error_msg).into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim().is_empty() {
        return Err(EsbnbError::install(
            "npm install produced no output; treating as failed".to_owned(),
        )
        .into());
    }

    let installed = scrape_installed(&stdout)?;
    for line in stdout.lines() {
        if !line.trim().is_empty() {
            info!("{}", line.trim());
        }
    }

    Ok(installed)
}

/// Pick the `name@x.y.z` tokens out of npm's install report
fn scrape_installed(stdout: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(r"[\w][\w./-]*@\d+\.\d+\.\d+")
        .context("Failed to compile installed-package pattern")?;

    Ok(pattern
        .find_iter(stdout)
        .map(|m| m.as_str().to_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_peer_specs() {
        let stdout = r#"{
            "eslint": "^8.2.0",
            "eslint-plugin-import": "^2.25.3"
        }"#;
        let specs = parse_peer_specs(stdout, "eslint-config-airbnb@latest").unwrap();
        assert_eq!(
            specs,
            vec!["eslint@^8.2.0", "eslint-plugin-import@^2.25.3"]
        );
    }

    #[test]
    fn test_parse_peer_specs_empty_output_means_no_peers() {
        assert!(parse_peer_specs("", "some-pkg").unwrap().is_empty());
        assert!(parse_peer_specs("  \n", "some-pkg").unwrap().is_empty());
    }

    #[test]
    fn test_parse_peer_specs_rejects_non_object() {
        let err = parse_peer_specs("[1, 2]", "some-pkg").unwrap_err();
        let err = err.downcast::<EsbnbError>().unwrap();
        assert!(matches!(err, EsbnbError::Install { .. }));
    }

    #[test]
    fn test_scrape_installed_versions() {
        let stdout = "\nadded 92 packages\n+ eslint-config-airbnb@19.0.4\n+ eslint@8.57.0\n";
        let installed = scrape_installed(stdout).unwrap();
        assert_eq!(installed, vec!["eslint-config-airbnb@19.0.4", "eslint@8.57.0"]);
    }

    #[test]
    fn test_scrape_installed_ignores_unversioned_tokens() {
        let installed = scrape_installed("up to date, audited 120 packages").unwrap();
        assert!(installed.is_empty());
    }
}
