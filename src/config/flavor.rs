//! Flavor selection
//!
//! Maps the command-line mode token to the npm package to install and
//! the canonical config name to wire into `.eslintrc`.

use crate::error::EsbnbError;

/// Prefix shared by every installable Airbnb config package
const ESLINT_CONFIG: &str = "eslint-config";

/// The canonical Airbnb config names, mutually exclusive by contract.
/// At most one of these may appear in an `extends` field after a merge.
pub const CANONICAL_EXTENDS: [&str; 3] = ["airbnb", "airbnb-base", "airbnb-base/legacy"];

/// The flavor chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// ECMAScript 6+ and React rules (`esbnb` with no argument)
    Airbnb,
    /// ECMAScript 6+ rules without React (`esbnb base`)
    Base,
    /// ECMAScript 5 and below (`esbnb legacy`)
    Legacy,
}

/// Result of flavor selection: what to install and what to extend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// npm package reference passed to `npm install`
    pub package: String,
    /// Canonical config name inserted into the `extends` field
    pub extend: &'static str,
}

impl Flavor {
    /// Resolve a command-line mode token into a flavor
    ///
    /// No token selects the default (React) flavor. Any token other
    /// than `base` or `legacy` is an invalid mode; the caller shows
    /// the help screen and must not proceed to installation.
    ///
    /// # Errors
    ///
    /// Returns `EsbnbError::InvalidMode` for an unrecognized token.
    pub fn from_mode(mode: Option<&str>) -> Result<Self, EsbnbError> {
        match mode {
            None => Ok(Self::Airbnb),
            Some("base") => Ok(Self::Base),
            Some("legacy") => Ok(Self::Legacy),
            Some(other) => Err(EsbnbError::invalid_mode(other)),
        }
    }

    /// Map this flavor to its package reference and canonical config name
    ///
    /// The legacy flavor installs the base package without a version
    /// suffix so npm resolves whatever satisfies the legacy peer
    /// requirement.
    #[must_use]
    pub fn selection(self) -> Selection {
        match self {
            Self::Airbnb => Selection {
                package: format!("{ESLINT_CONFIG}-airbnb@latest"),
                extend: CANONICAL_EXTENDS[0],
            },
            Self::Base => Selection {
                package: format!("{ESLINT_CONFIG}-airbnb-base@latest"),
                extend: CANONICAL_EXTENDS[1],
            },
            Self::Legacy => Selection {
                package: format!("{ESLINT_CONFIG}-airbnb-base"),
                extend: CANONICAL_EXTENDS[2],
            },
        }
    }
}

/// Resolve a mode token straight to a selection
///
/// # Errors
///
/// Returns `EsbnbError::InvalidMode` for an unrecognized token.
pub fn select(mode: Option<&str>) -> Result<Selection, EsbnbError> {
    Ok(Flavor::from_mode(mode)?.selection())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flavor() {
        let selection = select(None).unwrap();
        assert_eq!(selection.package, "eslint-config-airbnb@latest");
        assert_eq!(selection.extend, "airbnb");
    }

    #[test]
    fn test_base_flavor() {
        let selection = select(Some("base")).unwrap();
        assert_eq!(selection.package, "eslint-config-airbnb-base@latest");
        assert_eq!(selection.extend, "airbnb-base");
    }

    #[test]
    fn test_legacy_flavor_is_unpinned() {
        let selection = select(Some("legacy")).unwrap();
        assert_eq!(selection.package, "eslint-config-airbnb-base");
        assert_eq!(selection.extend, "airbnb-base/legacy");
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = select(Some("airbnbb")).unwrap_err();
        assert!(matches!(err, EsbnbError::InvalidMode { .. }));
    }

    #[test]
    fn test_canonical_names_match_selections() {
        for (mode, expected) in [
            (None, "airbnb"),
            (Some("base"), "airbnb-base"),
            (Some("legacy"), "airbnb-base/legacy"),
        ] {
            let selection = select(mode).unwrap();
            assert_eq!(selection.extend, expected);
            assert!(CANONICAL_EXTENDS.contains(&selection.extend));
        }
    }
}
