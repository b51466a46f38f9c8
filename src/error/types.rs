//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for esbnb operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EsbnbError {
    /// Project Error - package.json missing or unreadable
    #[error("Project error: {message}")]
    Project { message: String },

    /// Invalid Mode - unknown config name on the command line.
    /// Routed to the help screen by the caller, never fatal.
    #[error("Unknown config name: {mode}")]
    InvalidMode { mode: String },

    /// Install Error - npm invocation failed
    #[error("Install error: {message}")]
    Install { message: String },

    /// Not An Object - config document parses to an array or scalar
    #[error("Config error: {path} must contain a JSON object literal")]
    NotAnObject { path: String },

    /// Invalid Syntax - config document is not valid JSON
    #[error("Config error: {path} is not valid JSON: {message}")]
    InvalidSyntax { path: String, message: String },

    /// Unsupported Extends Shape - "extends" is neither a string nor an array
    #[error("Config error: \"extends\" in {path} is not an array nor a string")]
    UnsupportedExtendsShape { path: String },

    /// Persistence Error - writing the config or its backup failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl EsbnbError {
    /// Get the appropriate exit code for this error type
    ///
    /// Every failure aborts the run with exit code 1; `InvalidMode` is
    /// intercepted before exit and shows the help screen instead.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Project { .. }
            | Self::InvalidMode { .. }
            | Self::Install { .. }
            | Self::NotAnObject { .. }
            | Self::InvalidSyntax { .. }
            | Self::UnsupportedExtendsShape { .. }
            | Self::Persistence { .. } => 1,
        }
    }

    /// Create a project descriptor error
    #[inline]
    pub fn project<S: Into<String>>(message: S) -> Self {
        Self::Project {
            message: message.into(),
        }
    }

    /// Create an invalid mode error
    #[inline]
    pub fn invalid_mode<S: Into<String>>(mode: S) -> Self {
        Self::InvalidMode { mode: mode.into() }
    }

    /// Create an install error
    #[inline]
    pub fn install<S: Into<String>>(message: S) -> Self {
        Self::Install {
            message: message.into(),
        }
    }

    /// Create a not-an-object error
    #[inline]
    pub fn not_an_object<S: Into<String>>(path: S) -> Self {
        Self::NotAnObject { path: path.into() }
    }

    /// Create an invalid syntax error
    #[inline]
    pub fn invalid_syntax<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InvalidSyntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported extends shape error
    #[inline]
    pub fn unsupported_extends_shape<S: Into<String>>(path: S) -> Self {
        Self::UnsupportedExtendsShape { path: path.into() }
    }

    /// Create a persistence error
    #[inline]
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}
