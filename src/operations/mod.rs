//! Operations module
//!
//! Coordinates the install pipeline: npm installation, config backup,
//! and extends-field configuration.

pub mod backup;
pub mod install;
pub mod npm;

pub use backup::*;
pub use install::*;
