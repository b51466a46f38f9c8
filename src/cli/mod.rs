//! Command-line interface module
//!
//! Handles argument parsing and the help screen

pub mod args;
pub mod help;

pub use args::*;
pub use help::print_help;
