//! Shared utility functions

pub mod fs;
