/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the command-line interface

use thiserror::Error;

/// Errors detected while validating the command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Anything other than exactly two positional arguments
    #[error("Usage: {program} <input> <output>")]
    Usage { program: String },
}

/// Result type for command-line handling
pub type Result<T> = std::result::Result<T, CliError>;
