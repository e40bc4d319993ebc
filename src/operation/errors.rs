/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that an operation can report while turning an input into an output
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Operation failed: {0}")]
    Failed(String),
}

/// Result type for operations
pub type Result<T> = std::result::Result<T, OperationError>;
