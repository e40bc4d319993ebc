/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # example-operation
//!
//! A command-line wrapper around a single deterministic file operation.
//!
//! The binary takes exactly two positional arguments, an input path and an
//! output path, and hands them to an [`Operation`]. The built-in operation is
//! [`Noop`], a placeholder that touches no files. Library users can supply
//! their own operation through [`cli::run_with`].

pub mod cli;
pub mod operation;

pub use cli::{run, run_with, CliError, Invocation};
pub use operation::{process, Noop, Operation, OperationError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Program name used when the process was started without `argv[0]`
pub const DEFAULT_PROGRAM: &str = env!("CARGO_PKG_NAME");
