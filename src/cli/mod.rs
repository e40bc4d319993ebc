/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Validates `<program> <input> <output>` and hands the two paths to an
//! [`Operation`]. Exit code 0 means the operation ran and returned, exit code
//! 1 means the argument count was wrong or the operation failed.

mod errors;

pub use errors::{CliError, Result};

use crate::operation::{Noop, Operation};
use anyhow::Context;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Exit code for a completed run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a usage error or a failed operation
pub const EXIT_FAILURE: i32 = 1;

/// Usage line printed when the argument count is wrong
pub fn usage(program: &str) -> String {
    CliError::Usage {
        program: program.to_string(),
    }
    .to_string()
}

/// One validated execution of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name as given in `argv[0]`
    pub program: String,
    /// First positional argument
    pub input_path: PathBuf,
    /// Second positional argument
    pub output_path: PathBuf,
}

impl Invocation {
    /// Build an invocation from the arguments following the program name
    ///
    /// Paths keep their exact OS bytes, UTF-8 or not.
    pub fn from_args<S: AsRef<OsStr>>(program: &str, arguments: &[S]) -> Result<Self> {
        match arguments {
            [input, output] => Ok(Self {
                program: program.to_string(),
                input_path: Path::new(input).to_path_buf(),
                output_path: Path::new(output).to_path_buf(),
            }),
            _ => Err(CliError::Usage {
                program: program.to_string(),
            }),
        }
    }
}

/// Run `operation` for a validated invocation
pub fn execute(invocation: &Invocation, operation: &dyn Operation) -> anyhow::Result<()> {
    log::debug!(
        "running '{}' ({}) on {} -> {}",
        operation.name(),
        operation.description(),
        invocation.input_path.display(),
        invocation.output_path.display()
    );

    operation
        .process(&invocation.input_path, &invocation.output_path)
        .with_context(|| {
            format!(
                "failed to process '{}' into '{}'",
                invocation.input_path.display(),
                invocation.output_path.display()
            )
        })
}

/// Entry point with the built-in operation and the process error stream
pub fn run<S: AsRef<OsStr>>(program: &str, arguments: &[S]) -> i32 {
    run_with(program, arguments, &Noop, &mut io::stderr())
}

/// Entry point with an injected operation and error sink
///
/// Writes to `stderr` only on failure. The operation is invoked at most once,
/// and never when the argument count is wrong.
pub fn run_with<S: AsRef<OsStr>>(
    program: &str,
    arguments: &[S],
    operation: &dyn Operation,
    stderr: &mut dyn Write,
) -> i32 {
    let invocation = match Invocation::from_args(program, arguments) {
        Ok(invocation) => invocation,
        Err(e) => {
            log::warn!("expected 2 arguments, got {}", arguments.len());
            // Nothing useful to do if the error stream itself is closed
            let _ = writeln!(stderr, "{}", e);
            return EXIT_FAILURE;
        }
    };

    match execute(&invocation, operation) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log::debug!("operation '{}' failed: {:#}", operation.name(), e);
            let _ = writeln!(stderr, "Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}
