/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Operations that turn an input path into an output path
//!
//! An [`Operation`] is the processing step behind the command-line entry
//! point. [`Noop`] is the built-in placeholder: it reads nothing, writes
//! nothing and always succeeds.

mod errors;

pub use errors::{OperationError, Result};

use std::path::Path;

/// A deterministic transformation from an input file to an output file
pub trait Operation {
    /// Short identifier used in log records
    fn name(&self) -> &str;

    /// Human readable description
    fn description(&self) -> &str;

    /// Read from `input_path` and write the result to `output_path`
    fn process(&self, input_path: &Path, output_path: &Path) -> Result<()>;
}

/// Placeholder operation with no observable effect
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

impl Operation for Noop {
    fn name(&self) -> &str {
        "noop"
    }

    fn description(&self) -> &str {
        "Placeholder that leaves both paths untouched"
    }

    fn process(&self, input_path: &Path, output_path: &Path) -> Result<()> {
        log::trace!(
            "noop: skipping {} -> {}",
            input_path.display(),
            output_path.display()
        );
        Ok(())
    }
}

/// Run the built-in operation on `input_path` and `output_path`
pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<()> {
    Noop.process(input_path.as_ref(), output_path.as_ref())
}
