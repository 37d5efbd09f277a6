use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failure inside one shell iteration. Reported to the user; the loop keeps going.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read input: {0}")]
    Read(#[from] ReadlineError),
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
