//! Crate-wide error type.
//!
//! Every fallible entry point in this crate returns `Result<T, GraphColorError>`.
//! All variants are terminal to a run: there is no recovery path once one is
//! raised, only propagation to the dispatcher (or the CLI binary) that prints
//! a diagnostic and exits.

use thiserror::Error;

/// The closed set of ways a run can fail.
#[derive(Debug, Error)]
pub enum GraphColorError {
    /// The input graph text was not a valid DIMACS-style edge list, or
    /// referenced a vertex outside `[0, n)`.
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// The requested strategy name is not one of the six accepted names.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A numeric configuration value failed to parse or fell outside its
    /// accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A strategy returned a colouring whose length did not match the
    /// number of vertices in the input graph. Always an internal-logic bug.
    #[error("result size mismatch: expected {expected} colours, got {actual}")]
    ResultSizeMismatch {
        /// number of vertices in the input graph
        expected: usize,
        /// length of the colouring actually returned
        actual: usize,
    },

    /// Opening an input, output, results CSV, or snapshot file failed.
    #[error("I/O failure: {0}")]
    IOFailure(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphColorError>;
