use std::fmt;

use crate::config::{MAX_DIM, MIN_DIM};

/// Errors surfaced by the board engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A board was requested with a dimension outside `[MIN_DIM, MAX_DIM]`.
    Configuration { height: usize, width: usize },
    /// A kind id, cell value or coordinate broke an engine invariant.
    InvariantViolation(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Configuration { height, width } => write!(
                f,
                "cannot build a board of {width} x {height} (each side must be {MIN_DIM}..={MAX_DIM})"
            ),
            BoardError::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for BoardError {}
