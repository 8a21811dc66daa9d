//! Error kinds reported by kernel operations.
//!
//! Failures are local to the call that produced them; the kernel keeps no
//! state that an error could leave inconsistent.

use std::fmt;
use thiserror::Error;

/// Which operand of a binary operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The receiver (`self`).
    First,
    /// The argument (`other`).
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Errors returned by polygon operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonError {
    /// The operation needs at least one point but the polygon is unset or empty.
    #[error("{op}: polygon has no points")]
    InvalidPolygon {
        /// Name of the operation that rejected its input.
        op: &'static str,
    },

    /// A zero-length edge produced an axis that cannot be normalized.
    #[error("degenerate separating axis from zero-length edge {edge} of the {operand} polygon")]
    DegenerateAxis {
        /// Index of the edge's end vertex (edge `i` runs from vertex `i-1` to `i`).
        edge: usize,
        /// Polygon owning the edge.
        operand: Operand,
    },

    /// The host cancelled a Minkowski sum at a checkpoint.
    #[error("cancelled after {completed} of {total} pairwise sums")]
    Cancelled { completed: usize, total: usize },
}

/// Kernel result alias.
pub type Result<T> = std::result::Result<T, PolygonError>;
