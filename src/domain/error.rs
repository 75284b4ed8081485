//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the decision tree invariants.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("only a leaf can learn a new animal")]
    NotALeaf,

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("malformed node at {path}: {reason}")]
    Malformed { path: String, reason: String },
}
