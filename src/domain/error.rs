//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations in the enclosure tree.
/// These are independent of CLI and config concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{kind} name cannot be empty")]
    EmptyName { kind: &'static str },

    #[error("invalid animal age {age}: {reason}")]
    InvalidAge { age: f64, reason: &'static str },

    #[error("cannot {action} a collection on individual enclosure: {name}")]
    LeafMutation { name: String, action: &'static str },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
