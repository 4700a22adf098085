//! Error types for order generation

use crate::types::OrderKind;
use thiserror::Error;

/// Order generation errors
///
/// All variants are caller errors: the strategies themselves never fail
/// while their preconditions hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A cycling strategy was asked to cycle over zero items
    #[error("{kind} order requires at least one item")]
    EmptyDomain { kind: OrderKind },

    /// A finite strategy was asked for more items than it has
    #[error("{kind} order is exhausted")]
    ExhaustedSequence { kind: OrderKind },

    /// The index space returned no item for a generated index
    #[error("Index out of bounds: {index} (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Strategy name could not be parsed
    #[error("Unknown order strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for order generation
pub type Result<T> = std::result::Result<T, OrderError>;
