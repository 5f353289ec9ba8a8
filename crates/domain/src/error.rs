//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RosterError`] via `#[from]` (or a manual `From` for boxed sources).

use std::num::ParseIntError;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Client input could not be decoded.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No record exists for the requested identifier.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed client input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A path identifier is not a decimal integer.
    #[error("invalid id {value:?}: expected an integer")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A request body could not be decoded into the expected shape.
    #[error("malformed request body: {reason}")]
    MalformedBody { reason: String },

    /// A path segment could not be decoded.
    #[error("malformed request path: {reason}")]
    MalformedPath { reason: String },
}

/// A lookup by identifier matched no record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
