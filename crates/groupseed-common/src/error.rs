//! Common error types used throughout groupseed.
//!
//! This module provides a unified error type covering rejected writes,
//! missing entities, and database failures.

/// Common error type for groupseed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store rejected a write (foreign key, NOT NULL, ...).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// An explicitly requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl Error {
    /// Create a new Constraint error.
    pub fn constraint<S: Into<String>>(msg: S) -> Self {
        Self::Constraint(msg.into())
    }

    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
