//! Database query modules.
//!
//! This module organizes all database operations by entity kind:
//! - groups: Group creation and lookup
//! - users: User creation, lookup, and per-group counts
//! - posts: Post creation, lookup, and per-user counts
//! - stats: Row counts across all kinds
//!
//! Reads that return more than one row are ordered by id, which follows
//! creation order.

pub mod groups;
pub mod posts;
pub mod stats;
pub mod users;

use groupseed_common::Error;

/// Map a failed write to the common error type.
///
/// Constraint failures (foreign key, NOT NULL, ...) become
/// [`Error::Constraint`]; everything else is a database error.
pub(crate) fn write_error(e: rusqlite::Error) -> Error {
    match e {
        rusqlite::Error::SqliteFailure(ref err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::constraint(e.to_string())
        }
        other => Error::database(other.to_string()),
    }
}

/// SQLite treats a negative LIMIT as "no limit".
pub(crate) fn limit_param(limit: Option<usize>) -> i64 {
    limit
        .and_then(|n| i64::try_from(n).ok())
        .unwrap_or(-1)
}
