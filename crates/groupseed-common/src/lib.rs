//! Groupseed-Common: Shared types, identifiers, and errors.
//!
//! This crate provides common functionality used across groupseed:
//!
//! - **Typed IDs**: Type-safe wrappers around row identifiers for groups,
//!   users, and posts
//! - **Core Types**: The [`EntityKind`] enum naming each persisted entity
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use groupseed_common::{EntityKind, Error, GroupId, Result};
//!
//! // Typed IDs wrap the store's integer keys
//! let group_id = GroupId::from(1);
//! assert_eq!(group_id.get(), 1);
//!
//! // Entity kinds know their table
//! assert_eq!(EntityKind::Post.table_name(), "posts");
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::not_found("group 1"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
