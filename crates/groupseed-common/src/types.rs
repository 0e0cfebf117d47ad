//! Core type definitions for the entity graph.
//!
//! Groups own users, users own posts. [`EntityKind`] names each kind and
//! maps it to its backing table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A group of users. Identity only.
    Group,
    /// A user, optionally belonging to a group.
    User,
    /// A post, optionally belonging to a user.
    Post,
}

impl EntityKind {
    /// All entity kinds, owners before the entities they own.
    pub const ALL: [EntityKind; 3] = [Self::Group, Self::User, Self::Post];

    /// Name of the table holding this kind.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Group => "groups",
            Self::User => "users",
            Self::Post => "posts",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "group"),
            Self::User => write!(f, "user"),
            Self::Post => write!(f, "post"),
        }
    }
}
