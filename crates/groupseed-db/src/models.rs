//! Internal Rust models matching the database schema.
//!
//! This module provides strongly-typed Rust structures that map to database tables.
//! References to owning entities are nullable, mirroring the schema.

use groupseed_common::{EntityKind, GroupId, PostId, UserId};
use serde::{Deserialize, Serialize};

/// Group model. Carries identity only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Group {
    pub id: GroupId,
}

/// User model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    pub id: UserId,
    pub group_id: Option<GroupId>,
}

/// Post model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Post {
    pub id: PostId,
    pub user_id: Option<UserId>,
}

/// Row counts for every entity kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityCounts {
    pub groups: i64,
    pub users: i64,
    pub posts: i64,
}

impl EntityCounts {
    /// Count for a single kind.
    pub fn get(&self, kind: EntityKind) -> i64 {
        match kind {
            EntityKind::Group => self.groups,
            EntityKind::User => self.users,
            EntityKind::Post => self.posts,
        }
    }

    /// Sum across all kinds.
    pub fn total(&self) -> i64 {
        self.groups + self.users + self.posts
    }
}
