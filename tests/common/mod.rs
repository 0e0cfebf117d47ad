//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which owns an in-memory database pool with
//! migrations applied.

use groupseed_db::models::{EntityCounts, Group, User};
use groupseed_db::pool::{get_conn, init_memory_pool, DbPool, PooledConnection};
use groupseed_db::queries::{groups, posts, stats, users};

/// Test harness wrapping an in-memory database.
pub struct TestHarness {
    pub db: DbPool,
}

#[allow(dead_code)]
impl TestHarness {
    /// Create a new harness with an empty, migrated in-memory DB.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        Self { db }
    }

    /// Get a connection to the harness database.
    pub fn conn(&self) -> PooledConnection {
        get_conn(&self.db).expect("failed to get connection")
    }

    /// Row counts for every entity kind.
    pub fn counts(&self) -> EntityCounts {
        stats::entity_counts(&self.conn()).expect("failed to count entities")
    }

    /// Create a group with `user_count` users, returning both.
    pub fn group_with_users(&self, user_count: usize) -> (Group, Vec<User>) {
        let conn = self.conn();
        let group = groups::create_group(&conn).unwrap();
        let members = (0..user_count)
            .map(|_| users::create_user(&conn, Some(group.id)).unwrap())
            .collect();
        (group, members)
    }

    /// Create `count` posts owned by `user`.
    pub fn add_posts(&self, user: &User, count: usize) {
        let conn = self.conn();
        for _ in 0..count {
            posts::create_post(&conn, Some(user.id)).unwrap();
        }
    }

    /// Number of posts owned by `user`.
    pub fn post_count(&self, user: &User) -> i64 {
        posts::count_posts_for_user(&self.conn(), user.id).unwrap()
    }
}
