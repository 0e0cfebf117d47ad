//! Idempotent seeding of the group/user/post graph.
//!
//! A seed run brings one reference group up to a baseline population:
//! `users_per_group` users in the group, and `posts_per_user` posts for each
//! of the first `users_per_group` of those users. Runs only ever create
//! records, so repeating a run converges and, once the targets are met,
//! creates nothing.
//!
//! There is no transaction around a run. The first rejected write is
//! returned and everything created before it stays in the store.

use groupseed_common::{Error, GroupId, Result};
use groupseed_db::models::{Group, Post, User};
use groupseed_db::queries::{groups, posts, users};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Baseline population a seed run fills up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTargets {
    /// Users the reference group should have. Also the number of users
    /// whose posts are topped up.
    pub users_per_group: usize,
    /// Posts each selected user should have.
    pub posts_per_user: usize,
}

impl Default for SeedTargets {
    fn default() -> Self {
        Self {
            users_per_group: 2,
            posts_per_user: 5,
        }
    }
}

/// What a seed run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub group: Group,
    pub group_created: bool,
    pub users_created: Vec<User>,
    pub posts_created: Vec<Post>,
}

impl SeedReport {
    /// Total number of records the run created.
    pub fn records_created(&self) -> usize {
        usize::from(self.group_created) + self.users_created.len() + self.posts_created.len()
    }

    /// True when the store already met every target.
    pub fn is_noop(&self) -> bool {
        self.records_created() == 0
    }
}

/// Number of records missing to reach `target`, never negative.
pub fn deficit(target: usize, current: i64) -> usize {
    // A count too large for usize is certainly above target.
    let current = usize::try_from(current.max(0)).unwrap_or(usize::MAX);
    target.saturating_sub(current)
}

/// Call `create` once per missing record and collect what it returns.
///
/// Stops at the first error; records created before it are kept by the
/// store but not returned.
pub fn ensure_count<T, F>(current: i64, target: usize, mut create: F) -> Result<Vec<T>>
where
    F: FnMut() -> Result<T>,
{
    (0..deficit(target, current)).map(|_| create()).collect()
}

/// Resolve the group a run should fill.
///
/// An explicitly requested group must exist. Without one, the first group
/// by ID is used, or a new group is created when the store has none.
/// Returns the group and whether it was created.
pub fn reference_group(conn: &Connection, requested: Option<GroupId>) -> Result<(Group, bool)> {
    if let Some(id) = requested {
        return groups::get_group(conn, id)?
            .map(|group| (group, false))
            .ok_or_else(|| Error::not_found(format!("group {id}")));
    }

    match groups::first_group(conn)? {
        Some(group) => Ok((group, false)),
        None => groups::create_group(conn).map(|group| (group, true)),
    }
}

/// Fill an already resolved group up to `targets`.
///
/// Never creates a group, so the returned report always has
/// `group_created == false`; [`run`] sets it when it created the group.
pub fn populate(conn: &Connection, group: &Group, targets: &SeedTargets) -> Result<SeedReport> {
    let current_users = users::count_users_in_group(conn, group.id)?;
    let users_created = ensure_count(current_users, targets.users_per_group, || {
        users::create_user(conn, Some(group.id))
    })?;

    let selected = users::list_users_in_group(conn, group.id, Some(targets.users_per_group))?;

    let mut posts_created = Vec::new();
    for user in &selected {
        let current_posts = posts::count_posts_for_user(conn, user.id)?;
        let created = ensure_count(current_posts, targets.posts_per_user, || {
            posts::create_post(conn, Some(user.id))
        })?;
        if !created.is_empty() {
            tracing::debug!(user_id = %user.id, count = created.len(), "Topped up posts");
        }
        posts_created.extend(created);
    }

    Ok(SeedReport {
        group: *group,
        group_created: false,
        users_created,
        posts_created,
    })
}

/// Run a full seed: resolve the reference group, then fill it.
pub fn run(
    conn: &Connection,
    requested: Option<GroupId>,
    targets: &SeedTargets,
) -> Result<SeedReport> {
    let (group, group_created) = reference_group(conn, requested)?;
    tracing::info!(
        group_id = %group.id,
        group_created,
        users_per_group = targets.users_per_group,
        posts_per_user = targets.posts_per_user,
        "Seeding group"
    );

    let report = SeedReport {
        group_created,
        ..populate(conn, &group, targets)?
    };

    tracing::info!(
        users_created = report.users_created.len(),
        posts_created = report.posts_created.len(),
        "Seed complete"
    );

    Ok(report)
}
