//! Derived relationships between groups, users, and posts.
//!
//! Every function here is a read-only projection over the store. A missing
//! link (a user without a group, a post without a user) resolves to `None`
//! or an empty list, never to an error.
//!
//! ```
//! use groupseed_db::associations;
//! use groupseed_db::pool::{get_conn, init_memory_pool};
//! use groupseed_db::queries::{groups, posts, users};
//!
//! let pool = init_memory_pool().unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let group = groups::create_group(&conn).unwrap();
//! let user = users::create_user(&conn, Some(group.id)).unwrap();
//! let post = posts::create_post(&conn, Some(user.id)).unwrap();
//!
//! assert_eq!(associations::post_group(&conn, &post).unwrap(), Some(group));
//! ```

use groupseed_common::{Error, GroupId, Result};
use rusqlite::Connection;

use crate::models::{Group, Post, User};
use crate::queries::posts::row_to_post;
use crate::queries::{groups, users};

/// The group a user belongs to.
pub fn user_group(conn: &Connection, user: &User) -> Result<Option<Group>> {
    match user.group_id {
        Some(group_id) => groups::get_group(conn, group_id),
        None => Ok(None),
    }
}

/// The user a post belongs to.
pub fn post_user(conn: &Connection, post: &Post) -> Result<Option<User>> {
    match post.user_id {
        Some(user_id) => users::get_user(conn, user_id),
        None => Ok(None),
    }
}

/// The group a post belongs to, through its user.
pub fn post_group(conn: &Connection, post: &Post) -> Result<Option<Group>> {
    match post_user(conn, post)? {
        Some(user) => user_group(conn, &user),
        None => Ok(None),
    }
}

/// All users of a group, ordered by ID.
pub fn group_users(conn: &Connection, group_id: GroupId) -> Result<Vec<User>> {
    users::list_users_in_group(conn, group_id, None)
}

/// All posts owned by any user of a group.
///
/// Returned in post ID order; callers should treat the result as a set.
pub fn group_posts(conn: &Connection, group_id: GroupId) -> Result<Vec<Post>> {
    let mut stmt = conn
        .prepare(
            "SELECT posts.id, posts.user_id FROM posts
             INNER JOIN users ON users.id = posts.user_id
             WHERE users.group_id = :group_id
             ORDER BY posts.id",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let posts = stmt
        .query_map(
            rusqlite::named_params! { ":group_id": group_id.get() },
            row_to_post,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(posts)
}
