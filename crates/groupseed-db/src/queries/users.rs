//! User database queries.
//!
//! This module provides create, read, and count operations for users.

use groupseed_common::{Error, GroupId, Result, UserId};
use rusqlite::{Connection, Row};

use super::{limit_param, write_error};
use crate::models::User;

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId::from(row.get::<_, i64>(0)?),
        group_id: row.get::<_, Option<i64>>(1)?.map(GroupId::from),
    })
}

/// Create a new user.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `group_id` - Owning group, or `None` for an unassigned user
///
/// # Returns
///
/// * `Ok(User)` - The created user
/// * `Err(Error::Constraint)` - If `group_id` does not reference an existing group
/// * `Err(Error)` - If any other database error occurs
pub fn create_user(conn: &Connection, group_id: Option<GroupId>) -> Result<User> {
    conn.execute(
        "INSERT INTO users (group_id) VALUES (:group_id)",
        rusqlite::named_params! { ":group_id": group_id.map(GroupId::get) },
    )
    .map_err(write_error)?;

    let user = User {
        id: UserId::from(conn.last_insert_rowid()),
        group_id,
    };
    tracing::debug!(user_id = %user.id, group_id = ?group_id.map(GroupId::get), "Created user");

    Ok(user)
}

/// Get a user by ID.
///
/// # Returns
///
/// * `Ok(Some(User))` - The user if found
/// * `Ok(None)` - If the user does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, group_id FROM users WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
        row_to_user,
    );

    match result {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Count all users.
pub fn count_users(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Count the users belonging to a group.
pub fn count_users_in_group(conn: &Connection, group_id: GroupId) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM users WHERE group_id = :group_id",
        rusqlite::named_params! { ":group_id": group_id.get() },
        |row| row.get(0),
    )
    .map_err(|e| Error::database(e.to_string()))
}

/// List the users belonging to a group, ordered by ID.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `group_id` - Owning group
/// * `limit` - Maximum number of users to return, or `None` for all
pub fn list_users_in_group(
    conn: &Connection,
    group_id: GroupId,
    limit: Option<usize>,
) -> Result<Vec<User>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, group_id FROM users
             WHERE group_id = :group_id
             ORDER BY id
             LIMIT :limit",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let users = stmt
        .query_map(
            rusqlite::named_params! {
                ":group_id": group_id.get(),
                ":limit": limit_param(limit),
            },
            row_to_user,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(users)
}
