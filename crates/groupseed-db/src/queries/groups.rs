//! Group database queries.

use groupseed_common::{Error, GroupId, Result};
use rusqlite::{Connection, Row};

use super::write_error;
use crate::models::Group;

fn row_to_group(row: &Row) -> rusqlite::Result<Group> {
    Ok(Group {
        id: GroupId::from(row.get::<_, i64>(0)?),
    })
}

/// Create a new group.
///
/// # Returns
///
/// * `Ok(Group)` - The created group
/// * `Err(Error)` - If the store rejects the write
pub fn create_group(conn: &Connection) -> Result<Group> {
    conn.execute("INSERT INTO groups DEFAULT VALUES", [])
        .map_err(write_error)?;

    let group = Group {
        id: GroupId::from(conn.last_insert_rowid()),
    };
    tracing::debug!(group_id = %group.id, "Created group");

    Ok(group)
}

/// Get a group by ID.
///
/// # Returns
///
/// * `Ok(Some(Group))` - The group if found
/// * `Ok(None)` - If the group does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_group(conn: &Connection, id: GroupId) -> Result<Option<Group>> {
    let result = conn.query_row(
        "SELECT id FROM groups WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
        row_to_group,
    );

    match result {
        Ok(group) => Ok(Some(group)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get the first group, ordered by ID.
pub fn first_group(conn: &Connection) -> Result<Option<Group>> {
    let result = conn.query_row(
        "SELECT id FROM groups ORDER BY id LIMIT 1",
        [],
        row_to_group,
    );

    match result {
        Ok(group) => Ok(Some(group)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Count all groups.
pub fn count_groups(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
