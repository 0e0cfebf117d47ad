//! Row counts across entity kinds.

use groupseed_common::{EntityKind, Error, Result};
use rusqlite::Connection;

use crate::models::EntityCounts;

/// Count the rows of a single entity kind.
pub fn count(conn: &Connection, kind: EntityKind) -> Result<i64> {
    // Table names come from a closed enum, never from input.
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
    conn.query_row(&sql, [], |row| row.get(0))
        .map_err(|e| Error::database(format!("Failed to count {kind} rows: {e}")))
}

/// Count the rows of every entity kind.
pub fn entity_counts(conn: &Connection) -> Result<EntityCounts> {
    Ok(EntityCounts {
        groups: count(conn, EntityKind::Group)?,
        users: count(conn, EntityKind::User)?,
        posts: count(conn, EntityKind::Post)?,
    })
}
