//! Post database queries.

use groupseed_common::{Error, PostId, Result, UserId};
use rusqlite::{Connection, Row};

use super::{limit_param, write_error};
use crate::models::Post;

pub(crate) fn row_to_post(row: &Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: PostId::from(row.get::<_, i64>(0)?),
        user_id: row.get::<_, Option<i64>>(1)?.map(UserId::from),
    })
}

/// Create a new post.
///
/// # Returns
///
/// * `Ok(Post)` - The created post
/// * `Err(Error::Constraint)` - If `user_id` does not reference an existing user
/// * `Err(Error)` - If any other database error occurs
pub fn create_post(conn: &Connection, user_id: Option<UserId>) -> Result<Post> {
    conn.execute(
        "INSERT INTO posts (user_id) VALUES (:user_id)",
        rusqlite::named_params! { ":user_id": user_id.map(UserId::get) },
    )
    .map_err(write_error)?;

    let post = Post {
        id: PostId::from(conn.last_insert_rowid()),
        user_id,
    };
    tracing::debug!(post_id = %post.id, user_id = ?user_id.map(UserId::get), "Created post");

    Ok(post)
}

/// Get a post by ID.
pub fn get_post(conn: &Connection, id: PostId) -> Result<Option<Post>> {
    let result = conn.query_row(
        "SELECT id, user_id FROM posts WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
        row_to_post,
    );

    match result {
        Ok(post) => Ok(Some(post)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Count all posts.
pub fn count_posts(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Count the posts owned by a user.
pub fn count_posts_for_user(conn: &Connection, user_id: UserId) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM posts WHERE user_id = :user_id",
        rusqlite::named_params! { ":user_id": user_id.get() },
        |row| row.get(0),
    )
    .map_err(|e| Error::database(e.to_string()))
}

/// List the posts owned by a user, ordered by ID.
pub fn list_posts_for_user(
    conn: &Connection,
    user_id: UserId,
    limit: Option<usize>,
) -> Result<Vec<Post>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id FROM posts
             WHERE user_id = :user_id
             ORDER BY id
             LIMIT :limit",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let posts = stmt
        .query_map(
            rusqlite::named_params! {
                ":user_id": user_id.get(),
                ":limit": limit_param(limit),
            },
            row_to_post,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(posts)
}
