//! Groupseed-DB: Database schema, migrations, queries, and associations
//!
//! This crate provides the persistent store for groupseed using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Create, read, and count operations per entity kind
//! - `associations` - Derived relationships between groups, users, and posts
//!
//! # Example
//!
//! ```no_run
//! use groupseed_db::pool::{init_pool, get_conn};
//! use groupseed_db::queries::{groups, users};
//!
//! let pool = init_pool(std::path::Path::new("/var/lib/groupseed/db.sqlite")).unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let group = groups::create_group(&conn).unwrap();
//! let user = users::create_user(&conn, Some(group.id)).unwrap();
//! println!("Created user {} in group {}", user.id, group.id);
//! ```

pub mod associations;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
