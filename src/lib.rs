//! Groupseed - group/user/post data model with an idempotent seed populator
//!
//! This library crate exposes configuration and seeding for the binary and
//! for integration testing. Storage lives in `groupseed-db`.

pub mod config;
pub mod seed;
