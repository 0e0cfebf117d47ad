use groupseed_common::GroupId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::seed::SeedTargets;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite database file, created on first use
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("groupseed.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Users the reference group is filled up to
    #[serde(default = "default_users_per_group")]
    pub users_per_group: usize,

    /// Posts each selected user is filled up to
    #[serde(default = "default_posts_per_user")]
    pub posts_per_user: usize,

    /// Group to seed; the first group (or a new one) when unset
    #[serde(default)]
    pub group_id: Option<GroupId>,
}

fn default_users_per_group() -> usize {
    SeedTargets::default().users_per_group
}

fn default_posts_per_user() -> usize {
    SeedTargets::default().posts_per_user
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users_per_group: default_users_per_group(),
            posts_per_user: default_posts_per_user(),
            group_id: None,
        }
    }
}

impl SeedConfig {
    pub fn targets(&self) -> SeedTargets {
        SeedTargets {
            users_per_group: self.users_per_group,
            posts_per_user: self.posts_per_user,
        }
    }
}
