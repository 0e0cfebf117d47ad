use clap::{Parser, Subcommand};
use groupseed_common::{GroupId, PostId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "groupseed")]
#[command(author, version, about = "Seed and inspect a group/user/post database")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (overrides the configured path)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database if needed and apply pending migrations
    Migrate,

    /// Fill a group up to the configured users and posts
    Seed {
        /// Group to seed (defaults to the first group, created if missing)
        #[arg(short, long)]
        group: Option<GroupId>,

        /// Output the seed report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how many groups, users, and posts exist
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a group with its users and their posts
    Group {
        /// Group ID
        id: GroupId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post with its user and group
    Post {
        /// Post ID
        id: PostId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
