mod cli;

use groupseed::{config, seed};
use groupseed_common::{EntityKind, Error, GroupId, PostId};
use groupseed_db::associations;
use groupseed_db::pool::{get_conn, init_pool, PooledConnection};
use groupseed_db::queries::{groups, posts, stats};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "groupseed=debug,groupseed_db=debug,groupseed_common=debug".to_string()
        } else {
            "groupseed=info,groupseed_db=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let database = cli.database.as_deref();

    match cli.command {
        Commands::Migrate => migrate(config_path, database),
        Commands::Seed { group, json } => run_seed(config_path, database, group, json),
        Commands::Stats { json } => show_stats(config_path, database, json),
        Commands::Group { id, json } => show_group(config_path, database, id, json),
        Commands::Post { id, json } => show_post(config_path, database, id, json),
        Commands::Validate { file } => validate_config(file.as_deref().or(config_path)),
        Commands::Version => {
            println!("groupseed {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load config, apply the CLI database override, and open a connection.
fn open(
    config_path: Option<&Path>,
    database: Option<&Path>,
) -> Result<(config::Config, PooledConnection)> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(path) = database {
        config.database.path = path.to_path_buf();
    }

    let db_path = config.database.path.as_path();
    tracing::debug!("Opening database at {}", db_path.display());
    let pool =
        init_pool(db_path).with_context(|| format!("Failed to open {}", db_path.display()))?;
    let conn = get_conn(&pool)?;

    Ok((config, conn))
}

fn migrate(config_path: Option<&Path>, database: Option<&Path>) -> Result<()> {
    let (config, conn) = open(config_path, database)?;
    let version = groupseed_db::migrations::current_version(&conn)?;

    println!("Database: {}", config.database.path.display());
    println!("Schema version: {}", version);
    Ok(())
}

fn run_seed(
    config_path: Option<&Path>,
    database: Option<&Path>,
    group: Option<GroupId>,
    json: bool,
) -> Result<()> {
    let (config, conn) = open(config_path, database)?;
    let requested = group.or(config.seed.group_id);

    let report = seed::run(&conn, requested, &config.seed.targets())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let state = if report.group_created {
            "created"
        } else {
            "existing"
        };
        println!("Group {} ({})", report.group.id, state);
        println!("Users created: {}", report.users_created.len());
        println!("Posts created: {}", report.posts_created.len());
        if report.is_noop() {
            println!("Nothing to do, targets already met.");
        }
    }

    Ok(())
}

fn show_stats(config_path: Option<&Path>, database: Option<&Path>, json: bool) -> Result<()> {
    let (_, conn) = open(config_path, database)?;
    let counts = stats::entity_counts(&conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for kind in EntityKind::ALL {
            println!("{}: {}", kind.table_name(), counts.get(kind));
        }
        println!("total: {}", counts.total());
    }

    Ok(())
}

fn show_group(
    config_path: Option<&Path>,
    database: Option<&Path>,
    id: GroupId,
    json: bool,
) -> Result<()> {
    let (_, conn) = open(config_path, database)?;
    let group =
        groups::get_group(&conn, id)?.ok_or_else(|| Error::not_found(format!("group {id}")))?;

    let users = associations::group_users(&conn, group.id)?;
    let group_posts = associations::group_posts(&conn, group.id)?;

    if json {
        let value = serde_json::json!({
            "group": group,
            "users": users,
            "posts": group_posts,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Group {}", group.id);
    println!("Users: {}", users.len());
    for user in &users {
        let count = posts::count_posts_for_user(&conn, user.id)?;
        println!("  User {}: {} posts", user.id, count);
    }
    println!("Posts: {}", group_posts.len());

    Ok(())
}

fn show_post(
    config_path: Option<&Path>,
    database: Option<&Path>,
    id: PostId,
    json: bool,
) -> Result<()> {
    let (_, conn) = open(config_path, database)?;
    let post = posts::get_post(&conn, id)?.ok_or_else(|| Error::not_found(format!("post {id}")))?;

    let user = associations::post_user(&conn, &post)?;
    let group = associations::post_group(&conn, &post)?;

    if json {
        let value = serde_json::json!({
            "post": post,
            "user": user,
            "group": group,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let describe = |id: Option<String>| id.unwrap_or_else(|| "none".to_string());
    println!("Post {}", post.id);
    println!("User: {}", describe(user.map(|u| u.id.to_string())));
    println!("Group: {}", describe(group.map(|g| g.id.to_string())));

    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    println!("Configuration is valid!");
    println!("  Database: {}", config.database.path.display());
    println!("  Users per group: {}", config.seed.users_per_group);
    println!("  Posts per user: {}", config.seed.posts_per_user);
    match config.seed.group_id {
        Some(id) => println!("  Group: {}", id),
        None => println!("  Group: first existing, or new"),
    }

    Ok(())
}
