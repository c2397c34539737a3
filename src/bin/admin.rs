//! CLI administration tool for short-url.
//!
//! Runs the same services as the HTTP server directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the schema
//! cargo run --bin admin -- db migrate
//!
//! # Shorten / resolve without going through HTTP
//! cargo run --bin admin -- shorten https://example.com/page
//! cargo run --bin admin -- resolve aZ3kP9
//!
//! # Count stored short URLs
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `short_url::config`.

use short_url::application::ServiceError;
use short_url::config::{self, Config};
use short_url::infrastructure::database;
use short_url::server::build_state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short URL
    Shorten {
        /// The long URL to store
        long_url: String,
    },

    /// Look up the long URL for a slug
    Resolve {
        /// The slug to resolve
        slug: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = database::connect(&config).await?;

    let result = dispatch(cli.command, &config, &pool).await;

    database::close(&pool).await;

    result
}

async fn dispatch(command: Commands, config: &Config, pool: &PgPool) -> Result<()> {
    match command {
        Commands::Shorten { long_url } => shorten(config, pool, &long_url).await,
        Commands::Resolve { slug } => resolve(config, pool, &slug).await,
        Commands::Stats => handle_stats(pool).await,
        Commands::Db { action } => handle_db_action(action, pool).await,
    }
}

async fn shorten(config: &Config, pool: &PgPool, long_url: &str) -> Result<()> {
    let state = build_state(Arc::new(pool.clone()), config.slug_length);

    let slug = state
        .shortening_service
        .shorten(long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!("  Slug:     {}", slug.bright_yellow().bold());
    println!("  Long URL: {}", long_url.cyan());

    Ok(())
}

async fn resolve(config: &Config, pool: &PgPool, slug: &str) -> Result<()> {
    let state = build_state(Arc::new(pool.clone()), config.slug_length);

    match state.resolution_service.resolve(slug).await {
        Ok(long_url) => {
            println!("  {} → {}", slug.bright_yellow(), long_url.cyan());
            Ok(())
        }
        Err(ServiceError::NotFound(_)) => {
            println!("{}", format!("❌ No URL registered for '{slug}'").red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Displays the number of stored short URLs.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short URLs: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            database::migrate(pool).await?;

            println!("{}", "✅ Schema up to date".green().bold());
        }
    }

    Ok(())
}
