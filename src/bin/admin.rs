//! CLI administration tool for tinylink.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (scheme defaults to http://)
//! cargo run --bin admin -- shorten example.com/page
//!
//! # Resolve a code (counts a click)
//! cargo run --bin admin -- expand 1
//!
//! # Statistics and listing
//! cargo run --bin admin -- stats 1
//! cargo run --bin admin -- list
//!
//! # Base62 helpers
//! cargo run --bin admin -- encode 123
//! cargo run --bin admin -- decode 1Z
//!
//! # Menu-driven session
//! cargo run --bin admin -- interactive
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, default `sqlite://urls.db`
//! - `BASE_URL` (optional): prefix for printed short URLs

use tinylink::application::services::UrlService;
use tinylink::config::{DEFAULT_DATABASE_URL, load_from_env};
use tinylink::infrastructure::persistence::{
    SqliteIdAllocator, SqliteUrlRepository, connect_pool, migrate,
};
use tinylink::state::SqliteUrlService;
use tinylink::utils::base62;
use tinylink::utils::url_normalizer::prepare_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten; `http://` is assumed when no scheme is given
        url: String,
    },

    /// Resolve a short code (counts a click)
    Expand {
        /// Short code to resolve
        code: String,
    },

    /// Show statistics for a short code
    Stats {
        /// Short code to inspect
        code: String,
    },

    /// List all shortened URLs, newest first
    List,

    /// Encode a number as base62
    Encode {
        /// Non-negative integer
        number: u64,
    },

    /// Decode a base62 string
    Decode {
        /// Base62 string
        code: String,
    },

    /// Menu-driven session
    Interactive,

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

    /// Show database info
    Info,
}

/// Connection context shared by the commands.
struct Admin {
    pool: Arc<SqlitePool>,
    service: SqliteUrlService,
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Pure codec commands need no database
    match &cli.command {
        Commands::Encode { number } => {
            print_encode(*number);
            return Ok(());
        }
        Commands::Decode { code } => {
            print_decode(code);
            return Ok(());
        }
        _ => {}
    }

    let admin = connect().await?;

    match cli.command {
        Commands::Shorten { url } => shorten(&admin, &url).await?,
        Commands::Expand { code } => expand(&admin, &code).await?,
        Commands::Stats { code } => stats(&admin, &code).await?,
        Commands::List => list(&admin).await?,
        Commands::Interactive => interactive(&admin).await?,
        Commands::Db { action } => handle_db_action(action, &admin).await?,
        Commands::Encode { .. } | Commands::Decode { .. } => {}
    }

    admin.pool.close().await;

    Ok(())
}

/// Opens the database, applies migrations and builds the URL service.
async fn connect() -> Result<Admin> {
    let config = load_from_env().context("Invalid configuration")?;

    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.busy_timeout(),
    )
    .await
    .with_context(|| {
        format!(
            "Failed to open database {} (default: {})",
            config.database_url, DEFAULT_DATABASE_URL
        )
    })?;

    migrate(&pool).await.context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let service = UrlService::new(
        Arc::new(SqliteUrlRepository::new(pool.clone())),
        Arc::new(SqliteIdAllocator::new(pool.clone())),
    );

    Ok(Admin {
        pool,
        service,
        base_url: config.base_url,
    })
}

/// Defaults the scheme and normalizes a URL given on the command line.
fn parse_url_arg(raw_url: &str) -> Result<String> {
    prepare_url(raw_url).with_context(|| format!("Invalid URL: {}", raw_url))
}

async fn shorten(admin: &Admin, raw_url: &str) -> Result<()> {
    let url = parse_url_arg(raw_url)?;

    let code = admin
        .service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!(
        "{} {}",
        "✅ Shortened URL:".green().bold(),
        admin
            .service
            .get_short_url(&admin.base_url, &code)
            .bright_yellow()
    );
    println!("   Original:   {}", url.cyan());
    println!("   Short code: {}", code.bright_white().bold());

    Ok(())
}

async fn expand(admin: &Admin, code: &str) -> Result<()> {
    match admin.service.expand(code).await {
        Ok(url) => println!("{} {}", "✅ Original URL:".green().bold(), url.cyan()),
        Err(e) if e.is_not_found() => println!("{}", "❌ Short code not found".red()),
        Err(e) => return Err(anyhow::anyhow!("Failed to expand code: {}", e)),
    }

    Ok(())
}

async fn stats(admin: &Admin, code: &str) -> Result<()> {
    match admin.service.stats(code).await {
        Ok(stats) => {
            println!(
                "{} {}",
                "📊 Statistics for".bright_blue().bold(),
                code.bright_white().bold()
            );
            println!("   Original URL: {}", stats.original_url.cyan());
            println!(
                "   Created:      {}",
                stats.created_at.format("%Y-%m-%d %H:%M:%S")
            );
            println!(
                "   Clicks:       {}",
                stats.click_count.to_string().bright_green().bold()
            );
        }
        Err(e) if e.is_not_found() => println!("{}", "❌ Short code not found".red()),
        Err(e) => return Err(anyhow::anyhow!("Failed to load statistics: {}", e)),
    }

    Ok(())
}

/// Lists all URLs as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Shortened URLs
///
///   Code     Clicks  Created            Original URL
///   ───────────────────────────────────────────────────────────
///   3        0       2024-01-16 14:20   https://example.com/c
///   2        4       2024-01-15 10:30   https://example.com/b
/// ```
async fn list(admin: &Admin) -> Result<()> {
    println!("{}", "📋 Shortened URLs".bright_blue().bold());
    println!();

    let urls = admin
        .service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if urls.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<7} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for url in &urls {
        println!(
            "  {:<8} {:<7} {:<18} {}",
            url.short_code.cyan(),
            url.click_count.to_string().bright_green(),
            url.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            url.original_url
        );
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_encode(number: u64) {
    println!(
        "  {} -> {}",
        number.to_string().bright_white(),
        base62::encode(number).bright_yellow().bold()
    );
}

fn print_decode(code: &str) {
    match base62::decode(code) {
        Ok(number) => println!(
            "  {} -> {}",
            code.bright_yellow(),
            number.to_string().bright_white().bold()
        ),
        Err(e) => println!("{} {}", "❌".red(), e),
    }
}

/// Shows how code length grows with the identifier.
fn base62_demo() {
    println!("{}", "🔢 Base62 Encoding".bright_blue().bold());
    println!(
        "  Alphabet: {}",
        String::from_utf8_lossy(base62::ALPHABET).bright_black()
    );
    println!();

    for number in [0, 1, 61, 62, 3_843, 3_844, 1_000_000, 56_800_235_583] {
        print_encode(number);
    }
    println!();
}

/// Runs the menu loop until the user picks "Exit".
async fn interactive(admin: &Admin) -> Result<()> {
    const ITEMS: &[&str] = &[
        "Shorten a URL",
        "Expand a short code",
        "View URL statistics",
        "List all URLs",
        "Base62 encoding demo",
        "Exit",
    ];

    println!("{}", "🔗 tinylink interactive session".bright_blue().bold());

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let url: String = Input::new().with_prompt("URL to shorten").interact_text()?;
                if let Err(e) = shorten(admin, url.trim()).await {
                    println!("{} {:#}", "❌".red(), e);
                }
            }
            1 => {
                let code: String = Input::new().with_prompt("Short code").interact_text()?;
                expand(admin, code.trim()).await?;
            }
            2 => {
                let code: String = Input::new().with_prompt("Short code").interact_text()?;
                stats(admin, code.trim()).await?;
            }
            3 => list(admin).await?,
            4 => base62_demo(),
            _ => break,
        }
    }

    println!("{}", "👋 Bye".bright_black());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, admin: &Admin) -> Result<()> {
    let pool = admin.pool.as_ref();

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let urls = admin
                .service
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;
            let clicks: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0) FROM urls")
                .fetch_one(pool)
                .await?;
            let last_id: i64 =
                sqlx::query_scalar("SELECT value FROM url_id_sequence WHERE name = 'urls'")
                    .fetch_one(pool)
                    .await?;

            println!("  SQLite:       {}", version.bright_white());
            println!("  URLs:         {}", urls.to_string().bright_green().bold());
            println!(
                "  Clicks:       {}",
                clicks.to_string().bright_green().bold()
            );
            println!("  Last id:      {}", last_id.to_string().bright_black());
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_arg_defaults_scheme() {
        assert_eq!(
            parse_url_arg("example.com/page").unwrap(),
            "http://example.com/page"
        );
    }

    #[test]
    fn test_parse_url_arg_rejects_bad_url() {
        let err = parse_url_arg("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("Invalid URL: ftp://example.com"));

        assert!(parse_url_arg("not a url").is_err());
        assert!(parse_url_arg("http://intranet").is_err());
    }
}
