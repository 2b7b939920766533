//! CLI administration tool for car-rental-api.
//!
//! Provides commands for generating API keys, viewing statistics,
//! closing open rentals, and performing database operations without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Generate a value for API_KEY
//! cargo run --bin admin -- key generate
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # End an open-ended rental now
//! cargo run --bin admin -- rentals close 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for every command except `key generate`):
//!   PostgreSQL connection string

use car_rental_api::application::services::RentalService;
use car_rental_api::domain::entities::NewRental;
use car_rental_api::domain::repositories::RentalRepository;
use car_rental_api::infrastructure::persistence::PgRentalRepository;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing car-rental-api.
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
    /// API key helpers
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Show statistics
    Stats,

    /// Rental maintenance
    Rentals {
        #[command(subcommand)]
        action: RentalAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Print a fresh random API key
    Generate,
}

#[derive(Subcommand)]
enum RentalAction {
    /// Set an open-ended rental's end to now
    Close {
        /// Rental ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Key {
        action: KeyAction::Generate,
    } = cli.command
    {
        generate_key_command();
        return Ok(());
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Key { .. } => {}
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Rentals { action } => handle_rental_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn generate_key_command() {
    let key = generate_key();

    println!("{}", "🔑 Generated API key".bright_blue().bold());
    println!();
    println!("  {}", key.bright_yellow().bold());
    println!();
    println!("{}", "Set it on the server:".bright_white());
    println!("  {}={}", "API_KEY".bright_cyan(), key);
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X DELETE -H \"X-API-Key: {}\" http://localhost:3000/rentals/1",
        key.bright_yellow()
    );
    println!();
}

/// Displays record counts.
///
/// Shows:
/// - Customers, cars and rentals on file
/// - Rentals in progress right now (open-ended ones included)
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    let cars: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await?;

    let rentals: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals")
        .fetch_one(pool)
        .await?;

    let active: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM rentals \
         WHERE rental_start <= NOW() AND (rental_end IS NULL OR rental_end >= NOW())",
    )
    .fetch_one(pool)
    .await?;

    println!("  Customers:      {}", customers.to_string().bright_green().bold());
    println!("  Cars:           {}", cars.to_string().bright_green().bold());
    println!("  Rentals:        {}", rentals.to_string().bright_green().bold());
    println!("  Active rentals: {}", active.to_string().bright_green().bold());
    println!();

    Ok(())
}

async fn handle_rental_action(action: RentalAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgRentalRepository::new(Arc::new(pool.clone())));

    match action {
        RentalAction::Close { id, yes } => close_rental(repo, id, yes).await?,
    }

    Ok(())
}

/// Ends an open-ended rental at the current time.
///
/// The change goes through [`RentalService::update_rental`], so the period
/// rules apply as they would over HTTP.
async fn close_rental(repo: Arc<PgRentalRepository>, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔒 Close rental".bright_blue().bold());
    println!();

    let rental = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Rental not found")?;

    if rental.rental_end.is_some() {
        println!("{}", "⚠️  This rental already has an end time".yellow());
        return Ok(());
    }

    let now = Utc::now();

    println!("  Rental:   {}", rental.id.to_string().bright_black());
    println!("  Customer: {}", rental.customer_id.to_string().cyan());
    println!("  Car:      {}", rental.car_id.to_string().cyan());
    println!(
        "  Start:    {}",
        rental.rental_start.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!(
        "  End:      {}",
        now.format("%Y-%m-%d %H:%M").to_string().bright_white()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Close this rental?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = RentalService::new(repo);
    service
        .update_rental(
            id,
            NewRental {
                customer_id: rental.customer_id,
                car_id: rental.car_id,
                rental_start: rental.rental_start,
                rental_end: Some(now),
            },
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to close rental: {}", e))?;

    println!("{}", "✅ Rental closed".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a random API key.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_key() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const KEY_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..KEY_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
