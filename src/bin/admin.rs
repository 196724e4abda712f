//! CLI administration tool for the storefront API.
//!
//! Provides commands for managing API tokens and coupons, and for
//! performing database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token for a customer account
//! cargo run --bin admin -- token create --email buyer@example.com
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Mobile App"
//!
//! # Create a coupon
//! cargo run --bin admin -- coupon create --name SUMMER20 --discount 20
//!
//! # List coupons
//! cargo run --bin admin -- coupon list
//!
//! # Remove a coupon
//! cargo run --bin admin -- coupon remove SUMMER20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for token commands): HMAC key, must
//!   match the server's

use storefront_api::application::services::auth_service::hash_token;
use storefront_api::domain::entities::NewCoupon;
use storefront_api::domain::repositories::{CouponRepository, TokenRepository};
use storefront_api::infrastructure::persistence::{PgCouponRepository, PgTokenRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the storefront API.
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
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage discount coupons
    Coupon {
        #[command(subcommand)]
        action: CouponAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "Mobile App", "Storefront Web")
        #[arg(short, long)]
        name: Option<String>,

        /// Email of the customer account this token authenticates as
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token by name
    Revoke {
        /// Token name to revoke
        name: String,
    },
}

/// Coupon management subcommands.
#[derive(Subcommand)]
enum CouponAction {
    /// Create a coupon
    Create {
        /// Coupon code customers will submit (e.g., "SUMMER20")
        #[arg(short, long)]
        name: Option<String>,

        /// Discount percentage (0-100)
        #[arg(short, long)]
        discount: Option<f64>,
    },

    /// List all coupons
    List,

    /// Remove a coupon by name
    Remove {
        /// Coupon name to remove
        name: String,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Coupon { action } => handle_coupon_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create { name, email, yes } => {
            create_token(repo, name, email, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name } => {
            revoke_token(repo, name).await?;
        }
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for token name and principal email (or use provided)
/// 2. Generate a random token value
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash token with HMAC-SHA256 keyed by `TOKEN_SIGNING_SECRET`
/// 6. Store in database
/// 7. Display usage instructions
///
/// # Security
///
/// - Only the keyed hash is stored in the database
/// - Raw token is displayed once and cannot be retrieved later
async fn create_token(
    repo: Arc<PgTokenRepository>,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
        .context("TOKEN_SIGNING_SECRET must be set to create tokens")?;

    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Storefront Web")
            .interact_text()?,
    };

    let user_email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Customer email")
            .interact_text()?,
    };

    let token_value = generate_token();
    println!("{}", "✨ Generated new token".green());

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  Email: {}", user_email.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&signing_secret, &token_value);

    repo.create(&token_name, &user_email, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token_value.bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/user/cart",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<24} {:<28} {:<17} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for token in &tokens {
        let status = if token.revoked {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<24} {:<28} {:<17} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.user_email.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - Revoking an unknown or already-revoked token reports a warning
async fn revoke_token(repo: Arc<PgTokenRepository>, name: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();
    println!("  Token: {}", name.cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let revoked = repo
        .revoke(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    if revoked {
        println!("{}", "✅ Token revoked successfully!".green().bold());
    } else {
        println!("{}", "⚠️  No active token with that name".yellow());
    }
    println!();

    Ok(())
}

/// Dispatches coupon management commands.
async fn handle_coupon_action(action: CouponAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCouponRepository::new(Arc::new(pool.clone())));

    match action {
        CouponAction::Create { name, discount } => {
            create_coupon(repo, name, discount).await?;
        }
        CouponAction::List => {
            list_coupons(repo).await?;
        }
        CouponAction::Remove { name } => {
            remove_coupon(repo, name).await?;
        }
    }

    Ok(())
}

/// Creates a coupon with interactive prompts for missing values.
async fn create_coupon(
    repo: Arc<PgCouponRepository>,
    name: Option<String>,
    discount: Option<f64>,
) -> Result<()> {
    println!("{}", "🎟️  Create Coupon".bright_blue().bold());
    println!();

    let coupon_name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Coupon code").interact_text()?,
    };

    let discount = match discount {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Discount percentage (0-100)")
            .interact_text()?,
    };

    if !(0.0..=100.0).contains(&discount) {
        anyhow::bail!("Discount must be between 0 and 100, got {}", discount);
    }

    let coupon = repo
        .create(NewCoupon {
            name: coupon_name,
            discount,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create coupon: {}", e))?;

    println!();
    println!("{}", "✅ Coupon created successfully!".green().bold());
    println!("  Code:     {}", coupon.name.cyan());
    println!("  Discount: {}%", coupon.discount.to_string().bright_green());
    println!();

    Ok(())
}

/// Lists all coupons.
async fn list_coupons(repo: Arc<PgCouponRepository>) -> Result<()> {
    println!("{}", "🎟️  Coupons".bright_blue().bold());
    println!();

    let coupons = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list coupons: {}", e))?;

    if coupons.is_empty() {
        println!("{}", "  No coupons found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<24} {:<10}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Discount".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for coupon in &coupons {
        println!(
            "  {:<3} {:<24} {}%",
            coupon.id.to_string().bright_black(),
            coupon.name.cyan(),
            coupon.discount.to_string().bright_green()
        );
    }

    println!();

    Ok(())
}

/// Removes a coupon by name with confirmation prompt.
async fn remove_coupon(repo: Arc<PgCouponRepository>, name: String) -> Result<()> {
    println!("{}", "🗑️  Remove Coupon".bright_blue().bold());
    println!();
    println!("  Code: {}", name.cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Remove this coupon?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let removed = repo
        .delete_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove coupon: {}", e))?;

    println!();
    if removed {
        println!("{}", "✅ Coupon removed successfully!".green().bold());
    } else {
        println!("{}", "⚠️  No coupon with that name".yellow());
    }
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
