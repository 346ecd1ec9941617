//! # Rentals Seed Entry Point
//!
//! Synchronizes the schema and loads the sample rental data. Progress is
//! logged to stderr; the final summary goes to stdout.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rentals_seed::{
    config::{AppConfig, ConfigLoader},
    db::{init_pool, sync_schema},
    seeds::seed_with_config,
    telemetry::init_tracing,
};

/// Seed a rentals database with sample admin, client, property, lease and payment data.
#[derive(Debug, Parser)]
#[command(name = "rentals-seed", version, about)]
struct Args {
    /// Skip schema synchronization and assume the tables already exist.
    #[arg(long)]
    skip_sync: bool,

    /// Database URL; overrides RENTALS_DATABASE_URL.
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    init_tracing(&config).context("failed to initialize logging")?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted) = config.redacted_json() {
        tracing::debug!(config = %redacted, "Effective configuration");
    }

    let db = init_pool(&config)
        .await
        .context("failed to connect to the database")?;

    if args.skip_sync {
        tracing::info!("Skipping schema synchronization");
    } else {
        sync_schema(&db)
            .await
            .context("failed to synchronize the database schema")?;
    }

    let summary = seed_with_config(&db, &config)
        .await
        .context("failed to seed the database")?;

    println!("{summary}");
    println!();
    println!("Seeding completed successfully.");
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(url) = &args.database_url {
        loader = loader.with_override("DATABASE_URL", url.as_str());
    }
    loader.load().context("failed to load configuration")
}
