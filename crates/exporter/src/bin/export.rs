use anyhow::Context;
use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;
use storage::{Database, LeagueSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "league-export")]
#[command(about = "Export public league data to static JSON files", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://league.db")]
    database_url: String,

    #[arg(long, default_value = "./data")]
    output: PathBuf,

    #[arg(long, env = "NO_SHOW_WIN_POINTS", default_value_t = storage::settings::DEFAULT_NO_SHOW_WIN_POINTS)]
    no_show_win_points: i64,

    #[arg(long, env = "TIMEZONE", default_value = "Europe/Madrid")]
    timezone: String,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("league_export={},exporter={},storage={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let timezone: Tz = cli
        .timezone
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Unknown timezone {:?}", cli.timezone))?;

    let settings = LeagueSettings {
        no_show_win_points: cli.no_show_win_points,
        timezone,
        ..LeagueSettings::default()
    };

    let db = Database::new(&cli.database_url)
        .await
        .context("Failed to open database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let files = exporter::export(db.pool(), &settings, &cli.output)
        .await
        .with_context(|| format!("Failed to export to {}", cli.output.display()))?;

    tracing::info!(
        "Export complete: {} files in {}",
        files.len(),
        cli.output.display()
    );

    Ok(())
}
