//! Badgescan entry point.
//!
//! Walks a range of RetroAchievements game IDs and reports every badge
//! whose dimensions are not 96x96.

use anyhow::bail;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use badgescan_ra_api::Client;
use badgescan_scanner::{ScanConfig, Scanner};

/// Check RetroAchievements game badge dimensions.
#[derive(Debug, Parser)]
#[command(name = "badgescan", version)]
struct Args {
    /// RetroAchievements Web API key.
    #[arg(long)]
    api_key: String,

    /// First game ID to check.
    #[arg(long, default_value_t = 1)]
    start_id: u32,

    /// Last game ID to check (inclusive).
    #[arg(long, default_value_t = 100)]
    end_id: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.start_id > args.end_id {
        bail!(
            "--start-id ({}) must not exceed --end-id ({})",
            args.start_id,
            args.end_id
        );
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        start_id = args.start_id,
        end_id = args.end_id,
        "checking games"
    );

    let client = Client::new(&args.api_key)?;
    let cancel = CancellationToken::new();

    // Ctrl-C stops the scan before the next game; the partial report
    // still prints.
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, stopping after current game");
                cancel.cancel();
            }
        });
    }

    let config = ScanConfig::new(args.start_id, args.end_id);
    let scanner = Scanner::new(&client, config, cancel);
    let report = scanner.run().await;

    print!("{}", report.render());

    if report.interrupted() {
        std::process::exit(1);
    }
    Ok(())
}
