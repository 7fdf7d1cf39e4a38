use anyhow::Context;
use dotenv::dotenv;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bp_tracker_api::entities::{PublicErrorResponse, VoiceInputRequest};
use bp_tracker_api::{create_in_memory_reading_service, AppConfig};

/// Entry point for the BP Tracker command line
///
/// Reads one spoken or typed reading per stdin line, stores every line that
/// parses, then prints the summary for the requested range.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Logs go to stderr so stdout stays machine readable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let range = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.default_range.clone());

    info!("Logging readings for {} (range {})", config.user_id, range);

    let service = create_in_memory_reading_service(config.parser.clone());
    let mut lines = BufReader::new(io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        match service.record_voice(&config.user_id, VoiceInputRequest { text: line }).await {
            Ok((parsed, _)) => println!("{}", serde_json::to_string(&parsed)?),
            Err(e) => {
                let response = PublicErrorResponse::from(&e);
                error!("Failed to save reading ({}): {}", response.code, response.message);
            }
        }
    }

    let summary = service
        .get_summary(&config.user_id, &range)
        .await
        .context("Failed to build summary")?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
