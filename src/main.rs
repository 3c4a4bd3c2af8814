use std::env;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use steamblock_rs::{AppConfig, Blocker, BlockerConfig, report};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "steamblock_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [config-file]", args[0]);
        eprintln!("  config-file: JSON run configuration (default: config.json)");
        return Ok(());
    }
    let config_path = args.get(1).map(String::as_str).unwrap_or("config.json");

    // Config problems are fatal before any request goes out.
    let config = AppConfig::load(config_path)?;
    let credentials = config.credentials();

    println!("=== Steam user block tool ===");
    println!("Session ID: {}", credentials.masked_session_id());
    println!("Users to block: {}", config.steam_ids_to_block.len());
    println!("Request interval: {}s", config.delay_seconds);
    println!();

    if !confirm("Proceed? (y/N): ")? {
        println!("Aborted, no requests sent.");
        return Ok(());
    }

    let blocker = Blocker::with_config(
        credentials,
        BlockerConfig {
            timeout: Duration::from_secs(config.timeout_seconds),
            ..Default::default()
        },
    )?;

    let results = blocker
        .block_many(
            &config.steam_ids_to_block,
            Duration::from_secs(config.delay_seconds),
        )
        .await;

    report::print_summary(&results);

    // A write failure is reported but never fatal; the results above are
    // already complete and printed.
    match report::save_results(&results, config.output_file.as_deref()) {
        Ok(path) => println!("Results saved to {}", path.display()),
        Err(e) => {
            tracing::warn!(error = %e, "could not persist results");
            eprintln!("Warning: could not save results: {e:#}");
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read confirmation")?;
    Ok(matches!(line.trim(), "y" | "Y"))
}
