use anyhow::{Context, Result};
use sheetloader::{fetch::build_client, page, SheetConfig};
use std::{env, io};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr, stdout carries the JSON) ──────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();

    // ─── 2) config + client ─────────────────────────────────────────
    let config = SheetConfig::from_env()?;
    let client = build_client(&config)?;
    info!(url = %config.url, timeout = ?config.timeout(), "loading sheet");

    // ─── 3) load; failures are already logged and come back empty ──
    let page = page::load_with(&client, &config).await;
    info!(rows = page.data.len(), "loaded");

    let json = serde_json::to_string_pretty(&page).context("serializing page data")?;
    println!("{}", json);
    Ok(())
}
