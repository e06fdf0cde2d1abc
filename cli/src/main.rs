//! Specimen CLI - prints the known-answer demonstration transcript.
//!
//! The binary exists so a harness can run one command and assert on pinned
//! output: a greeting line and a calculator line, in that order.
//!
//! ```text
//! Hello, World!
//! 8
//! ```
//!
//! Setting `SPECIMEN_FETCH_URL` additionally runs the async fetch operation
//! against that URL and pretty-prints the fetched JSON object; with the
//! variable unset the binary performs no network activity. Logs go to
//! stderr so the stdout transcript stays byte-stable.

use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use specimen_ops::{Calculator, fetch_data, greet};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Optional fetch-demonstration target, read from `SPECIMEN_FETCH_URL`.
///
/// Blank values are treated as unset.
fn fetch_target_from_env() -> Option<String> {
    match env::var("SPECIMEN_FETCH_URL") {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut calc = Calculator::new();
    println!("{}", greet("World"));
    println!("{}", calc.add(5, 3).result());

    if let Some(url) = fetch_target_from_env() {
        tracing::info!(%url, "running the fetch demonstration");
        let data = fetch_data(&url)
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        println!("{}", serde_json::to_string_pretty(&data)?);
    }

    Ok(())
}
