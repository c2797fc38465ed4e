//! Quiver binary.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quiver::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the collection text.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let text = quiver::run(&cli.command, &config)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, text.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote collection");
        }
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}
