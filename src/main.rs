use ethscan::{Config, ExplorerClient, Menu};

use anyhow::{Context, Result};
use std::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::load()?;
    let endpoint = config
        .endpoint()
        .context("Explorer API is not configured")?;
    tracing::debug!(?endpoint, "configuration loaded");

    let client = ExplorerClient::new(endpoint)?;
    let mut menu = Menu::new(client, stdin().lock(), stdout());
    menu.run().await.context("Terminal I/O failed")?;

    Ok(())
}

/// Logs go to stderr so they never interleave with menu output.
/// Defaults to warnings only; override with RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
