use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wraptime::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // In debug mode messages route through tracing instead of plain console
    // output; install the matching subscriber.
    if std::env::var("WRAPTIME_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu().await
}
