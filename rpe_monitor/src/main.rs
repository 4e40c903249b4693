use clap::Parser;
use rpe_core::config::PORT_ENV_VAR;
use rpe_core::{Config, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpe-monitor")]
#[command(about = "Status and health-check service", long_about = None)]
struct Cli {
    /// Override config file location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    rpe_core::logging::init_with_filter(rpe_core::logging::MONITOR_FILTER);

    let cli = Cli::parse();
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let port_override = std::env::var(PORT_ENV_VAR).ok();
    let addr = rpe_monitor::listen_addr(&config.monitor, port_override.as_deref())?;

    rpe_monitor::serve(&config.monitor, addr).await
}
