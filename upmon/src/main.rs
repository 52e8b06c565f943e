//! Uptime monitor server entry point

use clap::Parser;
use tracing::{error, info};
use upmon::cli::Cli;
use upmon::config::{self, HealthCheckConfig};
use upmon::registry::ServiceRegistry;
use upmon::{bootstrap, logging, server, AppState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("upmon v{}", env!("CARGO_PKG_VERSION"));

    let services_file = config::services_file_path();
    info!(path = %services_file.display(), "Using services file");

    let registry = ServiceRegistry::new(services_file);

    bootstrap::prepare_registry(&registry).await;

    let state = AppState::new(registry, HealthCheckConfig::from_env());

    if let Err(e) = server::run(state, &cli.bind_addr()).await {
        error!(error = %e, bind_addr = %cli.bind_addr(), "Server error");
        std::process::exit(1);
    }
}
