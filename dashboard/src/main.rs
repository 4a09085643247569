//! Dashboard process entry point

use clap::Parser;
use std::path::PathBuf;
use tokio::signal;

use dashboard::{AppState, Dashboard, DashboardResult, StaticMetricsSource};
use shared::{Component, DashboardConfig, DashboardSettings, component_info, logging};
use waitlist::{JsonFixtureSource, WaitlistState};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Admin dashboard API serving mock waitlist and metrics data")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Waitlist JSON document to serve instead of the bundled one
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Simulated latency of every data call, in milliseconds
    #[arg(long, default_value = "100")]
    latency_ms: u64,

    /// Front-end assets served at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl From<Args> for DashboardSettings {
    fn from(args: Args) -> Self {
        DashboardSettings {
            bind_address: args.bind,
            port: args.port,
            log_level: args.log_level,
            data_file: args.data_file,
            latency_ms: args.latency_ms,
            static_dir: args.static_dir,
        }
    }
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    let settings = DashboardSettings::from(Args::parse());
    settings.validate()?;

    logging::init_tracing_with_level(Some(&settings.log_level));
    logging::log_startup(Component::Dashboard, &format!("dashboard on {}", settings.socket_address()));

    let latency = settings.latency();
    let source = match &settings.data_file {
        Some(path) => JsonFixtureSource::from_file(path, latency).await?,
        None => JsonFixtureSource::bundled(latency)?,
    };
    let metrics = StaticMetricsSource::new(latency);
    let state = AppState::new(WaitlistState::new(source), metrics, DashboardConfig::default());

    // Populate the store in the background; the API answers once it is ready
    let loader = state.clone();
    tokio::spawn(async move {
        let load_state = loader.load_waitlist().await;
        component_info!(Component::Waitlist, state = ?load_state, "Waitlist store settled");
    });

    let dashboard = Dashboard::new(state, settings);

    let shutdown_sender = dashboard.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(Component::Dashboard, "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(Component::Dashboard, "Signal handling", &err);
            }
        }
    });

    dashboard.run().await?;

    logging::log_success(Component::Dashboard, "Dashboard stopped gracefully");
    Ok(())
}
