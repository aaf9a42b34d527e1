//! # Genes
//!
//! HTTP service answering gene annotation lookups by location or identifier.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use genes_domain::CliOverrides;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing::info;

use bootstrap::{init_logging, load_config, log_config_summary};
use di::{Services, UseCases};

#[derive(Parser)]
#[command(name = "genes")]
#[command(version)]
#[command(about = "Gene annotation lookup service")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Root directory holding <genome>/<assembly>/<track> data
    #[arg(short = 'd', long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        data_dir: cli.data_dir,
        log_level: cli.log_level,
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config_summary(cli.config.as_deref(), &config);

    info!(version = env!("CARGO_PKG_VERSION"), "Genes server starting");

    let services = Services::new(&config);
    let sweeper = services.start_sweeper(&config);
    let state = UseCases::new(&config, &services).into_state(&config);

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;

    server::start_web_server(bind_addr, state, &config.server.cors_allowed_origins).await?;

    sweeper.abort();
    let metrics = services.cache.metrics();
    info!(
        cached_responses = services.cache.len(),
        hit_rate = format!("{:.1}%", metrics.hit_rate()),
        evictions = metrics.evictions.load(Ordering::Relaxed),
        loaded_tracks = services.reader.loaded_tracks(),
        "Genes server stopped"
    );

    Ok(())
}
