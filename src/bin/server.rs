use clap::Parser;
use parkright_dashboard::db::{self, MySqlDashboardStore};
use parkright_dashboard::server::config::DashboardConfig;
use parkright_dashboard::server::logging::init_logging;
use parkright_dashboard::version::VERSION;
use parkright_dashboard::web::{self, render::DashboardRenderer};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal.");
    }
    info!("Shutdown signal received.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("Dashboard version: {VERSION}");
        return Ok(());
    }

    let args = Args::parse();

    let config = match DashboardConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load dashboard configuration: {e}");
            return Err(e.into());
        }
    };

    init_logging(&config.log_dir);
    info!("Starting dashboard, version: {}", VERSION);

    // --- Database Pool Setup ---
    let pool = db::create_pool(&config.database_url, config.max_connections)?;
    let store = Arc::new(MySqlDashboardStore::new(pool.clone()));

    // --- Axum HTTP Server Setup ---
    let renderer = DashboardRenderer::new()?;
    let app = web::create_axum_router(store, renderer);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let socket = if addr.is_ipv4() {
        tokio::net::TcpSocket::new_v4()?
    } else {
        tokio::net::TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    let listener = socket.listen(1024)?;
    info!(address = %addr, max_connections = config.max_connections, "Dashboard listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Dashboard stopped.");
    Ok(())
}
