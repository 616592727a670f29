//! Bank API server

use std::net::SocketAddr;
use std::sync::Arc;

use api_gateway::config::AppConfig;
use api_gateway::{router_with_trace_level, AppState};
use bank_service::{BankService, DataSourceKind};
use clap::Parser;
use common::error::Error;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

/// Bank API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address (overrides BIND_ADDR / PORT)
    #[clap(short, long)]
    addr: Option<String>,

    /// Data source backing the API: mock or network (overrides BANK_DATA_SOURCE)
    #[clap(short, long)]
    data_source: Option<DataSourceKind>,

    /// Endpoint of the remote banks API (overrides BANKS_API_URL)
    #[clap(long)]
    banks_url: Option<String>,

    /// Timeout for remote calls in seconds (overrides BANKS_API_TIMEOUT_SECS)
    #[clap(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(addr) = args.addr {
        config.addr = addr;
    }
    if let Some(data_source) = args.data_source {
        config.bank_service.data_source = data_source;
    }
    if let Some(banks_url) = args.banks_url {
        config.bank_service.banks_url = banks_url;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.bank_service.timeout_secs = timeout_secs;
    }

    // Initialize logging with debug level when DEBUG=1 env var is set
    let log_level = if config.debug { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Debug logging enabled");

    // Initialize services
    let bank_service = BankService::with_config(&config.bank_service)?;
    info!(
        "Starting bank API with {} data source",
        bank_service.data_source_name()
    );

    let state = Arc::new(AppState::new(bank_service));
    let app = router_with_trace_level(state, log_level);

    // Start the server
    let addr: SocketAddr = config
        .addr
        .parse()
        .map_err(|_| Error::ConfigurationError(format!("Invalid address: {}", config.addr)))?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
