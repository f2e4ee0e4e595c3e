use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use altvendor_api::RestApi;
use altvendor_storage::DatasetStore;

/// Alternate vendor lookup service
#[derive(Parser, Debug)]
#[command(name = "altvendor")]
#[command(about = "Rank alternate vendors for a product query", long_about = None)]
struct Args {
    /// Path to the vendor dataset JSON file
    #[arg(short, long, default_value = "./data/vendors.json")]
    data_file: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Seconds between dataset file change checks (0 disables)
    #[arg(long, default_value_t = 30)]
    reload_interval: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting altvendor v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset file: {:?}", args.data_file);
    info!("HTTP API port: {}", args.http_port);

    let store = Arc::new(DatasetStore::open(&args.data_file)?);
    if args.reload_interval > 0 {
        store.start_background_refresh(Duration::from_secs(args.reload_interval));
        info!("Dataset refresh every {}s", args.reload_interval);
    }

    let store_http = store.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(store_http, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("altvendor started successfully");
    info!("HTTP API: http://localhost:{}/alternate-vendors?q=", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
