use relay_bus::{BroadcastBus, BusConfig, ShutdownCoordinator};
use relay_config::Config;
use relay_server::{AppState, ServerError, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure the log directory exists before the logger opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            ServerError::io(format!("create log directory {}", log_dir.display()), e)
        })?;
    }

    // Initialize logger (before any other logging)
    let level = config.logging.level_filter()?;
    logger::initialize(level, log_file_path, config.logging.colored)?;

    info!("Starting relay-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let bus = BroadcastBus::new(BusConfig {
        history_capacity: config.history.capacity,
        subscriber_buffer_size: config.events.buffer_size,
    })
    .map_err(ServerError::from)?;
    info!("Broadcast bus ready (history capacity {})", bus.capacity());

    let static_root = config.static_files.root();
    if !static_root.is_dir() {
        warn!(
            "Static directory {} does not exist, asset requests will return 404",
            static_root.display()
        );
    }

    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState {
        bus,
        shutdown: shutdown.clone(),
        events: config.events.clone(),
        static_files: config.static_files.clone(),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
