use clap::Parser;
use tracing_subscriber::EnvFilter;

mod api;
mod auth;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    // Initialize color_eyre
    color_eyre::install()?;

    let config = Config::parse();

    // Initialize tracing subscriber
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Start server
    let app = api::router(config.access_token(), config.legacy_routes);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        legacy_routes = config.legacy_routes,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
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
}
