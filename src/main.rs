use axum::http::{HeaderValue, Method, header};
use movie_catalog::core::{AppState, Config, database};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,movie_catalog=debug,sqlx=warn,tower_http=debug")
            }),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Pool di connessioni e schema
    let pool = database::connect(
        &config.database_url,
        config.max_connections,
        config.enforce_foreign_keys,
    )
    .await?;
    database::init_schema(&pool).await?;

    let state = Arc::new(AppState::new(pool));
    let mut app = movie_catalog::create_router(state);

    if let Some(origin) = &config.cors_allowed_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                app = app.layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_origin(origin)
                        .allow_headers([header::CONTENT_TYPE]),
                );
            }
            Err(_) => warn!("Ignoring invalid CORS_ALLOWED_ORIGIN: {}", origin),
        }
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
