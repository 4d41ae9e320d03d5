use std::{sync::Arc, time::Duration};

use anyhow::Result;
use folio_contact::{Command, SimulatedTransport};
use folio_db::SqliteStore;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{config::Config, routes::AppState};

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting folio server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let pool =
        crate::db::create_pool(&config.database.url, config.database.max_connections).await?;
    crate::db::migrate(&pool).await?;

    let transport =
        SimulatedTransport::new(Duration::from_millis(config.contact.submit_latency_ms));
    let contact = Command::new(transport, config.contact.limits);

    let state = AppState {
        store: Arc::new(SqliteStore::new(pool.clone())),
        contact,
        pool: pool.clone(),
        config,
    };

    let app = crate::routes::router(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
