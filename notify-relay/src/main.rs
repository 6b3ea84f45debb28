//! Notify Relay server.
//!
//! This binary:
//! - Receives storage notifications on `POST /`
//! - Decodes them in the configured shape
//! - Publishes each one to RabbitMQ and echoes the message ID

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notify_relay::{router, AppState, Config, Publisher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_starting");

    let config = Config::from_env();
    info!(
        port = config.port,
        queue = %config.queue_name,
        message_type = %config.message_type,
        max_body_bytes = config.max_body_bytes,
        "config_loaded"
    );

    let publisher = Publisher::new(config.amqp_url.clone(), config.queue_name.clone());
    info!("rabbitmq_publisher_created");

    let port = config.port;
    let state = AppState::new(config, Arc::new(publisher.clone()));

    // Refuse to start rather than fail every request
    let mode = state.mode().map_err(|e| {
        error!(message_type = %e.0, "relay_unknown_mode");
        e
    })?;
    info!(mode = %mode, "relay_mode_selected");

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "relay_listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    publisher.close().await;

    info!("relay_shutdown_complete");

    Ok(())
}

/// Resolve once SIGINT or SIGTERM arrives, logging which one.
///
/// Without a SIGTERM handler the relay still stops on SIGINT.
async fn shutdown_signal() {
    let received = tokio::select! {
        result = signal::ctrl_c() => match result {
            Ok(()) => "SIGINT",
            Err(e) => {
                warn!(error = %e, "relay_sigint_unavailable");
                std::future::pending::<&'static str>().await
            }
        },
        name = terminate_signal() => name,
    };

    info!(signal = received, "relay_shutting_down");
}

#[cfg(unix)]
async fn terminate_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
            "SIGTERM"
        }
        Err(e) => {
            warn!(error = %e, "relay_sigterm_unavailable");
            std::future::pending().await
        }
    }
}

#[cfg(not(unix))]
async fn terminate_signal() -> &'static str {
    std::future::pending().await
}
