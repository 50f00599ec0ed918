use std::time::Duration;

use axum::{body::Body, extract::Request, http::Response};
use time::UtcOffset;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{Span, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use stretch_server::{app::App, config::ServerConfig, utils::get_request_id};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use UTC timestamps
    let offset = UtcOffset::UTC;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    offset,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true) // "level": "info"
                .with_target(false) // don’t log module path
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    // Load configuration
    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        host = %settings.server.host,
        port = settings.server.port
    );

    // Build routes
    let app = App::new()
        .router()
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    let headers = req
                        .headers()
                        .iter()
                        .filter(|(k, _)| k.as_str().to_ascii_lowercase() != "x-request-id")
                        .map(|(k, v)| {
                            format!("{}: {}", k.as_str(), v.to_str().unwrap_or("<non-utf8>"))
                        })
                        .collect::<Vec<_>>()
                        .join("; ");

                    info!(
                        msg = "Request initiated",
                        req_id = %get_request_id(req.extensions()),
                        method = %req.method(),
                        uri = %req.uri(),
                        headers = %headers
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        msg = "Request processed",
                        req_id = %get_request_id(res.extensions()),
                        status = %res.status().as_u16(),
                        latency = ?latency
                    )
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()));

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(msg = "Starting server", addr = %addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(msg = "Server shutdown complete");

    Ok(())
}

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!(msg = "Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            info!(msg = "Received SIGTERM, starting graceful shutdown");
        },
    }
}
