use std::net::SocketAddr;

use envconfig::Envconfig;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use microbiome_dashboard::app::{create_router, AppState};
use microbiome_dashboard::config::Config;
use microbiome_dashboard::metrics::setup_metrics_recorder;
use microbiome_dashboard::report::pdf_export_available;

async fn shutdown() {
    let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("failed to register SIGTERM handler");

    let mut interrupt = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .expect("failed to register SIGINT handler");

    tokio::select! {
        _ = term.recv() => {},
        _ = interrupt.recv() => {},
    };

    tracing::info!("Shutting down gracefully...");
}

#[tokio::main]
async fn main() {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );
    tracing_subscriber::registry().with(fmt_layer).init();

    let config = Config::init_from_env().expect("Invalid configuration:");

    let metrics = if config.enable_metrics {
        Some(setup_metrics_recorder().expect("failed to install prometheus recorder"))
    } else {
        None
    };

    if pdf_export_available() {
        tracing::info!("PDF export enabled");
    } else {
        tracing::warn!(
            "PDF export is not compiled in, PDF downloads will fail. Rebuild with `--features pdf`"
        );
    }

    let app = create_router(AppState::from_config(&config), metrics);

    let listener = tokio::net::TcpListener::bind(config.bind())
        .await
        .expect("could not bind port");
    tracing::info!("listening on {}", config.bind());

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown())
    .await
    {
        tracing::error!("Server error: {}", e);
    }
}
