use std::{future::ready, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::Config;
use crate::handlers::{
    dashboard, download_report, heatmap_data, liveness, novelty_data, processing_status,
    readiness, reject_oversized_upload, session_upload, taxonomy_data, upload_fastq,
};
use crate::metrics::track_metrics;
use crate::session::{MemorySessionStore, SessionStore};

// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub session_cookie_name: String,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sessions: Arc::new(MemorySessionStore::new(
                config.session_ttl(),
                config.session_max_entries,
            )),
            session_cookie_name: config.session_cookie_name.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// Largest request body accepted, the file plus multipart framing.
    pub fn request_body_limit(&self) -> usize {
        self.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES)
    }
}

pub fn create_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let body_limit = state.request_body_limit();

    let status_routes = Router::new()
        .route("/_liveness", get(liveness))
        .route("/_readiness", get(readiness));

    let page_routes = Router::new()
        .route("/", get(dashboard))
        .route("/upload", post(upload_fastq))
        .route("/upload/", post(upload_fastq))
        .route("/processing_status", get(processing_status))
        .route("/processing_status/", get(processing_status))
        .route("/download_report", get(download_report))
        .route("/download_report/", get(download_report));

    let api_routes = Router::new()
        .route("/api/taxonomy", get(taxonomy_data))
        .route("/api/taxonomy/", get(taxonomy_data))
        .route("/api/heatmap", get(heatmap_data))
        .route("/api/heatmap/", get(heatmap_data))
        .route("/api/novelty", get(novelty_data))
        .route("/api/novelty/", get(novelty_data))
        .route("/api/upload", get(session_upload))
        .route("/api/upload/", get(session_upload));

    let router = Router::new()
        .merge(status_routes)
        .merge(page_routes)
        .merge(api_routes)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            reject_oversized_upload,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(track_metrics))
        .with_state(state);

    match metrics {
        Some(recorder_handle) => {
            router.route("/metrics", get(move || ready(recorder_handle.render())))
        }
        None => router,
    }
}
