use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::session::session_id;
use crate::simulation::{generate_heatmap, generate_taxonomy, novelty_clusters};
use crate::types::{HeatmapResponse, NoveltyResponse, SessionUploadResponse, TaxonomyResponse};

pub async fn taxonomy_data() -> Json<TaxonomyResponse> {
    let taxonomy_data = generate_taxonomy(&mut rand::thread_rng());
    Json(TaxonomyResponse { taxonomy_data })
}

pub async fn heatmap_data() -> Json<HeatmapResponse> {
    Json(generate_heatmap(&mut rand::thread_rng()))
}

pub async fn novelty_data() -> Json<NoveltyResponse> {
    Json(NoveltyResponse {
        novel_clusters: novelty_clusters(),
    })
}

/// The file last uploaded from this browser session.
pub async fn session_upload(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionUploadResponse>> {
    let uploaded_file = session_id(&jar, &state.session_cookie_name)
        .and_then(|id| state.sessions.get(&id))
        .ok_or(AppError::NoSessionUpload)?;

    Ok(Json(SessionUploadResponse { uploaded_file }))
}
