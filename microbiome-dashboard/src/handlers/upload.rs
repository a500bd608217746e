use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use multer::{parse_boundary, Multipart};
use rand::Rng;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::metrics::record_upload;
use crate::session::ensure_session;
use crate::types::{UploadRecord, UploadResponse};

pub const UPLOAD_FIELD: &str = "fastq_file";

pub const ALLOWED_EXTENSIONS: [&str; 4] = [".fastq", ".fq", ".fastq.gz", ".fq.gz"];

struct ReceivedFile {
    file_name: String,
    size_bytes: u64,
}

pub fn is_fastq_file_name(file_name: &str) -> bool {
    ALLOWED_EXTENSIONS
        .iter()
        .any(|extension| file_name.ends_with(extension))
}

/// Accepts a sequencing file, remembers its metadata in the caller's session
/// and hands back a processing id. The file body is counted, not kept.
pub async fn upload_fastq(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Body,
) -> Result<(CookieJar, Json<UploadResponse>)> {
    let received = match receive_fastq(&headers, body, state.max_upload_bytes).await {
        Ok(received) => received,
        Err(err) => {
            warn!(error = %err, "Upload rejected");
            record_upload("rejected");
            return Err(err);
        }
    };

    let (jar, session_id) = ensure_session(jar, &state.session_cookie_name);
    state.sessions.put(
        &session_id,
        UploadRecord {
            file_name: received.file_name.clone(),
            size_bytes: received.size_bytes,
            upload_timestamp: Utc::now(),
        },
    );

    let processing_id = format!("proc_{}", rand::thread_rng().gen_range(10000..=99999));

    record_upload("accepted");
    info!(
        file_name = %received.file_name,
        size_bytes = received.size_bytes,
        processing_id = %processing_id,
        "Upload accepted"
    );

    Ok((
        jar,
        Json(UploadResponse {
            success: true,
            file_name: received.file_name,
            file_size: received.size_bytes,
            processing_id,
        }),
    ))
}

/// Answers a declared Content-Length above the request body limit with the
/// JSON upload error. The body limit layer underneath would reply in plain text.
pub async fn reject_oversized_upload(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let content_length = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());

    match content_length {
        Some(length) if length > state.request_body_limit() => {
            warn!(content_length = length, "Upload rejected before reading the body");
            record_upload("rejected");
            AppError::UploadTooLarge(state.max_upload_bytes).into_response()
        }
        _ => next.run(request).await,
    }
}

async fn receive_fastq(headers: &HeaderMap, body: Body, limit: usize) -> Result<ReceivedFile> {
    let boundary = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|content_type| parse_boundary(content_type).ok())
        .ok_or(AppError::NoFileUploaded)?;

    let mut multipart = Multipart::new(body.into_data_stream(), boundary);

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // Browsers send an empty file name when the input was left blank.
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        if !is_fastq_file_name(&file_name) {
            return Err(AppError::InvalidFileType(file_name));
        }

        let mut size_bytes: u64 = 0;
        while let Some(chunk) = field.chunk().await? {
            size_bytes += chunk.len() as u64;
            if size_bytes > limit as u64 {
                return Err(AppError::UploadTooLarge(limit));
            }
        }

        return Ok(ReceivedFile {
            file_name,
            size_bytes,
        });
    }

    Err(AppError::NoFileUploaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        for name in ["reads.fastq", "reads.fq", "reads.fastq.gz", "reads.fq.gz"] {
            assert!(is_fastq_file_name(name), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["sample.txt", "reads.fasta", "reads.fastq.zip", "fastq", "reads.FASTQ"] {
            assert!(!is_fastq_file_name(name), "{name} should be rejected");
        }
    }
}
