use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const PDF_UNAVAILABLE_MESSAGE: &str = "PDF generation failed. This build does not include the PDF exporter; \
rebuild the dashboard with `cargo build --features pdf` to enable it.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("No file uploaded")]
    NoSessionUpload,

    #[error("Please upload a valid FASTQ file")]
    InvalidFileType(String),

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("Upload exceeds the {0} byte limit")]
    UploadTooLarge(usize),

    #[error("{}", PDF_UNAVAILABLE_MESSAGE)]
    PdfUnavailable,

    #[error("Report generation failed: {0}")]
    ReportRender(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<multer::Error> for AppError {
    fn from(err: multer::Error) -> Self {
        AppError::MalformedUpload(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoFileUploaded
            | AppError::InvalidFileType(_)
            | AppError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            AppError::NoSessionUpload => StatusCode::NOT_FOUND,
            AppError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::PdfUnavailable | AppError::ReportRender(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, status = %status, "Request error");
        } else {
            tracing::warn!(error = %self, status = %status, "Rejected request");
        }

        match self {
            // Served in place of a file download.
            AppError::PdfUnavailable | AppError::ReportRender(_) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response(),
            AppError::Internal(_) => {
                (status, Json(json!({ "error": "Internal error" }))).into_response()
            }
            _ => (status, Json(json!({ "error": self.to_string() }))).into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_client_errors_are_json() {
        let response = AppError::InvalidFileType("sample.txt".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({ "error": "Please upload a valid FASTQ file" }));
    }

    #[tokio::test]
    async fn test_missing_session_upload_is_404() {
        let response = AppError::NoSessionUpload.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({ "error": "No file uploaded" }));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_413() {
        let response = AppError::UploadTooLarge(10).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({ "error": "Upload exceeds the 10 byte limit" }));
    }

    #[tokio::test]
    async fn test_pdf_unavailable_is_plain_text_guidance() {
        let response = AppError::PdfUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let body = body_string(response).await;
        assert!(body.contains("--features pdf"));
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::Internal("task panicked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(!body.contains("panicked"));
    }
}
