use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Local;

use crate::error::{AppError, Result};
use crate::metrics::record_report;
use crate::report::{csv_report, pdf_export_available, pdf_report, ReportFormat};
use crate::simulation::generate_taxonomy;
use crate::types::ReportQuery;

pub async fn download_report(Query(query): Query<ReportQuery>) -> Result<Response> {
    let format = ReportFormat::from_query(query.report_type.as_deref());

    let report = match format {
        ReportFormat::Csv => {
            let taxonomy = generate_taxonomy(&mut rand::thread_rng());
            csv_report(&taxonomy)?
        }
        ReportFormat::Pdf => {
            if !pdf_export_available() {
                return Err(AppError::PdfUnavailable);
            }
            let generated_at = Local::now();
            tokio::task::spawn_blocking(move || pdf_report(generated_at))
                .await
                .map_err(|e| AppError::Internal(format!("report task failed: {e}")))??
        }
    };

    record_report(format.as_str());
    tracing::info!(
        format = format.as_str(),
        bytes = report.body.len(),
        "Generated report"
    );

    let disposition = report.content_disposition();
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.body,
    )
        .into_response())
}
