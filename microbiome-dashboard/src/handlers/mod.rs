mod dashboard;
mod data;
mod processing;
mod report;
mod upload;

pub use dashboard::{dashboard, liveness, readiness};
pub use data::{heatmap_data, novelty_data, session_upload, taxonomy_data};
pub use processing::{completed_status, processing_status, PIPELINE_STEPS};
pub use report::download_report;
pub use upload::{
    is_fastq_file_name, reject_oversized_upload, upload_fastq, ALLOWED_EXTENSIONS, UPLOAD_FIELD,
};
