use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One phylum-level slice of the taxonomy composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonRecord {
    pub name: String,
    /// Relative abundance in percent, one decimal place.
    pub abundance: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyResponse {
    pub taxonomy_data: Vec<TaxonRecord>,
}

/// Abundance readings for a single taxon, one value per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub taxon: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub samples: Vec<String>,
    pub data: Vec<HeatmapRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoveltyCluster {
    pub cluster_id: String,
    pub confidence: f64,
    pub similarity: f64,
    pub potential_species: String,
    pub abundance: f64,
    pub unique_features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoveltyResponse {
    pub novel_clusters: Vec<NoveltyCluster>,
}

/// Metadata of the last file uploaded in a browser session. The file body
/// itself is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub file_name: String,
    pub size_bytes: u64,
    pub upload_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file_name: String,
    pub file_size: u64,
    pub processing_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUploadResponse {
    pub uploaded_file: UploadRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStep {
    pub name: String,
    pub status: StepStatus,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStatus {
    pub processing_id: Option<String>,
    pub overall_progress: u8,
    pub status: StepStatus,
    pub steps: Vec<ProcessingStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessingQuery {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "type")]
    pub report_type: Option<String>,
}
