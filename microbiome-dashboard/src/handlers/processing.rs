use axum::{extract::Query, Json};

use crate::types::{ProcessingQuery, ProcessingStatus, ProcessingStep, StepStatus};

pub const PIPELINE_STEPS: [&str; 6] = [
    "Quality Control (QC)",
    "Adapter & Quality Trimming",
    "Taxonomic Classification",
    "Abundance Calculation",
    "AI Novelty Detection",
    "Generating Visualizations",
];

/// Always reports the whole pipeline as finished. The id is echoed back
/// as-is; it is not looked up anywhere.
pub async fn processing_status(Query(query): Query<ProcessingQuery>) -> Json<ProcessingStatus> {
    Json(completed_status(query.id))
}

pub fn completed_status(processing_id: Option<String>) -> ProcessingStatus {
    ProcessingStatus {
        processing_id,
        overall_progress: 100,
        status: StepStatus::Completed,
        steps: PIPELINE_STEPS
            .iter()
            .map(|name| ProcessingStep {
                name: name.to_string(),
                status: StepStatus::Completed,
                progress: 100,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_completed() {
        let status = completed_status(Some("proc_12345".to_string()));
        assert_eq!(status.processing_id.as_deref(), Some("proc_12345"));
        assert_eq!(status.overall_progress, 100);
        assert_eq!(status.status, StepStatus::Completed);
        assert_eq!(status.steps.len(), 6);
        assert!(status
            .steps
            .iter()
            .all(|s| s.status == StepStatus::Completed && s.progress == 100));
    }

    #[test]
    fn test_missing_id_serializes_as_null() {
        let value = serde_json::to_value(completed_status(None)).unwrap();
        assert!(value["processing_id"].is_null());
        assert_eq!(value["status"], "completed");
        assert_eq!(value["steps"][0]["name"], "Quality Control (QC)");
    }
}
