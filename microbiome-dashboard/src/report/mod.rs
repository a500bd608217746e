mod csv;
mod pdf;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::types::TaxonRecord;

pub use self::csv::{render_csv, CSV_HEADER, CSV_SAMPLE_NAME};
pub use self::pdf::{pdf_export_available, render_pdf, ReportContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Pdf,
}

impl ReportFormat {
    /// `csv` selects CSV; anything else, including no value, selects PDF.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("csv") => ReportFormat::Csv,
            _ => ReportFormat::Pdf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::Pdf => "application/pdf",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "microbiome_analysis.csv",
            ReportFormat::Pdf => "microbiome_analysis.pdf",
        }
    }
}

pub struct Report {
    pub format: ReportFormat,
    pub body: Vec<u8>,
}

impl Report {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.format.file_name())
    }
}

pub fn csv_report(taxonomy: &[TaxonRecord]) -> Result<Report> {
    Ok(Report {
        format: ReportFormat::Csv,
        body: render_csv(taxonomy)?,
    })
}

pub fn pdf_report(generated_at: DateTime<Local>) -> Result<Report> {
    let content = ReportContent::standard(generated_at);
    Ok(Report {
        format: ReportFormat::Pdf,
        body: render_pdf(&content)?,
    })
}
