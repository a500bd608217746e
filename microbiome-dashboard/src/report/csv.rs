use crate::error::{AppError, Result};
use crate::types::TaxonRecord;

pub const CSV_HEADER: [&str; 3] = ["Sample", "Taxon", "Abundance"];
pub const CSV_SAMPLE_NAME: &str = "Sample_1";

pub fn render_csv(taxonomy: &[TaxonRecord]) -> Result<Vec<u8>> {
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(32 * (taxonomy.len() + 1)));

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::ReportRender(format!("csv header: {e}")))?;

    for taxon in taxonomy {
        let abundance = format!("{:.1}", taxon.abundance);
        writer
            .write_record([CSV_SAMPLE_NAME, taxon.name.as_str(), abundance.as_str()])
            .map_err(|e| AppError::ReportRender(format!("csv row {}: {e}", taxon.name)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::ReportRender(format!("csv flush: {e}")))
}
