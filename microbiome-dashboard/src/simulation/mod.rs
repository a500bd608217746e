//! Synthetic analysis output. Nothing here looks at uploaded data: every
//! call draws fresh values, except for the novelty clusters which are fixed.

mod heatmap;
mod novelty;
mod taxonomy;

pub use heatmap::{generate_heatmap, HEATMAP_SAMPLE_COUNT, HEATMAP_TAXA, HEATMAP_VALUE_RANGE};
pub use novelty::novelty_clusters;
pub use taxonomy::{generate_taxonomy, TaxonTemplate, TAXONOMY_CATALOGUE};
