use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::TaxonRecord;

/// Tenths of a percent in a whole sample.
const TOTAL_TENTHS: u32 = 1000;

pub struct TaxonTemplate {
    pub name: &'static str,
    pub draw: RangeInclusive<u32>,
    pub color: &'static str,
}

pub static TAXONOMY_CATALOGUE: [TaxonTemplate; 8] = [
    TaxonTemplate { name: "Bacteroidetes", draw: 25..=40, color: "#22d3ee" },
    TaxonTemplate { name: "Firmicutes", draw: 20..=35, color: "#f472b6" },
    TaxonTemplate { name: "Proteobacteria", draw: 10..=20, color: "#4ade80" },
    TaxonTemplate { name: "Actinobacteria", draw: 5..=15, color: "#fb923c" },
    TaxonTemplate { name: "Verrucomicrobia", draw: 2..=8, color: "#a78bfa" },
    TaxonTemplate { name: "Fusobacteria", draw: 1..=5, color: "#34d399" },
    TaxonTemplate { name: "Spirochaetes", draw: 1..=4, color: "#60a5fa" },
    TaxonTemplate { name: "Other", draw: 2..=8, color: "#94a3b8" },
];

/// Draws a raw weight per catalogue entry and normalises the weights to
/// percentages with one decimal place that add up to exactly 100.0.
pub fn generate_taxonomy<R: Rng + ?Sized>(rng: &mut R) -> Vec<TaxonRecord> {
    let draws: Vec<u32> = TAXONOMY_CATALOGUE
        .iter()
        .map(|taxon| rng.gen_range(taxon.draw.clone()))
        .collect();

    apportion_tenths(&draws)
        .into_iter()
        .zip(TAXONOMY_CATALOGUE.iter())
        .map(|(tenths, taxon)| TaxonRecord {
            name: taxon.name.to_string(),
            abundance: f64::from(tenths) / 10.0,
            color: taxon.color.to_string(),
        })
        .collect()
}

/// Largest-remainder apportionment of `TOTAL_TENTHS` over the weights.
/// Ties go to the earlier entry.
fn apportion_tenths(weights: &[u32]) -> Vec<u32> {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return vec![0; weights.len()];
    }

    let mut shares: Vec<u32> = Vec::with_capacity(weights.len());
    let mut remainders: Vec<(usize, u32)> = Vec::with_capacity(weights.len());
    for (idx, weight) in weights.iter().enumerate() {
        let scaled = weight * TOTAL_TENTHS;
        shares.push(scaled / total);
        remainders.push((idx, scaled % total));
    }

    let assigned: u32 = shares.iter().sum();
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (idx, _) in remainders
        .into_iter()
        .take((TOTAL_TENTHS - assigned) as usize)
    {
        shares[idx] += 1;
    }

    shares
}
