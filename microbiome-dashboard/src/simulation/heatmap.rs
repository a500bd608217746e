use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::{HeatmapResponse, HeatmapRow};

pub const HEATMAP_SAMPLE_COUNT: usize = 8;

pub const HEATMAP_TAXA: [&str; 8] = [
    "Bacteroides",
    "Lactobacillus",
    "Bifidobacterium",
    "E.coli",
    "Clostridium",
    "Akkermansia",
    "Prevotella",
    "Enterococcus",
];

pub const HEATMAP_VALUE_RANGE: RangeInclusive<f64> = 0.1..=10.0;

pub fn generate_heatmap<R: Rng + ?Sized>(rng: &mut R) -> HeatmapResponse {
    let samples = (1..=HEATMAP_SAMPLE_COUNT)
        .map(|i| format!("Sample_{i}"))
        .collect();

    let data = HEATMAP_TAXA
        .iter()
        .map(|taxon| HeatmapRow {
            taxon: taxon.to_string(),
            values: (0..HEATMAP_SAMPLE_COUNT)
                .map(|_| round_hundredths(rng.gen_range(HEATMAP_VALUE_RANGE)))
                .collect(),
        })
        .collect();

    HeatmapResponse { samples, data }
}

// Both range bounds are whole hundredths, so rounding cannot leave the range.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_heatmap_shape_and_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let heatmap = generate_heatmap(&mut rng);

            assert_eq!(heatmap.samples.len(), 8);
            assert_eq!(heatmap.samples[0], "Sample_1");
            assert_eq!(heatmap.samples[7], "Sample_8");
            assert_eq!(heatmap.data.len(), 8);

            for (row, taxon) in heatmap.data.iter().zip(HEATMAP_TAXA.iter()) {
                assert_eq!(&row.taxon, taxon);
                assert_eq!(row.values.len(), 8);
                for value in &row.values {
                    assert!(HEATMAP_VALUE_RANGE.contains(value), "{value} out of range");
                }
            }
        }
    }

    #[test]
    fn test_values_have_two_decimals() {
        let mut rng = StdRng::seed_from_u64(11);
        let heatmap = generate_heatmap(&mut rng);
        for value in heatmap.data.iter().flat_map(|row| row.values.iter()) {
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }
}
