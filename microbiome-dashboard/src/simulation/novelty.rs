use crate::types::NoveltyCluster;

struct ClusterTemplate {
    cluster_id: &'static str,
    confidence: f64,
    similarity: f64,
    potential_species: &'static str,
    abundance: f64,
    unique_features: [&'static str; 2],
}

const NOVEL_CLUSTERS: [ClusterTemplate; 3] = [
    ClusterTemplate {
        cluster_id: "NC001",
        confidence: 0.92,
        similarity: 0.34,
        potential_species: "Unknown Bacteroidetes sp.",
        abundance: 2.3,
        unique_features: ["Novel metabolic pathway", "16S rRNA variation"],
    },
    ClusterTemplate {
        cluster_id: "NC002",
        confidence: 0.87,
        similarity: 0.41,
        potential_species: "Unclassified Firmicutes",
        abundance: 1.8,
        unique_features: ["Antimicrobial resistance genes", "Biofilm formation"],
    },
    ClusterTemplate {
        cluster_id: "NC003",
        confidence: 0.79,
        similarity: 0.28,
        potential_species: "Novel Actinobacteria",
        abundance: 0.9,
        unique_features: ["Secondary metabolite production", "Extreme pH tolerance"],
    },
];

/// The fixed set of novelty clusters shown on the dashboard.
pub fn novelty_clusters() -> Vec<NoveltyCluster> {
    NOVEL_CLUSTERS
        .iter()
        .map(|cluster| NoveltyCluster {
            cluster_id: cluster.cluster_id.to_string(),
            confidence: cluster.confidence,
            similarity: cluster.similarity,
            potential_species: cluster.potential_species.to_string(),
            abundance: cluster.abundance,
            unique_features: cluster.unique_features.iter().map(|f| f.to_string()).collect(),
        })
        .collect()
}
