//! Summary statistics shown above the item table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemBatch;

/// Embedding dimensionality observed across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbeddingDimensions {
    /// No item carries an embedding.
    #[default]
    Absent,
    /// Every embedded item has the same length.
    Uniform { dimensions: usize },
    /// Embedded items disagree on their length.
    Mixed { min: usize, max: usize },
}

impl EmbeddingDimensions {
    /// Folds embedding lengths into a dimensionality summary.
    ///
    /// Zero lengths count as "no embedding" and are skipped.
    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut bounds: Option<(usize, usize)> = None;
        for len in lengths.into_iter().filter(|len| *len > 0) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(len), max.max(len)),
                None => (len, len),
            });
        }

        match bounds {
            None => Self::Absent,
            Some((min, max)) if min == max => Self::Uniform { dimensions: min },
            Some((min, max)) => Self::Mixed { min, max },
        }
    }

    /// Returns the dimensionality if it is the same for every embedded item.
    pub fn uniform(&self) -> Option<usize> {
        match self {
            Self::Uniform { dimensions } => Some(*dimensions),
            _ => None,
        }
    }
}

impl fmt::Display for EmbeddingDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("0"),
            Self::Uniform { dimensions } => write!(f, "{dimensions}"),
            Self::Mixed { min, max } => write!(f, "mixed ({min}-{max})"),
        }
    }
}

/// Counts derived from a fetched item batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_items: usize,
    pub embedding_dimensions: EmbeddingDimensions,
    pub has_metadata: bool,
}

impl CollectionStats {
    pub fn from_batch(batch: &ItemBatch) -> Self {
        let lengths = (0..batch.len()).map(|i| batch.embedding(i).map_or(0, <[f32]>::len));

        Self {
            total_items: batch.len(),
            embedding_dimensions: EmbeddingDimensions::from_lengths(lengths),
            has_metadata: batch.has_metadata(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn uniform_dimensions() {
        let batch = ItemBatch::new(["a", "b"])
            .with_embeddings([Some(vec![0.1, 0.2]), Some(vec![0.3, 0.4])]);
        let stats = CollectionStats::from_batch(&batch);

        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.embedding_dimensions.uniform(), Some(2));
        assert!(!stats.has_metadata);
    }

    #[test]
    fn mixed_dimensions_are_reported() {
        let batch = ItemBatch::new(["a", "b", "c"]).with_embeddings([
            Some(vec![0.0; 3]),
            None,
            Some(vec![0.0; 5]),
        ]);
        let stats = CollectionStats::from_batch(&batch);

        assert_eq!(stats.embedding_dimensions, EmbeddingDimensions::Mixed { min: 3, max: 5 });
        assert_eq!(stats.embedding_dimensions.to_string(), "mixed (3-5)");
    }

    #[test]
    fn absent_embeddings() {
        let stats = CollectionStats::from_batch(&ItemBatch::new(["a"]));
        assert_eq!(stats.embedding_dimensions, EmbeddingDimensions::Absent);
        assert_eq!(stats.embedding_dimensions.to_string(), "0");
    }

    #[test]
    fn metadata_flag_needs_entries() {
        let batch = ItemBatch::new(Vec::<String>::new()).with_metadatas([]);
        assert!(!CollectionStats::from_batch(&batch).has_metadata);

        let batch = ItemBatch::new(["a"]).with_metadatas([None]);
        assert!(CollectionStats::from_batch(&batch).has_metadata);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value = serde_json::to_value(EmbeddingDimensions::Uniform { dimensions: 384 });
        assert!(matches!(value, Ok(v) if v == json!({"kind": "uniform", "dimensions": 384})));
    }
}
