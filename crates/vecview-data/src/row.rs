//! Row shaping: columnar batch to display rows.

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::item::ItemBatch;
use crate::repr::display_metadata;

/// Display-oriented flattening of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Item identifier.
    pub id: String,
    /// Document text; `None` if the documents column or entry is missing.
    pub document: Option<String>,
    /// Rendered metadata; `None` only if the whole metadatas column is missing.
    pub metadata: Option<String>,
    /// Length of the item's embedding, 0 if it has none.
    pub embedding_length: usize,
}

impl Row {
    /// Returns the four cells as they are displayed and exported.
    ///
    /// Absent values render as empty strings.
    pub fn display_fields(&self) -> [String; 4] {
        [
            self.id.clone(),
            self.document.clone().unwrap_or_default(),
            self.metadata.clone().unwrap_or_default(),
            self.embedding_length.to_string(),
        ]
    }
}

/// Zips the parallel arrays of a batch into one [`Row`] per id.
///
/// The output always has exactly `batch.ids.len()` rows and `rows[i].id ==
/// batch.ids[i]`. Missing optional columns or entries never fail.
pub fn shape_rows(batch: &ItemBatch) -> Vec<Row> {
    let metadatas_present = batch.metadatas.is_some();

    let rows: Vec<Row> = batch
        .ids
        .iter()
        .enumerate()
        .map(|(i, id)| Row {
            id: id.clone(),
            document: batch.document(i).map(str::to_owned),
            metadata: metadatas_present.then(|| display_metadata(batch.metadata(i))),
            embedding_length: batch.embedding(i).map_or(0, <[f32]>::len),
        })
        .collect();

    tracing::trace!(
        target: TRACING_TARGET,
        rows = rows.len(),
        has_documents = batch.documents.is_some(),
        has_metadatas = metadatas_present,
        has_embeddings = batch.embeddings.is_some(),
        "Shaped item batch into rows"
    );

    rows
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Metadata;

    fn docs_batch() -> ItemBatch {
        let Ok(metadata) = serde_json::from_value::<Metadata>(json!({"k": 1})) else {
            unreachable!()
        };

        ItemBatch::new(["a", "b"])
            .with_documents([Some("hello"), Some("world")])
            .with_metadatas([Some(metadata), None])
            .with_embeddings([Some(vec![0.1, 0.2]), Some(vec![0.3, 0.4])])
    }

    #[test]
    fn shapes_docs_example() {
        let rows = shape_rows(&docs_batch());

        assert_eq!(
            rows,
            vec![
                Row {
                    id: "a".into(),
                    document: Some("hello".into()),
                    metadata: Some("{'k': 1}".into()),
                    embedding_length: 2,
                },
                Row {
                    id: "b".into(),
                    document: Some("world".into()),
                    metadata: Some("None".into()),
                    embedding_length: 2,
                },
            ]
        );
    }

    #[test]
    fn keeps_index_alignment() {
        let batch = docs_batch();
        let rows = shape_rows(&batch);

        assert_eq!(rows.len(), batch.ids.len());
        for (row, id) in rows.iter().zip(&batch.ids) {
            assert_eq!(&row.id, id);
        }
    }

    #[test]
    fn absent_embeddings_yield_zero_lengths() {
        let batch = ItemBatch::new(["a", "b", "c"]).with_documents([Some("x"), None, Some("z")]);
        let rows = shape_rows(&batch);

        assert!(rows.iter().all(|row| row.embedding_length == 0));
        assert!(rows.iter().all(|row| row.metadata.is_none()));
        assert_eq!(rows[1].document, None);
    }

    #[test]
    fn short_embeddings_column_defaults_tail_to_zero() {
        let batch = ItemBatch::new(["a", "b"]).with_embeddings([Some(vec![1.0, 2.0, 3.0])]);
        let rows = shape_rows(&batch);

        assert_eq!(rows[0].embedding_length, 3);
        assert_eq!(rows[1].embedding_length, 0);
    }

    #[test]
    fn empty_batch_yields_no_rows() {
        assert!(shape_rows(&ItemBatch::default()).is_empty());
    }

    #[test]
    fn display_fields_render_absent_as_empty() {
        let row = Row {
            id: "a".into(),
            document: None,
            metadata: None,
            embedding_length: 0,
        };
        assert_eq!(row.display_fields(), ["a", "", "", "0"].map(String::from));
    }
}
