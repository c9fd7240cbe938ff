//! Columnar item batches.

use serde::{Deserialize, Serialize};

/// Free-form key-value metadata attached to an item or a collection.
///
/// Key order follows the order the service returned them in.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// All items of a collection as parallel arrays.
///
/// Index `i` of every present array describes the item `ids[i]`. A column
/// that is `None` was not requested or not stored for any item, while an inner
/// `None` marks a single item without that field. Optional columns may be
/// shorter than `ids`; readers treat the missing tail as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemBatch {
    /// Item identifiers, unique within the collection.
    #[serde(default)]
    pub ids: Vec<String>,
    /// Document text per item.
    #[serde(default)]
    pub documents: Option<Vec<Option<String>>>,
    /// Metadata per item.
    #[serde(default)]
    pub metadatas: Option<Vec<Option<Metadata>>>,
    /// Embedding vector per item.
    #[serde(default)]
    pub embeddings: Option<Vec<Option<Vec<f32>>>>,
}

impl ItemBatch {
    /// Creates a batch holding only identifiers.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sets the documents column.
    pub fn with_documents<I, S>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.documents = Some(documents.into_iter().map(|d| d.map(Into::into)).collect());
        self
    }

    /// Sets the metadatas column.
    pub fn with_metadatas(mut self, metadatas: impl IntoIterator<Item = Option<Metadata>>) -> Self {
        self.metadatas = Some(metadatas.into_iter().collect());
        self
    }

    /// Sets the embeddings column.
    pub fn with_embeddings(
        mut self,
        embeddings: impl IntoIterator<Item = Option<Vec<f32>>>,
    ) -> Self {
        self.embeddings = Some(embeddings.into_iter().collect());
        self
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the batch holds no items.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the document of item `index`, if the column and entry exist.
    pub fn document(&self, index: usize) -> Option<&str> {
        self.documents
            .as_ref()
            .and_then(|documents| documents.get(index))
            .and_then(Option::as_deref)
    }

    /// Returns the metadata of item `index`, if the column and entry exist.
    pub fn metadata(&self, index: usize) -> Option<&Metadata> {
        self.metadatas
            .as_ref()
            .and_then(|metadatas| metadatas.get(index))
            .and_then(Option::as_ref)
    }

    /// Returns the embedding of item `index`, if the column and entry exist.
    pub fn embedding(&self, index: usize) -> Option<&[f32]> {
        self.embeddings
            .as_ref()
            .and_then(|embeddings| embeddings.get(index))
            .and_then(Option::as_deref)
    }

    /// Returns `true` if the service returned a non-empty metadatas column.
    pub fn has_metadata(&self) -> bool {
        self.metadatas
            .as_ref()
            .is_some_and(|metadatas| !metadatas.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_service_response_with_null_columns() {
        let batch: ItemBatch = serde_json::from_value(json!({
            "ids": ["a", "b"],
            "documents": ["hello", null],
            "metadatas": null,
            "embeddings": null,
            "uris": null,
            "include": ["documents", "metadatas", "embeddings"]
        }))
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.document(0), Some("hello"));
        assert_eq!(batch.document(1), None);
        assert!(batch.metadatas.is_none());
        assert!(!batch.has_metadata());
        assert_eq!(batch.embedding(0), None);
    }

    #[test]
    fn accessors_tolerate_short_columns() {
        let batch = ItemBatch::new(["a", "b", "c"]).with_embeddings([Some(vec![0.1, 0.2])]);

        assert_eq!(batch.embedding(0).map(<[f32]>::len), Some(2));
        assert_eq!(batch.embedding(2), None);
    }
}
