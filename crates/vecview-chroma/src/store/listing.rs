//! Listing states returned by the store service.

use serde::{Deserialize, Serialize};
use vecview_data::ItemBatch;

use crate::types::Collection;

/// Message shown when the database has no collections.
pub const NO_COLLECTIONS_MESSAGE: &str = "No collections found in ChromaDB";

/// Message shown when a collection has no items.
pub const NO_ITEMS_MESSAGE: &str = "No items found in this collection";

/// Result of listing collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CollectionListing {
    /// The database holds no collections.
    Empty,
    /// At least one collection, in service order.
    Ready(Vec<Collection>),
}

impl CollectionListing {
    pub fn from_collections(collections: Vec<Collection>) -> Self {
        if collections.is_empty() {
            Self::Empty
        } else {
            Self::Ready(collections)
        }
    }

    /// Returns the empty-state message, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_COLLECTIONS_MESSAGE),
            Self::Ready(_) => None,
        }
    }
}

/// Result of fetching the items of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemListing {
    /// The collection has no items.
    Empty,
    /// A non-empty batch.
    Ready(ItemBatch),
}

impl ItemListing {
    pub fn from_batch(batch: ItemBatch) -> Self {
        if batch.is_empty() {
            Self::Empty
        } else {
            Self::Ready(batch)
        }
    }

    /// Returns the empty-state message, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_ITEMS_MESSAGE),
            Self::Ready(_) => None,
        }
    }
}
