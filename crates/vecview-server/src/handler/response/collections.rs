use serde::{Deserialize, Serialize};
use vecview_chroma::{Collection, CollectionListing, ItemListing};
use vecview_data::{CollectionStats, Metadata, Row, shape_rows};

/// Body of `GET /api/collections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CollectionsResponse {
    /// The database holds no collections.
    Empty { message: String },
    /// Collections in service order.
    Ready { collections: Vec<Collection> },
}

impl From<CollectionListing> for CollectionsResponse {
    fn from(listing: CollectionListing) -> Self {
        match listing {
            CollectionListing::Empty => Self::Empty {
                message: vecview_chroma::NO_COLLECTIONS_MESSAGE.to_owned(),
            },
            CollectionListing::Ready(collections) => Self::Ready { collections },
        }
    }
}

/// Body of `GET /api/collections/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDetail {
    /// `id` and `name` with the collection metadata merged on top.
    pub info: Metadata,
    #[serde(flatten)]
    pub items: CollectionItems,
}

/// Items part of a [`CollectionDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CollectionItems {
    /// The collection has no items.
    Empty { message: String },
    /// Shaped rows and their statistics.
    Ready {
        stats: CollectionStats,
        rows: Vec<Row>,
    },
}

impl CollectionDetail {
    pub fn new(collection: &Collection, listing: ItemListing) -> Self {
        let items = match listing {
            ItemListing::Empty => CollectionItems::Empty {
                message: vecview_chroma::NO_ITEMS_MESSAGE.to_owned(),
            },
            ItemListing::Ready(batch) => CollectionItems::Ready {
                stats: CollectionStats::from_batch(&batch),
                rows: shape_rows(&batch),
            },
        };

        Self {
            info: collection.info(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use vecview_data::ItemBatch;

    use super::*;

    #[test]
    fn empty_listing_carries_message() -> serde_json::Result<()> {
        let response = CollectionsResponse::from(CollectionListing::Empty);
        let json = serde_json::to_value(&response)?;

        assert_eq!(json["state"], "empty");
        assert_eq!(json["message"], "No collections found in ChromaDB");
        Ok(())
    }

    #[test]
    fn detail_flattens_item_state() -> serde_json::Result<()> {
        let collection = Collection::new("c1", "docs");
        let listing = ItemListing::from_batch(ItemBatch::new(["a"]));
        let json = serde_json::to_value(CollectionDetail::new(&collection, listing))?;

        assert_eq!(json["info"]["name"], "docs");
        assert_eq!(json["state"], "ready");
        assert_eq!(json["stats"]["total_items"], 1);
        assert_eq!(json["rows"][0]["id"], "a");
        Ok(())
    }
}
