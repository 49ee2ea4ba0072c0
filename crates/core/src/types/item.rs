//! A single menu item as parsed from one catalog row.

use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::price::Price;

/// An immutable menu item.
///
/// Created once at catalog-load time from a well-formed sheet row and never
/// mutated; the whole catalog is replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within the catalog (column 1).
    pub id: ItemId,
    /// Category name the item belongs to (column 2).
    pub category: String,
    /// Display name (column 3).
    pub name: String,
    /// Price (column 4).
    pub price: Price,
    /// Image reference (column 5). The first item of a category also lends
    /// this image to the category card.
    pub image: String,
    /// Optional per-item image (column 6). `None` when the column is absent
    /// or blank; display falls back to the category image at render time.
    pub item_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::Currency;

    #[test]
    fn test_item_serializes_with_optional_image_omittable() {
        let item = Item {
            id: ItemId::new("A1"),
            category: "Drinks".to_owned(),
            name: "Cola".to_owned(),
            price: Price::parse("150", Currency::Rub).expect("valid price"),
            image: "http://img/cola.png".to_owned(),
            item_image: None,
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["id"], "A1");
        assert_eq!(json["category"], "Drinks");
    }
}
