//! The menu catalog and its derived category list.
//!
//! A catalog is immutable once built: reloading replaces it wholesale.
//! Categories are not stored in the sheet; they are derived from the items
//! in first-seen order, each carrying the image of the first item
//! encountered in it.

mod fetch;
mod parse;

pub use fetch::SheetClient;
pub use parse::parse_menu;

use samovar_core::{Currency, Item, ItemId};

/// A category derived from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Representative image: the image of the first item seen in this category.
    pub image: String,
}

/// Ordered collection of menu items, as parsed from the sheet in row order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    categories: Vec<Category>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog, deriving the category list from the items.
    #[must_use]
    pub fn new(items: Vec<Item>, currency: Currency) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        for item in &items {
            if !categories.iter().any(|c| c.name == item.category) {
                categories.push(Category {
                    name: item.category.clone(),
                    image: item.image.clone(),
                });
            }
        }
        Self {
            items,
            categories,
            currency,
        }
    }

    /// All items, in row order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Currency every price in this catalog is denominated in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look an item up by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Representative image of a category, if the category exists.
    #[must_use]
    pub fn category_image(&self, category: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.image.as_str())
    }

    /// Items belonging to the given category, in row order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Items whose name or category contains the query, case-insensitively.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let csv = "id,category,name,price,image\n\
                   A1,Drinks,Cola,150,http://img/cola.png\n\
                   A2,Drinks,Juice,120,http://img/juice.png\n\
                   B1,Food,Borscht,250,http://img/borscht.png\n\
                   B2,Food,Dumplings,300,http://img/dumplings.png\n";
        Catalog::new(parse_menu(csv, Currency::Rub), Currency::Rub)
    }

    #[test]
    fn test_categories_first_seen_order_with_first_image() {
        let catalog = sample_catalog();
        let categories = catalog.categories();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Drinks");
        assert_eq!(categories[0].image, "http://img/cola.png");
        assert_eq!(categories[1].name, "Food");
        assert_eq!(categories[1].image, "http://img/borscht.png");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(&ItemId::new("B1")).unwrap().name, "Borscht");
        assert!(catalog.get(&ItemId::new("ZZ")).is_none());
    }

    #[test]
    fn test_in_category_preserves_row_order() {
        let catalog = sample_catalog();
        let names: Vec<_> = catalog.in_category("Drinks").map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Cola", "Juice"]);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let hits = catalog.search("cOlA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cola");
    }

    #[test]
    fn test_search_matches_category_too() {
        let catalog = sample_catalog();
        let hits = catalog.search("food");
        let names: Vec<_> = hits.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Borscht", "Dumplings"]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.search("sushi").is_empty());
    }

    #[test]
    fn test_category_image_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.category_image("Food"), Some("http://img/borscht.png"));
        assert_eq!(catalog.category_image("Desserts"), None);
    }
}
