mod loader;

use std::collections::{BTreeSet, HashSet};

use crate::models::CatalogItem;

pub use loader::{load_catalog, save_catalog};

/// The normalized item table. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.items.iter().map(|item| item.category.as_str()))
    }

    /// Distinct classifications, sorted.
    pub fn classifications(&self) -> Vec<String> {
        distinct(self.items.iter().map(|item| item.classification.as_str()))
    }

    /// Distinct item names, sorted.
    pub fn item_names(&self) -> Vec<String> {
        distinct(self.items.iter().map(|item| item.item_name.as_str()))
    }

    /// Copy of the catalog without any row whose name is in `names`.
    ///
    /// Matching is exact; every row sharing an excluded name is removed.
    pub fn excluding(&self, names: &[String]) -> Catalog {
        if names.is_empty() {
            return self.clone();
        }
        let excluded: HashSet<&str> = names.iter().map(String::as_str).collect();
        Catalog::new(
            self.items
                .iter()
                .filter(|item| !excluded.contains(item.item_name.as_str()))
                .cloned()
                .collect(),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, classification: &str) -> CatalogItem {
        CatalogItem {
            item_name: name.to_string(),
            category: category.to_string(),
            classification: classification.to_string(),
            price: 1.0,
            protein: 1.0,
            fat: 0.0,
            carbs: 0.0,
            fiber: 0.0,
            calories: 10.0,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            item("Milk", "Dairy", "Beverage"),
            item("Yogurt", "Dairy", "Snack"),
            item("Apple", "Produce", "Fruit"),
            item("Milk", "Dairy", "Beverage"),
        ])
    }

    #[test]
    fn test_facets_sorted_and_distinct() {
        let catalog = sample_catalog();
        assert_eq!(catalog.categories(), vec!["Dairy", "Produce"]);
        assert_eq!(catalog.classifications(), vec!["Beverage", "Fruit", "Snack"]);
        assert_eq!(catalog.item_names(), vec!["Apple", "Milk", "Yogurt"]);
    }

    #[test]
    fn test_excluding_removes_all_matches() {
        let catalog = sample_catalog();
        let trimmed = catalog.excluding(&["Milk".to_string()]);

        assert_eq!(trimmed.len(), 2);
        assert!(trimmed.items().iter().all(|i| i.item_name != "Milk"));
        // Source untouched
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_excluding_nothing() {
        let catalog = sample_catalog();
        assert_eq!(catalog.excluding(&[]), catalog);
    }
}
