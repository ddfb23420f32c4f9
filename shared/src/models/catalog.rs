//! Catalog of valid categories, items and cafe outlets
//!
//! The catalog is built once at startup and never mutated afterwards. Every
//! component that needs it receives it explicitly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A category together with its ordered list of item names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryItems {
    pub name: String,
    pub items: Vec<String>,
}

impl CategoryItems {
    pub fn new<S: Into<String>>(name: S, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Errors raised while building or querying a catalog
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Catalog {0} name must not be empty")]
    EmptyName(&'static str),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate item {item} in category {category}")]
    DuplicateItem { category: String, item: String },

    #[error("Duplicate outlet: {0}")]
    DuplicateOutlet(String),
}

/// Immutable reference data: category -> items, plus the outlet list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryItems>,
    outlets: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting empty names and duplicates.
    ///
    /// Category, item and outlet order is preserved as given.
    pub fn new(categories: Vec<CategoryItems>, outlets: Vec<String>) -> Result<Self, CatalogError> {
        for (idx, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyName("category"));
            }
            if categories[..idx].iter().any(|c| c.name == category.name) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
            for (item_idx, item) in category.items.iter().enumerate() {
                if item.trim().is_empty() {
                    return Err(CatalogError::EmptyName("item"));
                }
                if category.items[..item_idx].contains(item) {
                    return Err(CatalogError::DuplicateItem {
                        category: category.name.clone(),
                        item: item.clone(),
                    });
                }
            }
        }

        for (idx, outlet) in outlets.iter().enumerate() {
            if outlet.trim().is_empty() {
                return Err(CatalogError::EmptyName("outlet"));
            }
            if outlets[..idx].contains(outlet) {
                return Err(CatalogError::DuplicateOutlet(outlet.clone()));
            }
        }

        Ok(Self { categories, outlets })
    }

    /// Category names in catalog order
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Items of a category in catalog order
    pub fn items_for(&self, category: &str) -> Result<&[String], CatalogError> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
            .ok_or_else(|| CatalogError::NotFound(category.to_string()))
    }

    /// Outlet names in catalog order
    pub fn outlets(&self) -> &[String] {
        &self.outlets
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    pub fn contains_item(&self, category: &str, item: &str) -> bool {
        self.items_for(category)
            .map(|items| items.iter().any(|i| i == item))
            .unwrap_or(false)
    }

    pub fn contains_outlet(&self, outlet: &str) -> bool {
        self.outlets.iter().any(|o| o == outlet)
    }
}

impl Default for Catalog {
    /// Master data used by the cafes when no catalog is configured
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryItems::new(
                    "Cookies and Food",
                    [
                        "Fudgy Pecan Cookies 50gms (72% Dark Chocolate)",
                        "Vegan cranberry cookie",
                        "Hazelnut brown butter cookie",
                        "Dominican dark cookie",
                        "Orange and poppy seed cookie",
                        "Berry Good Bark (80gm)",
                        "Pistachio Biscotti",
                        "Spiced Biscotti",
                        "Coffee protein bit",
                    ],
                ),
                CategoryItems::new("Single Serve Pour Over Bags", ["Cappuccino", "Latte", "Espresso"]),
                CategoryItems::new("Syrups", ["Vanilla Syrup", "Caramel Syrup"]),
                CategoryItems::new("Milk", ["Full Cream Milk", "Almond Milk"]),
                CategoryItems::new("Cups", ["Small Cup", "Medium Cup", "Large Cup"]),
            ],
            outlets: vec![
                "Downtown Cafe".to_string(),
                "Bandra Cafe".to_string(),
                "Andheri Cafe".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlets(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_catalog_order() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.categories(),
            vec![
                "Cookies and Food",
                "Single Serve Pour Over Bags",
                "Syrups",
                "Milk",
                "Cups"
            ]
        );
        assert_eq!(catalog.outlets(), ["Downtown Cafe", "Bandra Cafe", "Andheri Cafe"]);
        assert_eq!(
            catalog.items_for("Milk").unwrap(),
            ["Full Cream Milk", "Almond Milk"]
        );
    }

    #[test]
    fn test_default_catalog_passes_own_invariants() {
        let catalog = Catalog::default();
        let rebuilt = Catalog::new(catalog.categories.clone(), catalog.outlets.clone());
        assert_eq!(rebuilt, Ok(catalog));
    }

    #[test]
    fn test_items_for_unknown_category() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.items_for("Pastries"),
            Err(CatalogError::NotFound("Pastries".to_string()))
        );
    }

    #[test]
    fn test_contains_checks() {
        let catalog = Catalog::default();
        assert!(catalog.contains_category("Syrups"));
        assert!(!catalog.contains_category("syrups"));
        assert!(catalog.contains_item("Single Serve Pour Over Bags", "Espresso"));
        assert!(!catalog.contains_item("Milk", "Espresso"));
        assert!(!catalog.contains_item("Pastries", "Espresso"));
        assert!(catalog.contains_outlet("Bandra Cafe"));
        assert!(!catalog.contains_outlet("Juhu Cafe"));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let result = Catalog::new(
            vec![CategoryItems::new("Milk", ["Oat Milk", "Oat Milk"])],
            outlets(&["Downtown Cafe"]),
        );
        assert_eq!(
            result,
            Err(CatalogError::DuplicateItem {
                category: "Milk".to_string(),
                item: "Oat Milk".to_string(),
            })
        );
    }

    #[test]
    fn test_same_item_in_two_categories_allowed() {
        let result = Catalog::new(
            vec![
                CategoryItems::new("Beverages", ["Espresso"]),
                CategoryItems::new("Single Serve Pour Over Bags", ["Espresso"]),
            ],
            outlets(&["Downtown Cafe"]),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_category_and_outlet_rejected() {
        let dup_category = Catalog::new(
            vec![
                CategoryItems::new("Cups", ["Small Cup"]),
                CategoryItems::new("Cups", ["Large Cup"]),
            ],
            outlets(&["Downtown Cafe"]),
        );
        assert_eq!(dup_category, Err(CatalogError::DuplicateCategory("Cups".to_string())));

        let dup_outlet = Catalog::new(
            vec![CategoryItems::new("Cups", ["Small Cup"])],
            outlets(&["Downtown Cafe", "Downtown Cafe"]),
        );
        assert_eq!(dup_outlet, Err(CatalogError::DuplicateOutlet("Downtown Cafe".to_string())));
    }

    #[test]
    fn test_empty_names_rejected() {
        assert_eq!(
            Catalog::new(vec![CategoryItems::new(" ", ["Small Cup"])], vec![]),
            Err(CatalogError::EmptyName("category"))
        );
        assert_eq!(
            Catalog::new(vec![CategoryItems::new("Cups", [""])], vec![]),
            Err(CatalogError::EmptyName("item"))
        );
        assert_eq!(
            Catalog::new(vec![], outlets(&[""])),
            Err(CatalogError::EmptyName("outlet"))
        );
    }
}
