//! Immutable product catalog with a case-folded lookup index
//!
//! The catalog is built once at startup from an ordered product list and is
//! read-only for the lifetime of the process, so it can be shared across
//! concurrent requests without locking. Iteration order is the load order
//! and serves as the deterministic tie-break during fuzzy resolution.

use std::collections::HashMap;

use crate::{CoreError, Product};

pub struct Catalog {
    products: Vec<Product>,
    by_model: HashMap<String, usize>,
    by_full_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build the lookup index over an ordered product list.
    ///
    /// Duplicate identifiers under case-folding keep the first entry, so an
    /// exact-match lookup always lands on the earliest catalog entry.
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_model = HashMap::with_capacity(products.len());
        let mut by_full_name = HashMap::with_capacity(products.len());

        for (idx, product) in products.iter().enumerate() {
            by_model.entry(product.model.to_lowercase()).or_insert(idx);
            by_full_name
                .entry(product.full_name().to_lowercase())
                .or_insert(idx);
        }

        Self {
            products,
            by_model,
            by_full_name,
        }
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        let products: Vec<Product> = serde_json::from_slice(bytes)?;
        Ok(Self::new(products))
    }

    /// Exact lookup by model name. The key must already be case-folded.
    pub fn get_by_model(&self, folded_model: &str) -> Option<&Product> {
        self.by_model.get(folded_model).map(|&i| &self.products[i])
    }

    /// Exact lookup by "brand model". The key must already be case-folded.
    pub fn get_by_full_name(&self, folded_name: &str) -> Option<&Product> {
        self.by_full_name
            .get(folded_name)
            .map(|&i| &self.products[i])
    }

    /// Iterate products in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(brand: &str, model: &str, price: u32) -> Product {
        Product {
            model: model.into(),
            brand: brand.into(),
            price,
            screen_size: 6.0,
            resolution_width: 1080,
            resolution_height: 2400,
            ram_gb: 4,
            storage_gb: 64,
            battery_mah: 4500,
            fast_charging_w: None,
            rear_cameras: None,
            rear_camera_mp: None,
            front_camera_mp: None,
            refresh_rate_hz: None,
            has_5g: false,
            avg_rating: None,
            processor_ghz: None,
            has_ois: None,
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::new(vec![phone("Apple", "iPhone 13", 999)]);
        assert!(catalog.get_by_model("iphone 13").is_some());
        assert!(catalog.get_by_full_name("apple iphone 13").is_some());
        assert!(catalog.get_by_model("iPhone 13").is_none()); // caller folds
    }

    #[test]
    fn duplicate_identifiers_keep_first_entry() {
        let catalog = Catalog::new(vec![
            phone("Acme", "One", 100),
            phone("Acme", "ONE", 200),
        ]);
        assert_eq!(catalog.get_by_model("one").unwrap().price, 100);
    }

    #[test]
    fn iteration_preserves_load_order() {
        let catalog = Catalog::new(vec![
            phone("B", "Two", 2),
            phone("A", "One", 1),
        ]);
        let models: Vec<&str> = catalog.iter().map(|p| p.model.as_str()).collect();
        assert_eq!(models, vec!["Two", "One"]);
    }

    #[test]
    fn from_json_round_trip() {
        let raw = r#"[{
            "model": "One",
            "brand": "Acme",
            "price": 100,
            "screen_size": 6.0,
            "resolution_width": 1080,
            "resolution_height": 2400,
            "ram_gb": 4,
            "storage_gb": 64,
            "battery_mah": 4500,
            "has_5g": true
        }]"#;
        let catalog = Catalog::from_json(raw.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get_by_full_name("acme one").is_some());
    }
}
