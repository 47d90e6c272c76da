//! Entity resolution against the catalog
//!
//! Maps free-text fragments to catalog entries: exact index lookups first,
//! then a fuzzy pass over every entry. Also extracts the list of phones a
//! comparison request names.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use celubot_config::EngineConfig;
use celubot_core::{Catalog, Product};

use crate::matcher::similarity;

/// Connector words a comparison request uses to join model names. Each one
/// is replaced by a comma before splitting the request into fragments.
static CONNECTORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(comparar|comparame|compara|comparación|comparacion|comparativa|compare|versus|vs|contra|against|frente a|con|and|with|entre|y|e)\b",
    )
    .expect("connector pattern is valid")
});

pub struct EntityResolver {
    catalog: Arc<Catalog>,
    fuzzy_threshold: f64,
    target_threshold: f64,
    max_targets: usize,
}

impl EntityResolver {
    pub fn new(catalog: Arc<Catalog>, config: &EngineConfig) -> Self {
        Self {
            catalog,
            fuzzy_threshold: config.fuzzy_threshold,
            target_threshold: config.target_threshold,
            max_targets: config.max_comparison_targets,
        }
    }

    /// Resolve a free-text fragment to a single phone.
    ///
    /// Exact model match wins, then exact "brand model" match, then the
    /// best fuzzy score over both forms across the whole catalog. Catalog
    /// order breaks fuzzy ties, so resolution is deterministic.
    pub fn resolve_phone(&self, query: &str) -> Option<&Product> {
        let folded = query.trim().to_lowercase();
        if folded.is_empty() {
            return None;
        }

        if let Some(product) = self.catalog.get_by_model(&folded) {
            return Some(product);
        }
        if let Some(product) = self.catalog.get_by_full_name(&folded) {
            return Some(product);
        }

        let mut best: Option<(&Product, f64)> = None;
        for product in self.catalog.iter() {
            let score = similarity(&folded, &product.full_name().to_lowercase())
                .max(similarity(&folded, &product.model.to_lowercase()));
            // strict > keeps the first entry on ties
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((product, score));
            }
        }

        best.filter(|&(_, score)| score > self.fuzzy_threshold)
            .map(|(product, _)| product)
    }

    /// All phones of a brand, in catalog order. Exact brand equality first;
    /// if nothing matches, fall back to substring containment.
    pub fn resolve_brand(&self, query: &str) -> Vec<&Product> {
        let folded = query.trim().to_lowercase();
        if folded.is_empty() {
            return Vec::new();
        }

        let exact: Vec<&Product> = self
            .catalog
            .iter()
            .filter(|p| p.brand.to_lowercase() == folded)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        self.catalog
            .iter()
            .filter(|p| p.brand.to_lowercase().contains(&folded))
            .collect()
    }

    /// Lowercased model names a comparison request refers to.
    ///
    /// Never returns a single name: the result is empty or holds 2 to
    /// `max_targets` entries, deduplicated in first-seen order.
    pub fn extract_comparison_targets(&self, query: &str) -> Vec<String> {
        let folded = query.to_lowercase();

        // connector words and symbol separators become fragment breaks
        let commas = CONNECTORS.replace_all(&folded, ",");
        let commas = commas.replace(['&', '/', '+'], ",");

        let fragments: Vec<&str> = commas
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if fragments.len() >= 2 {
            let mut names: Vec<String> = Vec::new();
            for fragment in fragments {
                if let Some(product) = self.resolve_phone(fragment) {
                    let name = product.model.to_lowercase();
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    if names.len() == self.max_targets {
                        break;
                    }
                }
            }
            if names.len() >= 2 {
                return names;
            }
        }

        // No usable fragments: scan every known model against the raw text.
        let mut names: Vec<String> = Vec::new();
        for product in self.catalog.iter() {
            let name = product.model.to_lowercase();
            if similarity(&folded, &name) > self.target_threshold && !names.contains(&name) {
                names.push(name);
                if names.len() == self.max_targets {
                    break;
                }
            }
        }

        if names.len() >= 2 {
            names
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celubot_core::Product;

    fn phone(brand: &str, model: &str, price: u32) -> Product {
        Product {
            model: model.into(),
            brand: brand.into(),
            price,
            screen_size: 6.1,
            resolution_width: 1080,
            resolution_height: 2400,
            ram_gb: 6,
            storage_gb: 128,
            battery_mah: 4500,
            fast_charging_w: None,
            rear_cameras: None,
            rear_camera_mp: None,
            front_camera_mp: None,
            refresh_rate_hz: None,
            has_5g: true,
            avg_rating: None,
            processor_ghz: None,
            has_ois: None,
        }
    }

    fn resolver() -> EntityResolver {
        let catalog = Arc::new(Catalog::new(vec![
            phone("Apple", "iPhone 13", 999),
            phone("Samsung", "Galaxy S21", 799),
            phone("Xiaomi", "Redmi Note 11", 249),
            phone("Samsung", "Galaxy A52", 349),
        ]));
        EntityResolver::new(catalog, &EngineConfig::default())
    }

    #[test]
    fn exact_model_match_wins() {
        let r = resolver();
        assert_eq!(r.resolve_phone("IPHONE 13").unwrap().brand, "Apple");
        assert_eq!(r.resolve_phone("samsung galaxy s21").unwrap().price, 799);
    }

    #[test]
    fn fuzzy_match_tolerates_typos() {
        let r = resolver();
        assert_eq!(r.resolve_phone("ifone 13").unwrap().model, "iPhone 13");
        assert_eq!(r.resolve_phone("galaxi s21").unwrap().model, "Galaxy S21");
    }

    #[test]
    fn unrelated_text_does_not_resolve() {
        let r = resolver();
        assert!(r.resolve_phone("lavadora industrial").is_none());
        assert!(r.resolve_phone("").is_none());
    }

    #[test]
    fn resolution_is_deterministic() {
        let r = resolver();
        let first = r.resolve_phone("galaxy").map(|p| p.model.clone());
        for _ in 0..5 {
            assert_eq!(r.resolve_phone("galaxy").map(|p| p.model.clone()), first);
        }
    }

    #[test]
    fn brand_exact_then_substring() {
        let r = resolver();
        let exact = r.resolve_brand("Samsung");
        assert_eq!(exact.len(), 2);
        assert_eq!(exact[0].model, "Galaxy S21"); // catalog order

        let partial = r.resolve_brand("sams");
        assert_eq!(partial.len(), 2);

        assert!(r.resolve_brand("nokia").is_empty());
    }

    #[test]
    fn targets_from_connected_fragments() {
        let r = resolver();
        let targets = r.extract_comparison_targets("comparar iPhone 13 con Galaxy S21");
        assert_eq!(targets, vec!["iphone 13", "galaxy s21"]);
    }

    #[test]
    fn targets_with_vs_and_slash() {
        let r = resolver();
        assert_eq!(
            r.extract_comparison_targets("iphone 13 vs galaxy s21"),
            vec!["iphone 13", "galaxy s21"]
        );
        assert_eq!(
            r.extract_comparison_targets("redmi note 11 / galaxy a52"),
            vec!["redmi note 11", "galaxy a52"]
        );
    }

    #[test]
    fn targets_never_single() {
        let r = resolver();
        assert!(r.extract_comparison_targets("comparar iPhone 13").is_empty());
        assert!(r.extract_comparison_targets("comparar").is_empty());
        assert!(r.extract_comparison_targets("").is_empty());
    }

    #[test]
    fn duplicate_targets_collapse() {
        let r = resolver();
        let targets = r.extract_comparison_targets("iphone 13 vs iphone 13 vs galaxy s21");
        assert_eq!(targets, vec!["iphone 13", "galaxy s21"]);
    }

    #[test]
    fn targets_cap_at_four() {
        let catalog = Arc::new(Catalog::new(vec![
            phone("A", "M1", 1),
            phone("B", "M2", 2),
            phone("C", "M3", 3),
            phone("D", "M4", 4),
            phone("E", "M5", 5),
        ]));
        let r = EntityResolver::new(catalog, &EngineConfig::default());
        let targets = r.extract_comparison_targets("m1, m2, m3, m4, m5");
        assert_eq!(targets.len(), 4);
        assert_eq!(targets, vec!["m1", "m2", "m3", "m4"]);
    }
}
