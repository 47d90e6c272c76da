//! Feature-category rankings
//!
//! Each category filters the catalog to entries that actually carry the
//! relevant fields, sorts by the category's defining metric, truncates to
//! the configured top N, and renders one annotated line block per entry.
//! An empty result degrades to the category's apology string; missing
//! optional fields are filtered out before sorting, so a ranking can never
//! trip over an absent sort key.

use celubot_config::EngineConfig;
use celubot_core::{Catalog, Product};

use super::templates;
use super::util::format_price;
use crate::intent::FeatureCategory;
use crate::picker::PhrasePicker;

pub(crate) struct FeatureRenderer<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a EngineConfig,
    pub picker: &'a dyn PhrasePicker,
}

impl FeatureRenderer<'_> {
    pub(crate) fn render(&self, category: FeatureCategory, folded_query: &str) -> String {
        match category {
            // an economy query that also mentions 5G gets the combined list
            FeatureCategory::Price if folded_query.contains("5g") => self.affordable_5g(),
            FeatureCategory::Price => self.cheapest(),
            FeatureCategory::Camera => self.best_cameras(),
            FeatureCategory::Display => self.best_displays(),
            FeatureCategory::Battery => self.best_batteries(),
            FeatureCategory::Network5g => self.with_5g(),
            FeatureCategory::Performance => self.best_performance(),
            FeatureCategory::Recommendation => self.best_rated(),
        }
    }

    fn variant(&self, pool: &[&str]) -> String {
        pool[self.picker.pick(pool.len())].to_string()
    }

    fn top_n<'c>(&self, mut entries: Vec<&'c Product>) -> Vec<&'c Product> {
        entries.truncate(self.config.top_n);
        entries
    }

    fn listing(&self, intro: String, lines: Vec<String>) -> String {
        let mut parts = vec![intro];
        parts.extend(lines);
        parts.push(String::new());
        parts.push(self.variant(templates::OUTROS));
        parts.join("\n")
    }

    fn price_line(&self, price: u32) -> String {
        if price < self.config.budget_price {
            format!(
                "   💵 ${} ({})",
                format_price(price),
                self.variant(templates::BARGAINS)
            )
        } else {
            format!("   💵 ${}", format_price(price))
        }
    }

    fn cheapest(&self) -> String {
        let mut entries: Vec<&Product> = self.catalog.iter().collect();
        if entries.is_empty() {
            return templates::NO_PRICE_DATA.to_string();
        }
        entries.sort_by_key(|p| p.price);
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. *{}*\n{}\n   ⚡ {}GB RAM",
                    i + 1,
                    p.full_name(),
                    self.price_line(p.price),
                    p.ram_gb,
                )
            })
            .collect();

        self.listing(self.variant(templates::PRICE_INTROS), lines)
    }

    fn affordable_5g(&self) -> String {
        let mut entries: Vec<&Product> = self.catalog.iter().filter(|p| p.has_5g).collect();
        if entries.is_empty() {
            return templates::NO_PRICE_5G_DATA.to_string();
        }
        entries.sort_by_key(|p| p.price);
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. *{}*\n{}\n   ⚡ {}GB RAM\n   🔋 {}mAh",
                    i + 1,
                    p.full_name(),
                    self.price_line(p.price),
                    p.ram_gb,
                    p.battery_mah,
                )
            })
            .collect();

        self.listing(self.variant(templates::PRICE_5G_INTROS), lines)
    }

    fn best_cameras(&self) -> String {
        let mut entries: Vec<&Product> = self
            .catalog
            .iter()
            .filter(|p| p.rear_camera_mp.is_some())
            .collect();
        if entries.is_empty() {
            return templates::NO_CAMERA_DATA.to_string();
        }
        entries.sort_by(|a, b| b.rear_camera_mp.cmp(&a.rear_camera_mp));
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mp = p.rear_camera_mp.unwrap_or_default();
                let camera = match p.rear_cameras {
                    Some(n) => format!("{mp}MP ({n} lentes)"),
                    None => format!("{mp}MP"),
                };
                format!(
                    "{}. *{}*\n   📸 {}\n   💵 ${}",
                    i + 1,
                    p.full_name(),
                    camera,
                    format_price(p.price),
                )
            })
            .collect();

        self.listing(self.variant(templates::CAMERA_INTROS), lines)
    }

    fn best_displays(&self) -> String {
        let mut entries: Vec<&Product> = self
            .catalog
            .iter()
            .filter(|p| p.refresh_rate_hz.is_some())
            .collect();
        if entries.is_empty() {
            return templates::NO_DISPLAY_DATA.to_string();
        }
        entries.sort_by(|a, b| {
            b.screen_size
                .total_cmp(&a.screen_size)
                .then(b.refresh_rate_hz.cmp(&a.refresh_rate_hz))
        });
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. *{}*\n   🖥️ {}\" | {}Hz\n   💵 ${}",
                    i + 1,
                    p.full_name(),
                    p.screen_size,
                    p.refresh_rate_hz.unwrap_or_default(),
                    format_price(p.price),
                )
            })
            .collect();

        self.listing(self.variant(templates::DISPLAY_INTROS), lines)
    }

    fn best_batteries(&self) -> String {
        let mut entries: Vec<&Product> = self.catalog.iter().collect();
        if entries.is_empty() {
            return templates::NO_BATTERY_DATA.to_string();
        }
        entries.sort_by(|a, b| b.battery_mah.cmp(&a.battery_mah));
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut battery = format!("{}mAh", p.battery_mah);
                if let Some(w) = p.fast_charging_w {
                    battery.push_str(&format!(" | Carga rápida {w}W"));
                }
                if p.battery_mah > self.config.big_battery_mah {
                    battery.push_str(&format!(" ({})", templates::BIG_BATTERY_NOTE));
                }
                format!(
                    "{}. *{}*\n   🔋 {}\n   💵 ${}",
                    i + 1,
                    p.full_name(),
                    battery,
                    format_price(p.price),
                )
            })
            .collect();

        self.listing(self.variant(templates::BATTERY_INTROS), lines)
    }

    fn with_5g(&self) -> String {
        let entries: Vec<&Product> = self.catalog.iter().filter(|p| p.has_5g).collect();
        if entries.is_empty() {
            return templates::NO_NETWORK_DATA.to_string();
        }
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. *{}*\n{}\n   ⚡ {}GB RAM",
                    i + 1,
                    p.full_name(),
                    self.price_line(p.price),
                    p.ram_gb,
                )
            })
            .collect();

        self.listing(self.variant(templates::NETWORK_INTROS), lines)
    }

    fn best_performance(&self) -> String {
        let mut entries: Vec<&Product> = self
            .catalog
            .iter()
            .filter(|p| p.processor_ghz.is_some())
            .collect();
        if entries.is_empty() {
            return templates::NO_PERFORMANCE_DATA.to_string();
        }
        entries.sort_by(|a, b| {
            b.ram_gb.cmp(&a.ram_gb).then(
                b.processor_ghz
                    .unwrap_or_default()
                    .total_cmp(&a.processor_ghz.unwrap_or_default()),
            )
        });
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. *{}*\n   🚀 {}GB RAM\n   ⏱️ {}GHz\n   💵 ${}",
                    i + 1,
                    p.full_name(),
                    p.ram_gb,
                    super::util::format_ghz(p.processor_ghz.unwrap_or_default()),
                    format_price(p.price),
                )
            })
            .collect();

        self.listing(self.variant(templates::PERFORMANCE_INTROS), lines)
    }

    fn best_rated(&self) -> String {
        let mut entries: Vec<&Product> = self
            .catalog
            .iter()
            .filter(|p| p.avg_rating.is_some())
            .collect();
        if entries.is_empty() {
            return templates::NO_RECOMMENDATION_DATA.to_string();
        }
        entries.sort_by(|a, b| {
            b.avg_rating
                .unwrap_or_default()
                .total_cmp(&a.avg_rating.unwrap_or_default())
        });
        let entries = self.top_n(entries);

        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. *{}*\n   ⭐ {:.1} / 5\n   💵 ${}",
                    i + 1,
                    p.full_name(),
                    p.avg_rating.unwrap_or_default(),
                    format_price(p.price),
                )
            })
            .collect();

        self.listing(self.variant(templates::RECOMMENDATION_INTROS), lines)
    }
}
