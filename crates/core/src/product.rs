//! Smartphone product model

use serde::{Deserialize, Serialize};

/// A smartphone catalog entry.
///
/// The source data is sparse: optional fields genuinely go missing and
/// absence carries meaning. Renderers must check presence per field and
/// never substitute a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Model name, unique within a brand.
    pub model: String,
    pub brand: String,
    /// Currency-agnostic integer units.
    pub price: u32,
    /// Diagonal in inches.
    pub screen_size: f32,
    pub resolution_width: u32,
    pub resolution_height: u32,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub battery_mah: u32,
    /// Fast charging wattage, if the phone supports it.
    #[serde(default)]
    pub fast_charging_w: Option<u32>,
    #[serde(default)]
    pub rear_cameras: Option<u32>,
    /// Primary rear sensor, megapixels.
    #[serde(default)]
    pub rear_camera_mp: Option<u32>,
    #[serde(default)]
    pub front_camera_mp: Option<u32>,
    #[serde(default)]
    pub refresh_rate_hz: Option<u32>,
    pub has_5g: bool,
    /// Average customer rating, 0 to 5.
    #[serde(default)]
    pub avg_rating: Option<f32>,
    /// Processor clock, GHz.
    #[serde(default)]
    pub processor_ghz: Option<f32>,
    /// Optical image stabilization.
    #[serde(default)]
    pub has_ois: Option<bool>,
}

impl Product {
    /// "Brand Model", the display identifier used everywhere a phone is
    /// named in a response.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_brand_and_model() {
        let p = Product {
            model: "iPhone 13".into(),
            brand: "Apple".into(),
            price: 999,
            screen_size: 6.1,
            resolution_width: 1170,
            resolution_height: 2532,
            ram_gb: 6,
            storage_gb: 128,
            battery_mah: 3240,
            fast_charging_w: Some(20),
            rear_cameras: Some(2),
            rear_camera_mp: Some(12),
            front_camera_mp: Some(12),
            refresh_rate_hz: Some(60),
            has_5g: true,
            avg_rating: Some(4.6),
            processor_ghz: Some(3.2),
            has_ois: Some(true),
        };
        assert_eq!(p.full_name(), "Apple iPhone 13");
    }

    #[test]
    fn sparse_fields_deserialize_as_absent() {
        let raw = r#"{
            "model": "A1",
            "brand": "Acme",
            "price": 150,
            "screen_size": 5.5,
            "resolution_width": 720,
            "resolution_height": 1520,
            "ram_gb": 3,
            "storage_gb": 32,
            "battery_mah": 4000,
            "has_5g": false
        }"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.fast_charging_w, None);
        assert_eq!(p.rear_camera_mp, None);
        assert_eq!(p.refresh_rate_hz, None);
        assert_eq!(p.avg_rating, None);
    }
}
