//! Single-model feature dump
//!
//! Renders the structured description of one phone. Every optional field
//! gets a presence check: an absent field is omitted entirely, never
//! rendered as a placeholder.

use celubot_core::Product;

use super::util::{format_ghz, format_price};

pub(crate) fn phone_details(product: &Product, budget_price: u32) -> String {
    let mut lines = Vec::new();

    lines.push(format!("📱 *{}*", product.full_name()));
    lines.push(format!("💵 *Precio:* ${}", format_price(product.price)));
    lines.push(format!(
        "📶 *Redes:* {}",
        if product.has_5g { "5G" } else { "4G LTE" }
    ));

    let mut display = format!(
        "🖥️ *Pantalla:* {}\" | {}x{} px",
        product.screen_size, product.resolution_width, product.resolution_height
    );
    if let Some(hz) = product.refresh_rate_hz {
        display.push_str(&format!(" | {hz}Hz"));
    }
    lines.push(display);

    lines.push(format!(
        "⚡ *Memoria:* {}GB RAM + {}GB",
        product.ram_gb, product.storage_gb
    ));

    let mut battery = format!("🔋 *Batería:* {}mAh", product.battery_mah);
    if let Some(w) = product.fast_charging_w {
        battery.push_str(&format!(" con carga de {w}W"));
    }
    lines.push(battery);

    if let Some(mp) = product.rear_camera_mp {
        let mut camera = format!("📸 *Cámara:* {mp}MP");
        if let Some(n) = product.rear_cameras {
            camera.push_str(&format!(" ({n} lentes)"));
        }
        if product.has_ois == Some(true) {
            camera.push_str(" con OIS");
        }
        lines.push(camera);
    }

    if let Some(mp) = product.front_camera_mp {
        lines.push(format!("🤳 *Frontal:* {mp}MP"));
    }

    if let Some(ghz) = product.processor_ghz {
        lines.push(format!("🚀 *Procesador:* {}GHz", format_ghz(ghz)));
    }

    match product.avg_rating {
        Some(rating) if rating >= 4.5 => {
            lines.push(String::new());
            lines.push("⭐ *Recomendado por nuestros clientes*".to_string());
        }
        _ if product.price < budget_price => {
            lines.push(String::new());
            lines.push("💡 *Excelente relación calidad-precio*".to_string());
        }
        _ => {}
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_phone() -> Product {
        Product {
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
        }
    }

    #[test]
    fn renders_every_present_field() {
        let text = phone_details(&full_phone(), 20_000);
        assert!(text.contains("Apple iPhone 13"));
        assert!(text.contains("$999"));
        assert!(text.contains("5G"));
        assert!(text.contains("6GB RAM + 128GB"));
        assert!(text.contains("3240mAh con carga de 20W"));
        assert!(text.contains("12MP (2 lentes) con OIS"));
        assert!(text.contains("Recomendado por nuestros clientes"));
    }

    #[test]
    fn absent_fields_are_omitted_not_placeholdered() {
        let mut phone = full_phone();
        phone.rear_camera_mp = None;
        phone.rear_cameras = None;
        phone.front_camera_mp = None;
        phone.fast_charging_w = None;
        phone.processor_ghz = None;
        phone.refresh_rate_hz = None;
        phone.avg_rating = None;

        let text = phone_details(&phone, 20_000);
        assert!(!text.contains("Cámara"));
        assert!(!text.contains("Frontal"));
        assert!(!text.contains("carga de"));
        assert!(!text.contains("Procesador"));
        assert!(!text.contains("Hz"));
        assert!(!text.contains("N/A"));
        // battery still renders without the charging suffix
        assert!(text.contains("3240mAh"));
        // under the budget threshold without a high rating
        assert!(text.contains("Excelente relación calidad-precio"));
    }
}
