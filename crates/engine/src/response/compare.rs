//! Comparison table rendering
//!
//! A row-per-feature markdown table across up to four phones, followed by
//! derived key observations. An observation is only emitted when a unique
//! winner exists: ties suppress it, for price as well as for camera and
//! battery (one consistent policy).

use celubot_core::Product;

use super::util::{format_ghz, format_price};

pub(crate) fn comparison_table(products: &[&Product]) -> String {
    let names: Vec<String> = products.iter().map(|p| p.full_name()).collect();

    let mut out = format!("📊 Comparing: {}\n\n", names.join(" vs "));

    let mut push_row = |label: &str, cells: Vec<String>| {
        out.push_str(&format!("| {} | {} |\n", label, cells.join(" | ")));
    };

    push_row("Característica", names.clone());
    push_row(
        "---",
        products.iter().map(|_| "---".to_string()).collect(),
    );

    push_row(
        "Precio",
        products
            .iter()
            .map(|p| format!("${}", format_price(p.price)))
            .collect(),
    );
    push_row(
        "Pantalla",
        products
            .iter()
            .map(|p| {
                format!(
                    "{}\" {}x{}",
                    p.screen_size, p.resolution_width, p.resolution_height
                )
            })
            .collect(),
    );
    push_row(
        "Memoria",
        products
            .iter()
            .map(|p| format!("{}GB + {}GB", p.ram_gb, p.storage_gb))
            .collect(),
    );
    push_row(
        "Batería",
        products
            .iter()
            .map(|p| format!("{}mAh", p.battery_mah))
            .collect(),
    );
    push_row(
        "5G",
        products
            .iter()
            .map(|p| if p.has_5g { "Sí" } else { "No" }.to_string())
            .collect(),
    );

    // optional rows only appear when at least one phone has the data
    optional_row(&mut push_row, "Carga rápida", products, |p| {
        p.fast_charging_w.map(|w| format!("{w}W"))
    });
    optional_row(&mut push_row, "Cámara trasera", products, |p| {
        p.rear_camera_mp.map(|mp| match p.rear_cameras {
            Some(n) => format!("{mp}MP ({n} lentes)"),
            None => format!("{mp}MP"),
        })
    });
    optional_row(&mut push_row, "Cámara frontal", products, |p| {
        p.front_camera_mp.map(|mp| format!("{mp}MP"))
    });
    optional_row(&mut push_row, "Refresco", products, |p| {
        p.refresh_rate_hz.map(|hz| format!("{hz}Hz"))
    });
    optional_row(&mut push_row, "Procesador", products, |p| {
        p.processor_ghz.map(|ghz| format!("{}GHz", format_ghz(ghz)))
    });
    optional_row(&mut push_row, "Calificación", products, |p| {
        p.avg_rating.map(|r| format!("{r:.1} / 5"))
    });

    let notes = observations(products);
    if !notes.is_empty() {
        out.push('\n');
        out.push_str(&notes);
    }

    out
}

fn optional_row(
    push_row: &mut impl FnMut(&str, Vec<String>),
    label: &str,
    products: &[&Product],
    cell: impl Fn(&Product) -> Option<String>,
) {
    let cells: Vec<Option<String>> = products.iter().map(|&p| cell(p)).collect();
    if cells.iter().all(Option::is_none) {
        return;
    }
    push_row(
        label,
        cells
            .into_iter()
            .map(|c| c.unwrap_or_else(|| "—".to_string()))
            .collect(),
    );
}

/// Cheapest phone, best camera, best battery. Each only when the winner is
/// unique; a tie suppresses that observation.
fn observations(products: &[&Product]) -> String {
    let mut notes = Vec::new();

    if let Some(min_price) = products.iter().map(|p| p.price).min() {
        let mut cheapest = products.iter().filter(|p| p.price == min_price);
        if let (Some(winner), None) = (cheapest.next(), cheapest.next()) {
            notes.push(format!(
                "- 💵 Más económico: {} (${})",
                winner.full_name(),
                format_price(min_price)
            ));
        }
    }

    if let Some(max_mp) = products.iter().filter_map(|p| p.rear_camera_mp).max() {
        let mut best = products.iter().filter(|p| p.rear_camera_mp == Some(max_mp));
        if let (Some(winner), None) = (best.next(), best.next()) {
            notes.push(format!(
                "- 📸 Mejor cámara: {} ({max_mp}MP)",
                winner.full_name()
            ));
        }
    }

    if let Some(max_mah) = products.iter().map(|p| p.battery_mah).max() {
        let mut best = products.iter().filter(|p| p.battery_mah == max_mah);
        if let (Some(winner), None) = (best.next(), best.next()) {
            notes.push(format!(
                "- 🔋 Mejor batería: {} ({max_mah}mAh)",
                winner.full_name()
            ));
        }
    }

    if notes.is_empty() {
        String::new()
    } else {
        format!("🔎 *Observaciones clave:*\n{}", notes.join("\n"))
    }
}
