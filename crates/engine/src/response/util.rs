//! Small formatting helpers shared by the renderers

/// Thousands separator, `1234567` -> `"1,234,567"`.
pub(crate) fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Trim a float to at most one decimal, without trailing zeros.
pub(crate) fn format_ghz(ghz: f32) -> String {
    let s = format!("{ghz:.1}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
