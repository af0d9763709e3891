//! Cell text formatting.

/// Text shown for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a ratio as a percentage with one decimal and a comma separator.
///
/// `Some(0.5)` becomes `50,0%`, `Some(0.1225)` becomes `12,3%`; `None`
/// becomes `N/A`.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", one_decimal(v * 100.0)).replace('.', ","),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Rounds to one decimal, exact halves away from zero.
///
/// `{:.1}` alone rounds exact halves to even. A double sits exactly halfway
/// between two tenths only when its fraction is .25 or .75.
fn one_decimal(x: f64) -> String {
    let quarters = x.abs() * 4.0;
    let is_half = quarters.fract() == 0.0 && (quarters % 2.0) == 1.0;
    if is_half {
        format!("{:.1}", x + 0.05f64.copysign(x))
    } else {
        format!("{x:.1}")
    }
}

/// Formats an amount as US dollars, e.g. `$1,234.50` or `-$3.00`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
