use once_cell::sync::Lazy;
use regex::Regex;

/// Currency symbols (any Unicode `Sc` character: ₹, $, €, £, …),
/// thousands-separator commas and stray whitespace around a numeric cell.
static CURRENCY_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Sc},\s]").expect("currency pattern compiles"));

/// Strip currency formatting and parse the remainder as a number.
///
/// Unparseable and non-finite values become `None` (a missing value), never
/// an error: one bad cell must not fail a whole upload.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let stripped = CURRENCY_NOISE.replace_all(raw, "");
    if stripped.is_empty() {
        return None;
    }
    match stripped.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}
