// Call Number Normalizer
// Rewrites free-form LOC call numbers into the spacing the classification parser expects

use once_cell::sync::Lazy;
use regex::Regex;

/// "QA 123" -> "QA123"
static CLASS_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+) (\d+)").unwrap());

/// "123 .A5" -> "123.A5"
static PERIOD_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d) \.").unwrap());

/// Normalize a raw call number.
///
/// An absent value becomes an empty string, so callers never carry a null
/// call number past this point. Only the two gaps above are collapsed; any
/// other irregular spacing inside the string is left alone.
pub fn normalize(call_number: Option<&str>) -> String {
    let Some(raw) = call_number else {
        return String::new();
    };

    let collapsed = CLASS_GAP.replace_all(raw, "${1}${2}");
    let collapsed = PERIOD_GAP.replace_all(&collapsed, "${1}.");

    collapsed.trim().to_string()
}
