//! Human-readable display attributes for fault records.
//!
//! Everything here is pure and total: missing or malformed properties fall
//! back to defaults rather than failing, because the catalog data is messy
//! and presentation must never break a page.

use std::sync::OnceLock;

use regex::Regex;

use crate::dataset::FaultFeature;

/// Fallback name for faults without a usable `name` property.
pub const UNNAMED_FAULT: &str = "Unnamed Fault";

/// Fallback for missing slip type, slip rate, and catalog name.
pub const UNKNOWN: &str = "Unknown";

/// Neutral color used when the slip type is missing or unrecognized.
pub const DEFAULT_FAULT_COLOR: &str = "#9e9e9e";

/// Display attributes derived from one fault record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultDescription {
    /// Fault name, or [`UNNAMED_FAULT`].
    pub name: String,
    /// Slip classification, or [`UNKNOWN`].
    pub slip_type: String,
    /// Formatted slip rate (e.g. `"3.4 mm/yr"`), or [`UNKNOWN`].
    pub slip_rate: String,
    /// Source catalog name, or [`UNKNOWN`].
    pub catalog: String,
    /// Display color for the slip type.
    pub color: String,
    /// One-sentence summary assembled from the above.
    pub description: String,
}

/// Display color for a slip type.
///
/// Matching is case-insensitive and keyword based, since catalog values
/// vary (`"Dextral"`, `"Dextral-Normal"`, `"Sinistral Transform"`, ...).
pub fn fault_type_color(slip_type: &str) -> &'static str {
    let slip = slip_type.to_ascii_lowercase();

    if slip.contains("dextral") || slip.contains("sinistral") || slip.contains("strike") {
        "#e67e22" // strike-slip: orange
    } else if slip.contains("reverse") || slip.contains("thrust") || slip.contains("subduction") {
        "#c0392b" // convergent: red
    } else if slip.contains("normal") {
        "#2980b9" // extensional: blue
    } else {
        DEFAULT_FAULT_COLOR
    }
}

/// Extract a formatted slip rate from the catalog's free-text rate field.
///
/// The field typically looks like `"(3.4,0.2,6.0)"` - a parenthesized
/// tuple whose leading token is the preferred rate in mm/yr. Anything not
/// matching that shape yields [`UNKNOWN`].
fn format_slip_rate(raw: Option<&str>) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"^\s*\(\s*(-?\d+(?:\.\d+)?)").expect("valid slip rate regex"));

    raw.and_then(|text| pattern.captures(text))
        .map(|caps| format!("{} mm/yr", &caps[1]))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Derive display attributes for a fault record.
///
/// Total function: every missing or malformed property is replaced by a
/// default, so this never fails regardless of how broken the record is.
pub fn describe(fault: &FaultFeature) -> FaultDescription {
    let name = fault
        .property_str("name")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(UNNAMED_FAULT)
        .to_string();

    let slip_type = fault
        .property_str("slip_type")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();

    let slip_rate = format_slip_rate(fault.property_str("net_slip_rate"));

    let catalog = fault
        .property_str("catalog_name")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();

    let color = fault_type_color(&slip_type).to_string();

    let description = format!(
        "{} is a {} slip fault with a net slip rate of {} ({} catalog).",
        name, slip_type, slip_rate, catalog
    );

    FaultDescription {
        name,
        slip_type,
        slip_rate,
        catalog,
        color,
        description,
    }
}
