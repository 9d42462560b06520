//! Forecast requests and the per-month prediction records they produce.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The 13 materials the prediction model reports on, with display metadata.
pub const TARGET_MATERIALS: &[MaterialSpec] = &[
    MaterialSpec::new("quantity_steel_tons", "Steel (Tons)", MaterialUnit::Tons),
    MaterialSpec::new("quantity_copper_tons", "Copper (Tons)", MaterialUnit::Tons),
    MaterialSpec::new("quantity_cement_tons", "Cement (Tons)", MaterialUnit::Tons),
    MaterialSpec::new("quantity_aluminum_tons", "Aluminum (Tons)", MaterialUnit::Tons),
    MaterialSpec::new("quantity_insulators_count", "Insulators", MaterialUnit::Units),
    MaterialSpec::new("quantity_conductors_tons", "Conductors (Tons)", MaterialUnit::Tons),
    MaterialSpec::new("quantity_transformers_count", "Transformers", MaterialUnit::Units),
    MaterialSpec::new("quantity_switchgears_count", "Switchgears", MaterialUnit::Units),
    MaterialSpec::new("quantity_cables_count", "Cables", MaterialUnit::Units),
    MaterialSpec::new(
        "quantity_protective_relays_count",
        "Protective Relays",
        MaterialUnit::Units,
    ),
    MaterialSpec::new("quantity_oil_tons", "Oil (Tons)", MaterialUnit::Tons),
    MaterialSpec::new(
        "quantity_foundation_concrete_tons",
        "Foundation Concrete (Tons)",
        MaterialUnit::Tons,
    ),
    MaterialSpec::new("quantity_bolts_count", "Bolts", MaterialUnit::Units),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialUnit {
    Tons,
    Units,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub unit: MaterialUnit,
}

impl MaterialSpec {
    const fn new(key: &'static str, name: &'static str, unit: MaterialUnit) -> Self {
        MaterialSpec { key, name, unit }
    }

    /// Tons keep two decimals, counted materials round to whole units.
    pub fn format_value(&self, value: f64) -> String {
        match self.unit {
            MaterialUnit::Tons => format!("{:.2} tons", value),
            MaterialUnit::Units => format!("{} units", value.round() as i64),
        }
    }
}

/// Prettify a raw material key when it is not in the catalog:
/// `quantity_steel_tons` becomes `Steel Tons`.
pub fn format_material_name(key: &str) -> String {
    let trimmed = key.strip_prefix("quantity_").unwrap_or(key);
    trimmed
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unit inferred from a raw key suffix, for catalog misses.
pub fn unit_for_key(key: &str) -> Option<MaterialUnit> {
    if key.contains("tons") {
        Some(MaterialUnit::Tons)
    } else if key.contains("count") {
        Some(MaterialUnit::Units)
    } else {
        None
    }
}

/// Project parameters submitted to `POST /api/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub project_location: String,
    pub tower_type: String,
    pub substation_type: String,
    pub region_risk_flag: String,
    pub budget: f64,
    pub project_size_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_month: Option<String>,
}

impl Default for ForecastRequest {
    fn default() -> Self {
        ForecastRequest {
            project_location: "North".to_string(),
            tower_type: "Tension".to_string(),
            substation_type: "132 kV AIS".to_string(),
            region_risk_flag: "Low".to_string(),
            budget: 30_000_000.0,
            project_size_km: 100.0,
            project_id: None,
            forecast_month: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub predictions: BTreeMap<String, Value>,
}

/// One stored forecast for a project month. Immutable once created; a repeat
/// forecast for the same month overwrites it server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyForecast {
    /// Omitted when the record is served nested under its project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// "YYYY-MM"
    pub forecast_month: String,
    pub predictions: BTreeMap<String, Value>,
    /// Reported consumption for the month, once entered.
    #[serde(default)]
    pub actual_values: BTreeMap<String, Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Form option lists, as offered by the prediction model.
pub const LOCATION_OPTIONS: &[&str] = &["North", "South", "East", "West", "Central"];
pub const TOWER_TYPE_OPTIONS: &[&str] = &["Tension", "Transposition", "Terminal", "Suspension"];
pub const SUBSTATION_TYPE_OPTIONS: &[&str] =
    &["132 kV AIS", "132 kV GIS", "220 kV AIS", "400 kV GIS"];
pub const RISK_OPTIONS: &[&str] = &["Low", "Medium", "High"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_names_prettify() {
        assert_eq!(format_material_name("quantity_steel_tons"), "Steel Tons");
        assert_eq!(
            format_material_name("quantity_foundation_concrete_tons"),
            "Foundation Concrete Tons"
        );
        assert_eq!(format_material_name("bolts"), "Bolts");
    }

    #[test]
    fn units_follow_key_suffix() {
        assert_eq!(unit_for_key("quantity_oil_tons"), Some(MaterialUnit::Tons));
        assert_eq!(
            unit_for_key("quantity_bolts_count"),
            Some(MaterialUnit::Units)
        );
        assert_eq!(unit_for_key("mystery"), None);
    }

    #[test]
    fn formatting_respects_units() {
        let steel = &TARGET_MATERIALS[0];
        assert_eq!(steel.format_value(277.214), "277.21 tons");
        let insulators = TARGET_MATERIALS
            .iter()
            .find(|m| m.key == "quantity_insulators_count")
            .unwrap();
        assert_eq!(insulators.format_value(156.45), "156 units");
    }
}
