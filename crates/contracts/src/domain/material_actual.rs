//! User-reported actual material consumption per project month.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::shared::metrics::{compute_metrics, MaterialMetrics};

/// Stored actuals record. At most one exists per (project_id, month); the
/// save endpoint overwrites rather than appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialActual {
    pub project_id: String,
    /// "YYYY-MM"
    pub month: String,
    pub material_values: BTreeMap<String, Value>,
    /// Total of all actual values.
    #[serde(default)]
    pub combined_score: f64,
    #[serde(default)]
    pub forecast_total: f64,
    #[serde(default)]
    pub accuracy_percentage: f64,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Upsert payload for `POST /api/material-actuals`. Derived totals are
/// computed client-side from the entered values and the month's forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialActualPayload {
    pub project_id: String,
    pub month: String,
    pub material_values: BTreeMap<String, Value>,
    pub combined_score: f64,
    pub forecast_total: f64,
    pub accuracy_percentage: f64,
    pub created_at: String,
    pub created_by: String,
}

impl MaterialActualPayload {
    /// Build the upsert payload, reconciling against the month's forecast
    /// (empty when none exists, which zeroes the percentage fields).
    pub fn build(
        project_id: &str,
        month: &str,
        material_values: BTreeMap<String, Value>,
        forecast_values: &BTreeMap<String, Value>,
        created_by: &str,
        created_at: &str,
    ) -> (Self, MaterialMetrics) {
        let metrics = compute_metrics(&material_values, forecast_values);
        let payload = MaterialActualPayload {
            project_id: project_id.to_string(),
            month: month.to_string(),
            material_values,
            combined_score: metrics.total_actual,
            forecast_total: metrics.total_forecast,
            accuracy_percentage: metrics.accuracy_percentage,
            created_at: created_at.to_string(),
            created_by: created_by.to_string(),
        };
        (payload, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_carries_reconciled_totals() {
        let mut actuals = BTreeMap::new();
        actuals.insert("quantity_steel_tons".to_string(), json!("95"));
        let mut forecast = BTreeMap::new();
        forecast.insert("quantity_steel_tons".to_string(), json!(100.0));

        let (payload, metrics) = MaterialActualPayload::build(
            "P0001",
            "2024-06",
            actuals,
            &forecast,
            "admin",
            "2024-06-15T10:00:00Z",
        );
        assert_eq!(payload.combined_score, 95.0);
        assert_eq!(payload.forecast_total, 100.0);
        assert_eq!(payload.accuracy_percentage, 95.0);
        assert_eq!(metrics.variance, -5.0);
    }

    #[test]
    fn missing_forecast_zeroes_percentages() {
        let mut actuals = BTreeMap::new();
        actuals.insert("quantity_steel_tons".to_string(), json!(12.0));

        let (payload, _) = MaterialActualPayload::build(
            "P0001",
            "2024-06",
            actuals,
            &BTreeMap::new(),
            "admin",
            "2024-06-15T10:00:00Z",
        );
        assert_eq!(payload.forecast_total, 0.0);
        assert_eq!(payload.accuracy_percentage, 0.0);
    }
}
