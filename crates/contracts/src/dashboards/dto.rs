//! Read-only aggregate feeds consumed by the dashboard orchestrator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One point of the forecast-vs-actual trend series, averaged per month by
/// the backend. The averages are meaningless when the contributing count is
/// zero; views must flag that case instead of rendering the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Month label ("Jun").
    pub month: String,
    /// Averaged forecast tons across contributing projects.
    #[serde(default)]
    pub forecast: f64,
    /// Averaged actual tons.
    #[serde(default)]
    pub actual: f64,
    #[serde(default)]
    pub forecast_count: u32,
    #[serde(default)]
    pub actual_count: u32,
}

impl TrendPoint {
    pub fn variance(&self) -> f64 {
        self.actual - self.forecast
    }

    /// An average backed by zero contributors is not displayable.
    pub fn has_forecast(&self) -> bool {
        self.forecast_count > 0
    }

    pub fn has_actual(&self) -> bool {
        self.actual_count > 0
    }
}

/// `GET /api/dashboard/metrics` summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub active_projects: u32,
    #[serde(default)]
    pub forecast_accuracy: f64,
    #[serde(default)]
    pub pending_orders: u32,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub projects_this_month: u32,
    #[serde(default)]
    pub current_month: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `GET /api/analytics/overview`. The mandatory feed; without it the
/// dashboard body is replaced by a retry affordance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub avg_budget: f64,
    #[serde(default)]
    pub material_totals: BTreeMap<String, f64>,
    #[serde(default)]
    pub location_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub risk_distribution: BTreeMap<String, u32>,
}

/// `GET /api/analytics/materials`, per-material monthly consumption series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialSeries {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

pub type MaterialsByCategory = BTreeMap<String, MaterialSeries>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_points_are_flagged_not_shown() {
        let point: TrendPoint = serde_json::from_str(
            r#"{"month": "Jun", "forecast": 120.5, "actual": 0.0, "forecast_count": 3, "actual_count": 0}"#,
        )
        .unwrap();
        assert!(point.has_forecast());
        assert!(!point.has_actual());
        assert_eq!(point.variance(), -120.5);
    }

    #[test]
    fn metrics_tolerate_missing_fields() {
        let metrics: DashboardMetrics = serde_json::from_str(r#"{"total_projects": 7}"#).unwrap();
        assert_eq!(metrics.total_projects, 7);
        assert_eq!(metrics.forecast_accuracy, 0.0);
        assert!(metrics.timestamp.is_none());
    }
}
