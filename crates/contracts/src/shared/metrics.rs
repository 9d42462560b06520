//! Forecast-vs-actual reconciliation for a single project month.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::shared::numeric::{round1, sum_numeric};

/// Qualitative rating of forecast accuracy, evaluated against fixed
/// thresholds in descending order. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AccuracyRating {
    pub fn from_accuracy(accuracy_percentage: f64) -> Self {
        if accuracy_percentage >= 95.0 {
            AccuracyRating::Excellent
        } else if accuracy_percentage >= 90.0 {
            AccuracyRating::Good
        } else if accuracy_percentage >= 80.0 {
            AccuracyRating::Fair
        } else {
            AccuracyRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccuracyRating::Excellent => "Excellent",
            AccuracyRating::Good => "Good",
            AccuracyRating::Fair => "Fair",
            AccuracyRating::Poor => "Poor",
        }
    }
}

/// Derived metrics for one (project, month) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialMetrics {
    pub total_actual: f64,
    pub total_forecast: f64,
    /// `round1(actual / forecast * 100)`, exactly 0 when forecast is 0.
    pub accuracy_percentage: f64,
    /// Signed, positive means over-delivery relative to forecast.
    pub variance: f64,
    pub variance_percentage: f64,
    pub rating: AccuracyRating,
}

/// Reconcile reported actuals against the month's forecast.
///
/// Both maps are keyed by material (`quantity_steel_tons`, ...); a key missing
/// on either side counts as zero, as does any unparseable value. A zero total
/// forecast yields 0 percentages rather than NaN or infinity.
pub fn compute_metrics(
    actual_values: &BTreeMap<String, Value>,
    forecast_values: &BTreeMap<String, Value>,
) -> MaterialMetrics {
    let total_actual = sum_numeric(actual_values);
    let total_forecast = sum_numeric(forecast_values);

    let accuracy_percentage = if total_forecast > 0.0 {
        round1(total_actual / total_forecast * 100.0)
    } else {
        0.0
    };

    let variance = total_actual - total_forecast;
    let variance_percentage = if total_forecast > 0.0 {
        round1(variance / total_forecast * 100.0)
    } else {
        0.0
    };

    MaterialMetrics {
        total_actual,
        total_forecast,
        accuracy_percentage,
        variance,
        variance_percentage,
        rating: AccuracyRating::from_accuracy(accuracy_percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn zero_forecast_yields_zero_percentages() {
        let metrics = compute_metrics(
            &map(&[("quantity_steel_tons", json!(42.0))]),
            &BTreeMap::new(),
        );
        assert_eq!(metrics.total_actual, 42.0);
        assert_eq!(metrics.total_forecast, 0.0);
        assert_eq!(metrics.accuracy_percentage, 0.0);
        assert_eq!(metrics.variance_percentage, 0.0);
        assert_eq!(metrics.rating, AccuracyRating::Poor);
        assert!(metrics.accuracy_percentage.is_finite());
    }

    #[test]
    fn accuracy_and_variance_are_exact() {
        let metrics = compute_metrics(
            &map(&[
                ("quantity_steel_tons", json!(50.0)),
                ("quantity_copper_tons", json!(45.0)),
            ]),
            &map(&[("quantity_steel_tons", json!(100.0))]),
        );
        assert_eq!(metrics.accuracy_percentage, 95.0);
        assert_eq!(metrics.variance, -5.0);
        assert_eq!(metrics.variance_percentage, -5.0);
        assert_eq!(metrics.rating, AccuracyRating::Excellent);
    }

    #[test]
    fn missing_keys_count_as_zero() {
        let metrics = compute_metrics(
            &map(&[("quantity_steel_tons", json!(80.0))]),
            &map(&[
                ("quantity_steel_tons", json!(60.0)),
                ("quantity_cement_tons", json!(40.0)),
            ]),
        );
        assert_eq!(metrics.total_actual, 80.0);
        assert_eq!(metrics.total_forecast, 100.0);
        assert_eq!(metrics.accuracy_percentage, 80.0);
        assert_eq!(metrics.rating, AccuracyRating::Fair);
    }

    #[test]
    fn malformed_entries_coerce_silently() {
        let metrics = compute_metrics(
            &map(&[
                ("quantity_steel_tons", json!("90")),
                ("quantity_oil_tons", json!("not a number")),
            ]),
            &map(&[("quantity_steel_tons", json!(100.0))]),
        );
        assert_eq!(metrics.total_actual, 90.0);
        assert_eq!(metrics.accuracy_percentage, 90.0);
        assert_eq!(metrics.rating, AccuracyRating::Good);
    }

    #[test]
    fn rating_boundaries_are_inclusive_on_the_low_side() {
        assert_eq!(
            AccuracyRating::from_accuracy(95.0),
            AccuracyRating::Excellent
        );
        assert_eq!(AccuracyRating::from_accuracy(94.9), AccuracyRating::Good);
        assert_eq!(AccuracyRating::from_accuracy(90.0), AccuracyRating::Good);
        assert_eq!(AccuracyRating::from_accuracy(89.9), AccuracyRating::Fair);
        assert_eq!(AccuracyRating::from_accuracy(80.0), AccuracyRating::Fair);
        assert_eq!(AccuracyRating::from_accuracy(79.9), AccuracyRating::Poor);
    }

    #[test]
    fn over_delivery_has_positive_variance() {
        let metrics = compute_metrics(
            &map(&[("quantity_steel_tons", json!(110.0))]),
            &map(&[("quantity_steel_tons", json!(100.0))]),
        );
        assert_eq!(metrics.variance, 10.0);
        assert_eq!(metrics.variance_percentage, 10.0);
        assert_eq!(metrics.accuracy_percentage, 110.0);
        // Accuracy has no ceiling; 110% still rates Excellent.
        assert_eq!(metrics.rating, AccuracyRating::Excellent);
    }
}
