//! Warehouse stock records and stock-health classification.

use serde::{Deserialize, Serialize};

/// Overstock warning kicks in at 90% of max, an early-warning band rather
/// than an error at the ceiling.
const OVERSTOCK_BAND: f64 = 0.9;

/// Stock health derived from quantity versus the min/max thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "LOW_STOCK")]
    LowStock,
    #[serde(rename = "OVERSTOCK")]
    Overstock,
    #[serde(rename = "HEALTHY")]
    Healthy,
}

impl StockStatus {
    /// Total over all inputs; first matching branch is authoritative even for
    /// malformed configurations (`min > max`).
    pub fn classify(quantity: f64, min_stock: f64, max_stock: f64) -> Self {
        if quantity <= min_stock {
            StockStatus::LowStock
        } else if quantity >= max_stock * OVERSTOCK_BAND {
            StockStatus::Overstock
        } else {
            StockStatus::Healthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::LowStock => "LOW STOCK",
            StockStatus::Overstock => "OVERSTOCK",
            StockStatus::Healthy => "HEALTHY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub material_code: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub min_stock: f64,
    #[serde(default)]
    pub max_stock: f64,
    #[serde(default)]
    pub available: f64,
    #[serde(default)]
    pub reserved: f64,
    #[serde(default)]
    pub in_transit: f64,
    #[serde(default)]
    pub warehouse: Option<String>,
}

impl InventoryItem {
    /// Quantity is derived, not independently stored:
    /// `available + reserved + in_transit`.
    pub fn derived_quantity(&self) -> f64 {
        self.available + self.reserved + self.in_transit
    }

    /// Recompute the derived quantity before any save.
    pub fn normalize(&mut self) {
        self.quantity = self.derived_quantity();
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.min_stock, self.max_stock)
    }
}

/// Update payload for `PUT /api/inventory/{material_code}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub quantity: f64,
    pub min_stock: f64,
    pub max_stock: f64,
    pub available: f64,
    pub reserved: f64,
    pub in_transit: f64,
    #[serde(default)]
    pub warehouse: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_min_is_low_stock() {
        assert_eq!(
            StockStatus::classify(89.0, 89.0, 276.0),
            StockStatus::LowStock
        );
    }

    #[test]
    fn at_ninety_percent_of_max_is_overstock() {
        let max = 542.0;
        assert_eq!(
            StockStatus::classify(max * 0.9, 64.0, max),
            StockStatus::Overstock
        );
    }

    #[test]
    fn between_bands_is_healthy() {
        // 151 > 89 and 151 < 0.9 * 276 = 248.4
        assert_eq!(
            StockStatus::classify(151.0, 89.0, 276.0),
            StockStatus::Healthy
        );
    }

    #[test]
    fn far_over_max_is_overstock() {
        // 685 >= 0.9 * 542 = 487.8
        assert_eq!(
            StockStatus::classify(685.0, 64.0, 542.0),
            StockStatus::Overstock
        );
    }

    #[test]
    fn malformed_thresholds_still_classify() {
        // min above max: the low-stock branch wins for anything at or under min.
        assert_eq!(
            StockStatus::classify(50.0, 100.0, 10.0),
            StockStatus::LowStock
        );
        assert_eq!(
            StockStatus::classify(150.0, 100.0, 10.0),
            StockStatus::Overstock
        );
    }

    #[test]
    fn quantity_is_derived_from_components() {
        let mut item = InventoryItem {
            material_code: "steel_tons".to_string(),
            name: "Steel (Tons)".to_string(),
            category: "Tower Equipment".to_string(),
            unit: "tons".to_string(),
            quantity: 0.0,
            min_stock: 89.0,
            max_stock: 276.0,
            available: 150.0,
            reserved: 1.0,
            in_transit: 56.0,
            warehouse: None,
        };
        assert_eq!(item.derived_quantity(), 207.0);
        item.normalize();
        assert_eq!(item.quantity, 207.0);
        assert_eq!(item.status(), StockStatus::Healthy);
    }
}
