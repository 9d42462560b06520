//! Procurement orders raised against projects.

use serde::{Deserialize, Serialize};

pub const ORDER_STATUS_PENDING: &str = "PENDING";
pub const ORDER_STATUS_APPROVED: &str = "APPROVED";
pub const ORDER_STATUS_DELIVERED: &str = "DELIVERED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(default)]
    pub order_id: Option<String>,
    pub project_id: String,
    pub material: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub dealer: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PurchaseOrder {
    pub fn total_price(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Create payload; the backend prices the order and assigns its id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderInput {
    pub project_id: String,
    pub material: String,
    pub quantity: f64,
    #[serde(default)]
    pub dealer: Option<String>,
    pub status: String,
}

/// Counts for the purchase-requests summary strip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderSummary {
    pub pending: usize,
    pub approved: usize,
    pub delivered: usize,
    pub total_value: f64,
}

impl OrderSummary {
    pub fn tally(orders: &[PurchaseOrder]) -> Self {
        let mut summary = OrderSummary::default();
        for order in orders {
            match order.status.as_str() {
                ORDER_STATUS_PENDING => summary.pending += 1,
                ORDER_STATUS_APPROVED => summary.approved += 1,
                ORDER_STATUS_DELIVERED => summary.delivered += 1,
                _ => {}
            }
            summary.total_value += order.total_price();
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, quantity: f64, unit_price: f64) -> PurchaseOrder {
        PurchaseOrder {
            order_id: None,
            project_id: "P0001".to_string(),
            material: "Steel (Tons)".to_string(),
            quantity,
            unit_price,
            dealer: None,
            status: status.to_string(),
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn summary_counts_by_status_and_totals_value() {
        let orders = vec![
            order(ORDER_STATUS_PENDING, 10.0, 5.0),
            order(ORDER_STATUS_PENDING, 1.0, 100.0),
            order(ORDER_STATUS_APPROVED, 2.0, 50.0),
            order(ORDER_STATUS_DELIVERED, 4.0, 25.0),
            order("REJECTED", 1.0, 1.0),
        ];
        let summary = OrderSummary::tally(&orders);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.approved, 1);
        assert_eq!(summary.delivered, 1);
        // Unrecognized statuses still contribute to total value.
        assert_eq!(summary.total_value, 351.0);
    }
}
