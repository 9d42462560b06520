use contracts::domain::order::{OrderInput, PurchaseOrder};
use contracts::system::auth::MessageResponse;
use serde::Serialize;

use crate::shared::api::{delete_auth, get_json_auth, post_json_auth, put_json_auth, ApiError};

#[derive(Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

pub async fn list_orders(token: &str) -> Result<Vec<PurchaseOrder>, ApiError> {
    get_json_auth("/api/orders", token).await
}

/// Create an order; the backend prices it from its dealer catalog and
/// assigns the order id.
pub async fn create_order(token: &str, input: &OrderInput) -> Result<PurchaseOrder, ApiError> {
    post_json_auth("/api/orders", token, input).await
}

pub async fn update_order_status(
    token: &str,
    order_id: &str,
    status: &str,
) -> Result<MessageResponse, ApiError> {
    let path = format!("/api/orders/{}", urlencoding::encode(order_id));
    put_json_auth(&path, token, &StatusUpdate { status }).await
}

pub async fn delete_order(token: &str, order_id: &str) -> Result<(), ApiError> {
    let path = format!("/api/orders/{}", urlencoding::encode(order_id));
    delete_auth(&path, token).await
}
