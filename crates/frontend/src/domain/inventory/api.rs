use contracts::domain::inventory::{InventoryItem, InventoryUpdate};
use contracts::system::auth::MessageResponse;

use crate::shared::api::{get_json_auth, post_json_auth, put_json_auth, ApiError};

pub async fn list_inventory(token: &str) -> Result<Vec<InventoryItem>, ApiError> {
    get_json_auth("/api/inventory", token).await
}

pub async fn update_item(
    token: &str,
    material_code: &str,
    update: &InventoryUpdate,
) -> Result<MessageResponse, ApiError> {
    let path = format!("/api/inventory/{}", urlencoding::encode(material_code));
    put_json_auth(&path, token, update).await
}

/// Seed the warehouse with the standard material catalog. Idempotent on
/// the backend; existing records are left alone.
pub async fn initialize_inventory(token: &str) -> Result<MessageResponse, ApiError> {
    post_json_auth("/api/inventory/initialize", token, &serde_json::json!({})).await
}
