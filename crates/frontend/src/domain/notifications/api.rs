use contracts::domain::notification::Notification;
use contracts::system::auth::MessageResponse;

use crate::shared::api::{get_json_auth, put_json_auth, ApiError};

/// Latest notifications for the current user, newest first.
pub async fn list_notifications(token: &str) -> Result<Vec<Notification>, ApiError> {
    get_json_auth("/api/notifications", token).await
}

pub async fn mark_read(token: &str, notification_id: &str) -> Result<MessageResponse, ApiError> {
    let path = format!(
        "/api/notifications/{}/read",
        urlencoding::encode(notification_id)
    );
    put_json_auth(&path, token, &serde_json::json!({})).await
}
