use contracts::system::auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    ResetPasswordRequest, UserInfo,
};

use crate::shared::api::{self, ApiError};

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api::post_json("/api/login", &request).await
}

pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = RegisterRequest {
        username,
        email,
        password,
    };
    api::post_json("/api/register", &request).await
}

/// Validate the persisted token and fetch the current user.
pub async fn get_current_user(token: &str) -> Result<UserInfo, ApiError> {
    api::get_json_auth("/api/me", token).await
}

pub async fn forgot_password(email: String) -> Result<MessageResponse, ApiError> {
    api::post_json("/api/forgot-password", &ForgotPasswordRequest { email }).await
}

pub async fn reset_password(token: String, password: String) -> Result<MessageResponse, ApiError> {
    api::post_json("/api/reset-password", &ResetPasswordRequest { token, password }).await
}
