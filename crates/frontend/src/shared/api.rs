//! API utilities for frontend-backend communication.
//!
//! All requests go through the helpers here so that authentication headers
//! and the error taxonomy stay uniform: a 401 always surfaces as
//! [`ApiError::Unauthorized`] and routes the user back to the login screen.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The session token was rejected; the caller must drop the session.
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests.
///
/// Constructed from the current window location, using port 5000 for the
/// backend server. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Http { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET without authentication.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// GET with a bearer token.
pub async fn get_json_auth<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a JSON body without authentication (login, register, resets).
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a JSON body with a bearer token.
pub async fn post_json_auth<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// PUT a JSON body with a bearer token.
pub async fn put_json_auth<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// DELETE with a bearer token, discarding any response body.
pub async fn delete_auth(path: &str, token: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Http { status, message });
    }
    Ok(())
}
