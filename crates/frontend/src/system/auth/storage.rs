//! Persisted session state. The login/logout flow is the single writer;
//! everything else only reads the token for request headers.

use web_sys::window;

const TOKEN_KEY: &str = "gridcast_token";
const USERNAME_KEY: &str = "gridcast_username";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn save_username(username: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USERNAME_KEY, username);
    }
}

/// Clear the persisted session (logout or rejected token).
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
