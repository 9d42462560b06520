use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiError;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Auth context provider component. Restores the session from localStorage
/// on mount by validating the token against `/api/me`.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_token() {
                match api::get_current_user(&token).await {
                    Ok(user) => {
                        set_auth_state.set(AuthState {
                            token: Some(token),
                            user: Some(user),
                        });
                    }
                    Err(_) => {
                        // Token invalid or backend unreachable with a 401.
                        storage::clear_session();
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Establish a session after a successful login or registration.
pub fn start_session(
    set_auth_state: WriteSignal<AuthState>,
    token: String,
    user: UserInfo,
) {
    storage::save_token(&token);
    storage::save_username(&user.username);
    set_auth_state.set(AuthState {
        token: Some(token),
        user: Some(user),
    });
}

/// Drop the session (logout button or a rejected token).
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

/// Uniform 401 handling: any protected call that comes back Unauthorized
/// drops the session, which routes the user back to the login screen.
pub fn expire_on_unauthorized(set_auth_state: WriteSignal<AuthState>, error: &ApiError) {
    if matches!(error, ApiError::Unauthorized) {
        log::warn!("session token rejected, signing out");
        end_session(set_auth_state);
    }
}
