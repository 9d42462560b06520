use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (tab, set_tab) = signal(AuthTab::Login);

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"GridCast"</h1>
                <p class="login-tagline">"Materials forecasting for power-grid projects"</p>

                <div class="login-tabs">
                    <button
                        class=move || if tab.get() == AuthTab::Login { "tab tab--active" } else { "tab" }
                        on:click=move |_| set_tab.set(AuthTab::Login)
                    >
                        "Sign in"
                    </button>
                    <button
                        class=move || if tab.get() == AuthTab::Register { "tab tab--active" } else { "tab" }
                        on:click=move |_| set_tab.set(AuthTab::Register)
                    >
                        "Register"
                    </button>
                </div>

                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginForm on_forgot=set_tab /> }.into_any(),
                    AuthTab::Register => view! { <RegisterForm /> }.into_any(),
                    AuthTab::ForgotPassword => view! { <ForgotPasswordForm on_back=set_tab /> }.into_any(),
                    AuthTab::ResetPassword => view! { <ResetPasswordForm on_back=set_tab /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(on_forgot: WriteSignal<AuthTab>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = context::use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        if username_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Username and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    context::start_session(set_auth_state, response.access_token, response.user);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="form-group">
                <label for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
            </button>

            <button
                type="button"
                class="btn-link"
                on:click=move |_| on_forgot.set(AuthTab::ForgotPassword)
            >
                "Forgot password?"
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = context::use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if username.get().trim().is_empty() || email.get().trim().is_empty() {
            set_error_message.set(Some("All fields are required".to_string()));
            return;
        }
        // Validation failures never send a request.
        if password.get() != confirm.get() {
            set_error_message.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let username_val = username.get();
        let email_val = email.get();
        let password_val = password.get();

        spawn_local(async move {
            match api::register(username_val, email_val, password_val).await {
                Ok(response) => {
                    context::start_session(set_auth_state, response.access_token, response.user);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Registration failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="form-group">
                <label for="reg-username">"Username"</label>
                <input
                    type="text"
                    id="reg-username"
                    value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="reg-email">"Email"</label>
                <input
                    type="email"
                    id="reg-email"
                    value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="reg-password">"Password"</label>
                <input
                    type="password"
                    id="reg-password"
                    value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="reg-confirm">"Confirm password"</label>
                <input
                    type="password"
                    id="reg-confirm"
                    value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    required
                />
            </div>

            <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Creating account..." } else { "Create account" }}
            </button>
        </form>
    }
}

#[component]
fn ForgotPasswordForm(on_back: WriteSignal<AuthTab>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        if email_val.trim().is_empty() {
            set_error_message.set(Some("Email is required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::forgot_password(email_val).await {
                Ok(response) => {
                    set_message.set(Some(response.message));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Request failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <Show when=move || message.get().is_some()>
                <div class="info-message">{move || message.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="form-group">
                <label for="forgot-email">"Email"</label>
                <input
                    type="email"
                    id="forgot-email"
                    value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
            </div>

            <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Sending..." } else { "Send reset link" }}
            </button>

            <button
                type="button"
                class="btn-link"
                on:click=move |_| on_back.set(AuthTab::ResetPassword)
            >
                "Have a reset token?"
            </button>

            <button type="button" class="btn-link" on:click=move |_| on_back.set(AuthTab::Login)>
                "Back to sign in"
            </button>
        </form>
    }
}

#[component]
fn ResetPasswordForm(on_back: WriteSignal<AuthTab>) -> impl IntoView {
    let (token, set_token) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (message, set_message) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if token.get().trim().is_empty() {
            set_error_message.set(Some("Reset token is required".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            set_error_message.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let token_val = token.get();
        let password_val = password.get();

        spawn_local(async move {
            match api::reset_password(token_val, password_val).await {
                Ok(response) => {
                    set_message.set(Some(response.message));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Reset failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <Show when=move || message.get().is_some()>
                <div class="info-message">{move || message.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="form-group">
                <label for="reset-token">"Reset token"</label>
                <input
                    type="text"
                    id="reset-token"
                    value=move || token.get()
                    on:input=move |ev| set_token.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="reset-password">"New password"</label>
                <input
                    type="password"
                    id="reset-password"
                    value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="reset-confirm">"Confirm password"</label>
                <input
                    type="password"
                    id="reset-confirm"
                    value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    required
                />
            </div>

            <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Resetting..." } else { "Reset password" }}
            </button>

            <button type="button" class="btn-link" on:click=move |_| on_back.set(AuthTab::Login)>
                "Back to sign in"
            </button>
        </form>
    }
}
