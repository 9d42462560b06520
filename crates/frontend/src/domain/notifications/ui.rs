//! Notifications page with a 30 second background poll. The poll loop is a
//! plain async loop gated on an `active` flag that `on_cleanup` flips off
//! when the page unmounts.

use chrono::Utc;
use contracts::domain::notification::{unread_count, Notification};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::relative_time;
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

const POLL_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (notifications, set_notifications) = signal(Vec::<Notification>::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (active, set_active) = signal(true);
    let (polling, set_polling) = signal(false);

    on_cleanup(move || set_active.set(false));

    let refresh = move || {
        let Some(token) = auth_state.get_untracked().token else {
            return;
        };
        spawn_local(async move {
            // A poll can complete after the page unmounted; writes must not
            // touch disposed signals.
            match api::list_notifications(&token).await {
                Ok(list) => {
                    let _ = set_notifications.try_set(list);
                    let _ = set_error_message.try_set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    let _ = set_error_message
                        .try_set(Some(format!("Could not load notifications: {}", e)));
                }
            }
        });
    };

    // Immediate load, then a poll every 30 seconds while mounted. The effect
    // re-runs on any auth-state write; `polling` keeps that from stacking a
    // second loop on top of the first.
    Effect::new(move |_| {
        if auth_state.get().token.is_none() {
            return;
        }
        refresh();
        if polling.get_untracked() {
            return;
        }
        set_polling.set(true);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if active.try_get_untracked() != Some(true) {
                    break;
                }
                refresh();
            }
            let _ = set_polling.try_set(false);
        });
    });

    let on_mark_read = move |notification_id: String| {
        if notification_id.is_empty() {
            return;
        }
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::mark_read(&token, &notification_id).await {
                Ok(_) => {
                    set_notifications.update(|list| {
                        for n in list.iter_mut() {
                            if n.id == notification_id {
                                n.read = true;
                            }
                        }
                    });
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Update failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="notifications-page">
            <div class="page-header">
                <h2>
                    "Notifications"
                    {move || {
                        let unread = unread_count(&notifications.get());
                        (unread > 0)
                            .then(|| view! { <span class="unread-badge">{unread}</span> })
                    }}
                </h2>
                <button class="btn-secondary" on:click=move |_| refresh()>
                    "Refresh"
                </button>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !notifications.get().is_empty()
                fallback=|| view! { <p class="empty-hint">"No notifications."</p> }
            >
                <ul class="notification-list">
                    <For
                        each=move || notifications.get()
                        key=|n| (n.id.clone(), n.read)
                        children=move |notification: Notification| {
                            let id = notification.id.clone();
                            let markable = !notification.read && !notification.id.is_empty();
                            let when = notification
                                .created_at
                                .as_deref()
                                .map(|d| relative_time(d, Utc::now()))
                                .unwrap_or_default();
                            let row_class = if notification.read {
                                "notification-row notification-row--read"
                            } else {
                                "notification-row"
                            };
                            view! {
                                <li
                                    class=row_class
                                    on:click=move |_| {
                                        if markable {
                                            on_mark_read(id.clone())
                                        }
                                    }
                                >
                                    <span class="notification-row__icon">{notification.icon()}</span>
                                    <span class="notification-row__message">
                                        {notification.message.clone()}
                                    </span>
                                    <span class="notification-row__time">{when}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
