use leptos::prelude::*;

use crate::routes::Page;
use crate::system::auth::context::{end_session, use_auth};

#[component]
pub fn Navigation() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let page = use_context::<ReadSignal<Page>>().expect("page signal not provided");
    let set_page = use_context::<WriteSignal<Page>>().expect("page signal not provided");

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <nav class="top-nav">
            <div class="top-nav__brand">"GridCast"</div>
            <div class="top-nav__links">
                {Page::ALL
                    .iter()
                    .map(|&target| {
                        view! {
                            <button
                                class=move || {
                                    if page.get() == target { "nav-link nav-link--active" } else { "nav-link" }
                                }
                                on:click=move |_| set_page.set(target)
                            >
                                {target.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="top-nav__user">
                <span class="top-nav__username">{username}</span>
                <button class="nav-link" on:click=move |_| end_session(set_auth_state)>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
