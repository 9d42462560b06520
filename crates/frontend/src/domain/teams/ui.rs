//! Teams page: membership listing, invitations and member removal.
//! Management actions only show for owners and admins.

use contracts::domain::team::{InviteRequest, Team, TeamMember};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (teams, set_teams) = signal(Vec::<Team>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);
    let (form_open, set_form_open) = signal(false);
    let (invite_target, set_invite_target) = signal(Option::<Team>::None);

    Effect::new(move |_| {
        reload_tick.track();
        let Some(token) = auth_state.get().token else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_teams(&token).await {
                Ok(list) => {
                    set_teams.set(list);
                    set_error_message.set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Could not load teams: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    });

    let current_username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_remove = move |team_id: String, username: String| {
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::remove_member(&token, &team_id, &username).await {
                Ok(()) => set_reload_tick.update(|n| *n += 1),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Remove failed: {}", e)));
                }
            }
        });
    };

    let on_delete_team = move |team_id: String| {
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::delete_team(&token, &team_id).await {
                Ok(()) => set_reload_tick.update(|n| *n += 1),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Delete failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="teams-page">
            <div class="page-header">
                <h2>"Teams"</h2>
                <button class="btn-primary" on:click=move |_| set_form_open.set(true)>
                    "New Team"
                </button>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || is_loading.get() && teams.get().is_empty()>
                <div class="loading">"Loading teams..."</div>
            </Show>

            <Show when=move || !is_loading.get() && teams.get().is_empty()>
                <p class="empty-hint">"You are not a member of any team yet."</p>
            </Show>

            <div class="team-cards">
                <For
                    each=move || teams.get()
                    key=|team| team.team_id.clone()
                    children=move |team: Team| {
                        let manageable = team.can_manage(&current_username());
                        let team_name = team.name.clone();
                        let invite_team = team.clone();
                        let delete_id = team.team_id.clone();
                        let member_team_id = team.team_id.clone();
                        view! {
                            <div class="team-card">
                                <div class="team-card__header">
                                    <h3>{team_name}</h3>
                                    <Show when=move || manageable>
                                        <div class="team-card__actions">
                                            <button
                                                class="btn-link"
                                                on:click={
                                                    let invite_team = invite_team.clone();
                                                    move |_| set_invite_target.set(Some(invite_team.clone()))
                                                }
                                            >
                                                "Invite"
                                            </button>
                                            <button
                                                class="btn-link btn-link--danger"
                                                on:click={
                                                    let delete_id = delete_id.clone();
                                                    move |_| on_delete_team(delete_id.clone())
                                                }
                                            >
                                                "Delete Team"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                                <ul class="team-card__members">
                                    <For
                                        each=move || team.members.clone()
                                        key=|member| member.username.clone()
                                        children=move |member: TeamMember| {
                                            let removable = manageable && member.role != "owner";
                                            let team_id = member_team_id.clone();
                                            let username = member.username.clone();
                                            view! {
                                                <li class="team-card__member">
                                                    <span>{member.username.clone()}</span>
                                                    <span class="team-card__role">{member.role.clone()}</span>
                                                    <Show when=move || removable>
                                                        <button
                                                            class="btn-link btn-link--danger"
                                                            on:click={
                                                                let team_id = team_id.clone();
                                                                let username = username.clone();
                                                                move |_| on_remove(team_id.clone(), username.clone())
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </Show>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || form_open.get()>
                <TeamForm on_close=set_form_open on_saved=set_reload_tick />
            </Show>

            {move || {
                invite_target
                    .get()
                    .map(|team| {
                        view! {
                            <InviteForm team=team on_close=set_invite_target on_saved=set_reload_tick />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn TeamForm(on_close: WriteSignal<bool>, on_saved: WriteSignal<u32>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() {
            set_error_message.set(Some("Team name is required".to_string()));
            return;
        }

        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::create_team(&token, &name.get_untracked(), &description.get_untracked())
                .await
            {
                Ok(_) => {
                    on_saved.update(|n| *n += 1);
                    on_close.set(false);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Create failed: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal__header">
                    <h3>"New Team"</h3>
                    <button class="btn-close" on:click=move |_| on_close.set(false)>
                        "\u{00D7}"
                    </button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Description"</label>
                        <input
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="modal__actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| on_close.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn InviteForm(
    team: Team,
    on_close: WriteSignal<Option<Team>>,
    on_saved: WriteSignal<u32>,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal("member".to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let team_id = team.team_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if email.get().trim().is_empty() {
            set_error_message.set(Some("Email is required".to_string()));
            return;
        }

        let invite = InviteRequest {
            email: email.get(),
            role: role.get(),
        };

        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        let team_id = team_id.clone();

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::invite_member(&token, &team_id, &invite).await {
                Ok(_) => {
                    on_saved.update(|n| *n += 1);
                    on_close.set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Invite failed: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal__header">
                    <h3>{format!("Invite to {}", team.name)}</h3>
                    <button class="btn-close" on:click=move |_| on_close.set(None)>
                        "\u{00D7}"
                    </button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Role"</label>
                        <select on:change=move |ev| set_role.set(event_target_value(&ev))>
                            <option value="member" selected=move || role.get() == "member">
                                "Member"
                            </option>
                            <option value="admin" selected=move || role.get() == "admin">
                                "Admin"
                            </option>
                        </select>
                    </div>

                    <div class="modal__actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| on_close.set(None)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Sending..." } else { "Send Invite" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
