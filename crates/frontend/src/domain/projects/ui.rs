//! Project management page: CRUD, stored-forecast viewer and the
//! actual-values editor.

use contracts::domain::forecast::{
    format_material_name, unit_for_key, MaterialUnit, MonthlyForecast, SUBSTATION_TYPE_OPTIONS,
    TARGET_MATERIALS, TOWER_TYPE_OPTIONS,
};
use contracts::domain::project::{Project, ProjectInput, ProjectStatus};
use contracts::shared::numeric::{numeric, parse_quantity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_date;
use crate::shared::format::format_inr;
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::actuals::ActualsEditor;
use super::api;

const STATUS_OPTIONS: &[&str] = &["PLANNED", "IN PROGRESS", "COMPLETED"];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);

    // None = closed, Some(None) = create, Some(Some(p)) = edit.
    let (form_target, set_form_target) = signal(Option::<Option<Project>>::None);
    let (viewer_target, set_viewer_target) = signal(Option::<Project>::None);
    let (actuals_target, set_actuals_target) = signal(Option::<Project>::None);

    Effect::new(move |_| {
        reload_tick.track();
        let Some(token) = auth_state.get().token else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_projects(&token).await {
                Ok(list) => {
                    set_projects.set(list);
                    set_error_message.set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Could not load projects: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_delete = move |project_id: String| {
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::delete_project(&token, &project_id).await {
                Ok(()) => set_reload_tick.update(|n| *n += 1),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Delete failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="projects-page">
            <div class="page-header">
                <h2>"Projects"</h2>
                <button class="btn-primary" on:click=move |_| set_form_target.set(Some(None))>
                    "New Project"
                </button>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || is_loading.get() && projects.get().is_empty()>
                <div class="loading">"Loading projects..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Location"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th>"Start"</th>
                        <th>"Budget"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || projects.get()
                        key=|project| project.project_id.clone()
                        children=move |project: Project| {
                            let edit_target = project.clone();
                            let viewer = project.clone();
                            let actuals = project.clone();
                            let delete_id = project.project_id.clone();
                            let budget = project
                                .cost
                                .map(format_inr)
                                .unwrap_or_else(|| "\u{2014}".to_string());
                            let started = project
                                .start_date
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{project.name.clone()}</td>
                                    <td>{project.location.clone()}</td>
                                    <td>{project.kind().unwrap_or("\u{2014}").to_string()}</td>
                                    <td>
                                        <span class="status-badge">{project.status().label()}</span>
                                    </td>
                                    <td>{started}</td>
                                    <td>{budget}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class="btn-link"
                                            on:click=move |_| set_viewer_target.set(Some(viewer.clone()))
                                        >
                                            "Forecasts"
                                        </button>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| set_actuals_target.set(Some(actuals.clone()))
                                        >
                                            "Actuals"
                                        </button>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| {
                                                set_form_target.set(Some(Some(edit_target.clone())))
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn-link btn-link--danger"
                                            on:click=move |_| on_delete(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                form_target
                    .get()
                    .map(|existing| {
                        view! {
                            <ProjectForm
                                existing=existing
                                on_close=set_form_target
                                on_saved=set_reload_tick
                            />
                        }
                    })
            }}

            {move || {
                viewer_target
                    .get()
                    .map(|project| view! { <ForecastViewer project=project on_close=set_viewer_target /> })
            }}

            {move || {
                actuals_target
                    .get()
                    .map(|project| view! { <ActualsEditor project=project on_close=set_actuals_target /> })
            }}
        </div>
    }
}

#[component]
fn ProjectForm(
    existing: Option<Project>,
    on_close: WriteSignal<Option<Option<Project>>>,
    on_saved: WriteSignal<u32>,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let editing_id = existing.as_ref().map(|p| p.project_id.clone());
    let title = if editing_id.is_some() {
        "Edit Project"
    } else {
        "New Project"
    };

    let initial = existing.unwrap_or(Project {
        project_id: String::new(),
        name: String::new(),
        location: String::new(),
        state: None,
        city: None,
        status: "PLANNED".to_string(),
        start_date: None,
        end_date: None,
        cost: None,
        project_size_km: None,
        tower_type: None,
        substation_type: None,
        created_by: None,
        created_at: None,
    });

    let (name, set_name) = signal(initial.name.clone());
    let (location, set_location) = signal(initial.location.clone());
    let (state, set_state) = signal(initial.state.clone().unwrap_or_default());
    let (city, set_city) = signal(initial.city.clone().unwrap_or_default());
    let (status, set_status) = signal(initial.status.clone());
    let (start_date, set_start_date) = signal(initial.start_date.clone().unwrap_or_default());
    let (end_date, set_end_date) = signal(initial.end_date.clone().unwrap_or_default());
    let (cost, set_cost) = signal(
        initial
            .cost
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );
    let (size_km, set_size_km) = signal(
        initial
            .project_size_km
            .map(|s| s.to_string())
            .unwrap_or_default(),
    );
    let (tower_type, set_tower_type) = signal(initial.tower_type.clone().unwrap_or_default());
    let (substation_type, set_substation_type) =
        signal(initial.substation_type.clone().unwrap_or_default());

    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() || start_date.get().is_empty() {
            set_error_message.set(Some("Name and start date are required".to_string()));
            return;
        }

        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        let input = ProjectInput {
            name: name.get(),
            location: location.get(),
            state: non_empty(state.get()),
            city: non_empty(city.get()),
            status: status.get(),
            start_date: start_date.get(),
            end_date: non_empty(end_date.get()),
            cost: non_empty(cost.get()).map(|c| parse_quantity(&c)),
            project_size_km: non_empty(size_km.get()).map(|s| parse_quantity(&s)),
            tower_type: non_empty(tower_type.get()),
            substation_type: non_empty(substation_type.get()),
            description: None,
        };

        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        let editing_id = editing_id.clone();

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_project(&token, &id, &input).await.map(|_| ()),
                None => api::create_project(&token, &input).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    on_saved.update(|n| *n += 1);
                    on_close.set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Save failed: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal__header">
                    <h3>{title}</h3>
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
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Location"</label>
                            <input
                                type="text"
                                prop:value=move || location.get()
                                on:input=move |ev| set_location.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"State"</label>
                            <input
                                type="text"
                                prop:value=move || state.get()
                                on:input=move |ev| set_state.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"City"</label>
                            <input
                                type="text"
                                prop:value=move || city.get()
                                on:input=move |ev| set_city.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Status"</label>
                            <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                                {STATUS_OPTIONS
                                    .iter()
                                    .map(|&option| {
                                        view! {
                                            <option value=option selected=move || status.get() == option>
                                                {ProjectStatus::parse(option).label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Start Date"</label>
                            <input
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| set_start_date.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label>"End Date"</label>
                            <input
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| set_end_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Budget (INR)"</label>
                            <input
                                type="number"
                                prop:value=move || cost.get()
                                on:input=move |ev| set_cost.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Size (km)"</label>
                            <input
                                type="number"
                                prop:value=move || size_km.get()
                                on:input=move |ev| set_size_km.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Tower Type"</label>
                            <select on:change=move |ev| set_tower_type.set(event_target_value(&ev))>
                                <option value="">"(none)"</option>
                                {TOWER_TYPE_OPTIONS
                                    .iter()
                                    .map(|&option| {
                                        view! {
                                            <option
                                                value=option
                                                selected=move || tower_type.get() == option
                                            >
                                                {option}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Substation Type"</label>
                            <select on:change=move |ev| {
                                set_substation_type.set(event_target_value(&ev))
                            }>
                                <option value="">"(none)"</option>
                                {SUBSTATION_TYPE_OPTIONS
                                    .iter()
                                    .map(|&option| {
                                        view! {
                                            <option
                                                value=option
                                                selected=move || substation_type.get() == option
                                            >
                                                {option}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
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
                            {move || if is_saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ForecastViewer(project: Project, on_close: WriteSignal<Option<Project>>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (forecasts, set_forecasts) = signal(Vec::<MonthlyForecast>::new());
    let (selected_month, set_selected_month) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let project_id = project.project_id.clone();
    Effect::new(move |_| {
        let Some(token) = auth_state.get().token else {
            return;
        };
        let project_id = project_id.clone();
        spawn_local(async move {
            match api::list_forecasts(&token, &project_id).await {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        set_selected_month.set(first.forecast_month.clone());
                    }
                    set_forecasts.set(list);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Could not load forecasts: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    });

    let selected = move || {
        let month = selected_month.get();
        forecasts
            .get()
            .into_iter()
            .find(|f| f.forecast_month == month)
    };

    let rows = move || {
        let Some(forecast) = selected() else {
            return Vec::new();
        };
        let mut rows: Vec<(String, String)> = Vec::new();
        for spec in TARGET_MATERIALS {
            if let Some(value) = forecast.predictions.get(spec.key) {
                rows.push((spec.name.to_string(), spec.format_value(numeric(value))));
            }
        }
        for (key, value) in &forecast.predictions {
            if TARGET_MATERIALS.iter().any(|spec| spec.key == key.as_str()) {
                continue;
            }
            let amount = numeric(value);
            let formatted = match unit_for_key(key) {
                Some(MaterialUnit::Tons) => format!("{:.2} tons", amount),
                Some(MaterialUnit::Units) => format!("{} units", amount.round() as i64),
                None => format!("{:.2}", amount),
            };
            rows.push((format_material_name(key), formatted));
        }
        rows
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal--wide">
                <div class="modal__header">
                    <h3>{format!("Forecasts \u{2013} {}", project.name)}</h3>
                    <button class="btn-close" on:click=move |_| on_close.set(None)>
                        "\u{00D7}"
                    </button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show when=move || is_loading.get()>
                    <div class="loading">"Loading forecasts..."</div>
                </Show>

                <Show when=move || !is_loading.get() && forecasts.get().is_empty()>
                    <p class="empty-hint">"No forecasts stored for this project yet."</p>
                </Show>

                <Show when=move || !forecasts.get().is_empty()>
                    <div class="form-group">
                        <label>"Month"</label>
                        <select on:change=move |ev| set_selected_month.set(event_target_value(&ev))>
                            <For
                                each=move || forecasts.get()
                                key=|forecast| forecast.forecast_month.clone()
                                children=move |forecast: MonthlyForecast| {
                                    let value = forecast.forecast_month.clone();
                                    let selected_value = forecast.forecast_month.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || selected_month.get() == selected_value
                                        >
                                            {forecast.forecast_month.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="prediction-cards">
                        <For
                            each=rows
                            key=|(name, _)| name.clone()
                            children=|(name, formatted): (String, String)| {
                                view! {
                                    <div class="prediction-card">
                                        <span class="prediction-card__name">{name}</span>
                                        <span class="prediction-card__value">{formatted}</span>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                <div class="modal__actions">
                    <button class="btn-secondary" on:click=move |_| on_close.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
