//! Forecasting page: project parameters in, per-material predictions out.

use chrono::Utc;
use contracts::domain::forecast::{
    format_material_name, unit_for_key, ForecastRequest, MaterialUnit, LOCATION_OPTIONS,
    RISK_OPTIONS, SUBSTATION_TYPE_OPTIONS, TARGET_MATERIALS, TOWER_TYPE_OPTIONS,
};
use contracts::domain::project::Project;
use contracts::shared::months::available_months;
use contracts::shared::numeric::{numeric, parse_quantity, sum_numeric};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::dashboard::api::fetch_projects;
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

#[component]
pub fn ForecastingPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let defaults = ForecastRequest::default();
    let (location, set_location) = signal(defaults.project_location.clone());
    let (tower_type, set_tower_type) = signal(defaults.tower_type.clone());
    let (substation_type, set_substation_type) = signal(defaults.substation_type.clone());
    let (risk, set_risk) = signal(defaults.region_risk_flag.clone());
    let (budget, set_budget) = signal(defaults.budget.to_string());
    let (size_km, set_size_km) = signal(defaults.project_size_km.to_string());

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (project_id, set_project_id) = signal(String::new());
    let (forecast_month, set_forecast_month) = signal(String::new());

    let (predictions, set_predictions) = signal(Option::<BTreeMap<String, Value>>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // Project list for the optional save-to-project selection.
    Effect::new(move |_| {
        let Some(token) = auth_state.get().token else {
            return;
        };
        spawn_local(async move {
            match fetch_projects(&token).await {
                Ok(list) => set_projects.set(list),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    log::warn!("project list failed: {}", e);
                }
            }
        });
    });

    // Month options follow the selected project's start date.
    let month_options = move || {
        let selected = project_id.get();
        let start = projects.get().into_iter().find_map(|p| {
            if p.project_id == selected {
                p.start_date
                    .as_deref()
                    .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            } else {
                None
            }
        });
        available_months(Utc::now().date_naive(), start)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = ForecastRequest {
            project_location: location.get(),
            tower_type: tower_type.get(),
            substation_type: substation_type.get(),
            region_risk_flag: risk.get(),
            budget: parse_quantity(&budget.get()),
            project_size_km: parse_quantity(&size_km.get()),
            project_id: {
                let id = project_id.get();
                (!id.is_empty()).then_some(id)
            },
            forecast_month: {
                let month = forecast_month.get();
                (!month.is_empty()).then_some(month)
            },
        };

        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::run_forecast(&token, &request).await {
                Ok(response) => {
                    set_predictions.set(Some(response.predictions));
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Forecast failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="forecasting-page">
            <div class="page-header">
                <h2>"Materials Forecasting"</h2>
            </div>

            <form class="forecast-form" on:submit=on_submit>
                <div class="form-row">
                    <OptionSelect
                        label="Region"
                        options=LOCATION_OPTIONS
                        value=location
                        set_value=set_location
                    />
                    <OptionSelect
                        label="Tower Type"
                        options=TOWER_TYPE_OPTIONS
                        value=tower_type
                        set_value=set_tower_type
                    />
                    <OptionSelect
                        label="Substation Type"
                        options=SUBSTATION_TYPE_OPTIONS
                        value=substation_type
                        set_value=set_substation_type
                    />
                    <OptionSelect
                        label="Region Risk"
                        options=RISK_OPTIONS
                        value=risk
                        set_value=set_risk
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Budget (INR)"</label>
                        <input
                            type="number"
                            min="1000000"
                            max="500000000"
                            value=move || budget.get()
                            on:input=move |ev| set_budget.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Project Size (km)"</label>
                        <input
                            type="number"
                            min="10"
                            max="500"
                            value=move || size_km.get()
                            on:input=move |ev| set_size_km.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Save to Project"</label>
                        <select on:change=move |ev| set_project_id.set(event_target_value(&ev))>
                            <option value="">"(do not save)"</option>
                            <For
                                each=move || projects.get()
                                key=|project| project.project_id.clone()
                                children=|project: Project| {
                                    view! {
                                        <option value=project.project_id.clone()>
                                            {project.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <Show when=move || !project_id.get().is_empty()>
                        <div class="form-group">
                            <label>"Forecast Month"</label>
                            <select on:change=move |ev| set_forecast_month.set(event_target_value(&ev))>
                                <option value="">"(current month)"</option>
                                {move || {
                                    month_options()
                                        .into_iter()
                                        .map(|month| {
                                            view! {
                                                <option value=month.value.clone()>{month.display.clone()}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                    </Show>
                </div>

                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Running model..." } else { "Run Forecast" }}
                </button>
            </form>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || predictions.get().is_some()>
                <PredictionGrid predictions=predictions />
            </Show>
        </div>
    }
}

#[component]
fn OptionSelect(
    label: &'static str,
    options: &'static [&'static str],
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select on:change=move |ev| set_value.set(event_target_value(&ev))>
                {options
                    .iter()
                    .map(|&option| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn PredictionGrid(predictions: ReadSignal<Option<BTreeMap<String, Value>>>) -> impl IntoView {
    // Catalog materials first in their fixed order, then any extra keys the
    // model returned, prettified on the fly.
    let rows = move || {
        let values = predictions.get().unwrap_or_default();
        let mut rows: Vec<(String, String)> = Vec::new();
        for spec in TARGET_MATERIALS {
            if let Some(value) = values.get(spec.key) {
                rows.push((spec.name.to_string(), spec.format_value(numeric(value))));
            }
        }
        for (key, value) in &values {
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

    let total = move || {
        predictions
            .get()
            .map(|values| sum_numeric(&values))
            .unwrap_or(0.0)
    };

    view! {
        <section class="prediction-grid">
            <h3>"Predicted Material Requirements"</h3>
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
            <p class="prediction-total">
                {move || format!("Combined predicted quantity: {:.1}", total())}
            </p>
        </section>
    }
}
