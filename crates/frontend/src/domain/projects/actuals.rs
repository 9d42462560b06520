//! Actual-consumption entry for a project month, reconciled live against
//! the stored forecast for that month.

use chrono::{NaiveDate, Utc};
use contracts::domain::forecast::{MonthlyForecast, TARGET_MATERIALS};
use contracts::domain::material_actual::MaterialActualPayload;
use contracts::domain::project::Project;
use contracts::shared::metrics::compute_metrics;
use contracts::shared::months::available_months;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::shared::format::format_signed;
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

fn entry_to_value(raw: &str) -> Value {
    match raw.trim().parse::<f64>() {
        Ok(number) => json!(number),
        // Keep the raw text; totals interpret it as zero either way.
        Err(_) => json!(raw),
    }
}

fn value_to_entry(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

#[component]
pub fn ActualsEditor(
    project: Project,
    on_close: WriteSignal<Option<Project>>,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let project_start = project
        .start_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
    let months = available_months(Utc::now().date_naive(), project_start);
    let initial_month = months
        .first()
        .map(|m| m.value.clone())
        .unwrap_or_default();

    let (selected_month, set_selected_month) = signal(initial_month);
    let (entries, set_entries) = signal(BTreeMap::<String, String>::new());
    let (forecasts, set_forecasts) = signal(Vec::<MonthlyForecast>::new());
    let (status_message, set_status_message) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let project_id = project.project_id.clone();

    // One forecast fetch covers every month; the selector just picks from it.
    {
        let project_id = project_id.clone();
        Effect::new(move |_| {
            let Some(token) = auth_state.get().token else {
                return;
            };
            let project_id = project_id.clone();
            spawn_local(async move {
                match api::list_forecasts(&token, &project_id).await {
                    Ok(list) => set_forecasts.set(list),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("forecast list failed: {}", e);
                    }
                }
            });
        });
    }

    // Pre-fill entries from any actuals already saved for the month.
    {
        let project_id = project_id.clone();
        Effect::new(move |_| {
            let month = selected_month.get();
            if month.is_empty() {
                return;
            }
            let Some(token) = auth_state.get_untracked().token else {
                return;
            };
            let project_id = project_id.clone();
            spawn_local(async move {
                match api::list_actuals(&token, &project_id, &month).await {
                    Ok(records) => {
                        let mut filled = BTreeMap::new();
                        if let Some(record) = records.first() {
                            for (key, value) in &record.material_values {
                                filled.insert(key.clone(), value_to_entry(value));
                            }
                        }
                        set_entries.set(filled);
                    }
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("actuals lookup failed: {}", e);
                        set_entries.set(BTreeMap::new());
                    }
                }
            });
        });
    }

    let forecast_values = move || {
        let month = selected_month.get();
        forecasts
            .get()
            .into_iter()
            .find(|f| f.forecast_month == month)
            .map(|f| f.predictions)
            .unwrap_or_default()
    };

    let material_values = move || {
        entries
            .get()
            .iter()
            .filter(|(_, raw)| !raw.trim().is_empty())
            .map(|(key, raw)| (key.clone(), entry_to_value(raw)))
            .collect::<BTreeMap<String, Value>>()
    };

    let metrics = move || compute_metrics(&material_values(), &forecast_values());

    let on_save = {
        let project_id = project_id.clone();
        move |_| {
            let month = selected_month.get();
            if month.is_empty() {
                return;
            }
            let token = match auth_state.get_untracked().token {
                Some(token) => token,
                None => return,
            };
            let username = auth_state
                .get_untracked()
                .user
                .map(|u| u.username)
                .unwrap_or_default();

            let (payload, _) = MaterialActualPayload::build(
                &project_id,
                &month,
                material_values(),
                &forecast_values(),
                &username,
                &Utc::now().to_rfc3339(),
            );

            set_is_saving.set(true);
            set_status_message.set(None);
            set_error_message.set(None);

            spawn_local(async move {
                match api::save_actuals(&token, &payload).await {
                    Ok(response) => set_status_message.set(Some(response.message)),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        set_error_message.set(Some(format!("Save failed: {}", e)));
                    }
                }
                set_is_saving.set(false);
            });
        }
    };

    let has_forecast = move || !forecast_values().is_empty();

    view! {
        <div class="modal-backdrop">
            <div class="modal modal--wide">
                <div class="modal__header">
                    <h3>{format!("Actual Values \u{2013} {}", project.name)}</h3>
                    <button class="btn-close" on:click=move |_| on_close.set(None)>
                        "\u{00D7}"
                    </button>
                </div>

                <div class="form-group">
                    <label>"Month"</label>
                    <select on:change=move |ev| set_selected_month.set(event_target_value(&ev))>
                        {months
                            .iter()
                            .map(|month| {
                                let value = month.value.clone();
                                let selected_value = month.value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || selected_month.get() == selected_value
                                    >
                                        {month.display.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <Show when=move || !has_forecast()>
                    <p class="empty-hint">
                        "No forecast stored for this month; accuracy will read 0 until one exists."
                    </p>
                </Show>

                <div class="actuals-grid">
                    {TARGET_MATERIALS
                        .iter()
                        .map(|spec| {
                            let key = spec.key;
                            view! {
                                <div class="form-group">
                                    <label>{spec.name}</label>
                                    <input
                                        type="text"
                                        prop:value=move || {
                                            entries.get().get(key).cloned().unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let raw = event_target_value(&ev);
                                            set_entries
                                                .update(|map| {
                                                    map.insert(key.to_string(), raw);
                                                });
                                        }
                                    />
                                    <Show when=move || {
                                        entries
                                            .get()
                                            .get(key)
                                            .map(|raw| {
                                                !raw.trim().is_empty()
                                                    && raw.trim().parse::<f64>().is_err()
                                            })
                                            .unwrap_or(false)
                                    }>
                                        <span class="input-hint">"interpreted as 0"</span>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="actuals-summary">
                    {move || {
                        let m = metrics();
                        view! {
                            <span>{format!("Actual total: {:.1}", m.total_actual)}</span>
                            <span>{format!("Forecast total: {:.1}", m.total_forecast)}</span>
                            <span>
                                {format!(
                                    "Accuracy: {:.1}% ({})",
                                    m.accuracy_percentage,
                                    m.rating.label(),
                                )}
                            </span>
                            <span>{format!("Variance: {}", format_signed(m.variance))}</span>
                        }
                    }}
                </div>

                <Show when=move || status_message.get().is_some()>
                    <div class="info-message">{move || status_message.get().unwrap_or_default()}</div>
                </Show>
                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
                </Show>

                <div class="modal__actions">
                    <button class="btn-secondary" on:click=move |_| on_close.set(None)>
                        "Close"
                    </button>
                    <button class="btn-primary" disabled=move || is_saving.get() on:click=on_save>
                        {move || if is_saving.get() { "Saving..." } else { "Save Actuals" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
