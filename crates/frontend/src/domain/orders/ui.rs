//! Purchase requests page: order list, status summary strip and a
//! create form. Pricing is server-side; the form only collects what to
//! order and from whom.

use contracts::domain::forecast::TARGET_MATERIALS;
use contracts::domain::order::{
    OrderInput, OrderSummary, PurchaseOrder, ORDER_STATUS_APPROVED, ORDER_STATUS_DELIVERED,
    ORDER_STATUS_PENDING,
};
use contracts::domain::project::Project;
use contracts::shared::numeric::parse_quantity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::projects::api::list_projects;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_inr;
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

const DEALER_OPTIONS: &[&str] = &[
    "Power Tech Solutions",
    "Grid Equipment Ltd",
    "Electrical Components Co",
];

#[component]
pub fn PurchaseRequestsPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (orders, set_orders) = signal(Vec::<PurchaseOrder>::new());
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);
    let (form_open, set_form_open) = signal(false);

    Effect::new(move |_| {
        reload_tick.track();
        let Some(token) = auth_state.get().token else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_orders(&token).await {
                Ok(list) => {
                    set_orders.set(list);
                    set_error_message.set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Could not load orders: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    });

    // Project names for the create form.
    Effect::new(move |_| {
        let Some(token) = auth_state.get().token else {
            return;
        };
        spawn_local(async move {
            match list_projects(&token).await {
                Ok(list) => set_projects.set(list),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    log::warn!("project list failed: {}", e);
                }
            }
        });
    });

    let summary = move || OrderSummary::tally(&orders.get());

    let advance_status = move |order: &PurchaseOrder| {
        let Some(order_id) = order.order_id.clone() else {
            return;
        };
        let next = match order.status.as_str() {
            ORDER_STATUS_PENDING => ORDER_STATUS_APPROVED,
            ORDER_STATUS_APPROVED => ORDER_STATUS_DELIVERED,
            _ => return,
        };
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::update_order_status(&token, &order_id, next).await {
                Ok(_) => set_reload_tick.update(|n| *n += 1),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Status update failed: {}", e)));
                }
            }
        });
    };

    let on_delete = move |order_id: String| {
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::delete_order(&token, &order_id).await {
                Ok(()) => set_reload_tick.update(|n| *n += 1),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Delete failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="orders-page">
            <div class="page-header">
                <h2>"Purchase Requests"</h2>
                <button class="btn-primary" on:click=move |_| set_form_open.set(true)>
                    "New Order"
                </button>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <div class="metric-cards">
                <div class="metric-card">
                    <span class="metric-card__label">"Pending"</span>
                    <span class="metric-card__value">{move || summary().pending}</span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Approved"</span>
                    <span class="metric-card__value">{move || summary().approved}</span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Delivered"</span>
                    <span class="metric-card__value">{move || summary().delivered}</span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Total Value"</span>
                    <span class="metric-card__value">
                        {move || format_inr(summary().total_value)}
                    </span>
                </div>
            </div>

            <Show when=move || is_loading.get() && orders.get().is_empty()>
                <div class="loading">"Loading orders..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Material"</th>
                        <th>"Quantity"</th>
                        <th>"Unit Price"</th>
                        <th>"Total"</th>
                        <th>"Dealer"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| order.order_id.clone().unwrap_or_default()
                        children=move |order: PurchaseOrder| {
                            let advance_target = order.clone();
                            let delete_id = order.order_id.clone();
                            let can_advance = matches!(
                                order.status.as_str(),
                                ORDER_STATUS_PENDING | ORDER_STATUS_APPROVED
                            );
                            let next_label = match order.status.as_str() {
                                ORDER_STATUS_PENDING => "Approve",
                                _ => "Mark Delivered",
                            };
                            let created = order
                                .created_at
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{order.order_id.clone().unwrap_or_default()}</td>
                                    <td>{order.material.clone()}</td>
                                    <td>{format!("{:.0}", order.quantity)}</td>
                                    <td>{format_inr(order.unit_price)}</td>
                                    <td>{format_inr(order.total_price())}</td>
                                    <td>{order.dealer.clone().unwrap_or_default()}</td>
                                    <td>
                                        <span class="status-badge">{order.status.clone()}</span>
                                    </td>
                                    <td>{created}</td>
                                    <td class="data-table__actions">
                                        <Show when=move || can_advance>
                                            <button
                                                class="btn-link"
                                                on:click={
                                                    let advance_target = advance_target.clone();
                                                    move |_| advance_status(&advance_target)
                                                }
                                            >
                                                {next_label}
                                            </button>
                                        </Show>
                                        {delete_id
                                            .clone()
                                            .map(|id| {
                                                view! {
                                                    <button
                                                        class="btn-link btn-link--danger"
                                                        on:click=move |_| on_delete(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || form_open.get()>
                <OrderForm projects=projects on_close=set_form_open on_saved=set_reload_tick />
            </Show>
        </div>
    }
}

#[component]
fn OrderForm(
    projects: ReadSignal<Vec<Project>>,
    on_close: WriteSignal<bool>,
    on_saved: WriteSignal<u32>,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (project_id, set_project_id) = signal(String::new());
    let (material, set_material) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (dealer, set_dealer) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if project_id.get().is_empty() || material.get().is_empty() {
            set_error_message.set(Some("Project and material are required".to_string()));
            return;
        }
        let quantity_value = parse_quantity(&quantity.get());
        if quantity_value <= 0.0 {
            set_error_message.set(Some("Quantity must be positive".to_string()));
            return;
        }

        let input = OrderInput {
            project_id: project_id.get(),
            material: material.get(),
            quantity: quantity_value,
            dealer: {
                let d = dealer.get();
                (!d.is_empty()).then_some(d)
            },
            status: ORDER_STATUS_PENDING.to_string(),
        };

        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::create_order(&token, &input).await {
                Ok(_) => {
                    on_saved.update(|n| *n += 1);
                    on_close.set(false);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Order failed: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal__header">
                    <h3>"New Purchase Request"</h3>
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
                        <label>"Project"</label>
                        <select on:change=move |ev| set_project_id.set(event_target_value(&ev))>
                            <option value="">"Select a project"</option>
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
                    <div class="form-group">
                        <label>"Material"</label>
                        <select on:change=move |ev| set_material.set(event_target_value(&ev))>
                            <option value="">"Select a material"</option>
                            {TARGET_MATERIALS
                                .iter()
                                .map(|spec| {
                                    view! { <option value=spec.name>{spec.name}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Quantity"</label>
                        <input
                            type="number"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Dealer"</label>
                        <select on:change=move |ev| set_dealer.set(event_target_value(&ev))>
                            <option value="">"(any)"</option>
                            {DEALER_OPTIONS
                                .iter()
                                .map(|&option| view! { <option value=option>{option}</option> })
                                .collect_view()}
                        </select>
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
                            {move || if is_saving.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
