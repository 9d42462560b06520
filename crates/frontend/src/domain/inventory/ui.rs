//! Warehouse inventory page. Quantities are derived from their components
//! (available + reserved + in transit); the edit form never lets the two
//! drift apart.

use contracts::domain::inventory::{InventoryItem, InventoryUpdate, StockStatus};
use contracts::shared::numeric::parse_quantity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (reload_tick, set_reload_tick) = signal(0u32);
    let (edit_target, set_edit_target) = signal(Option::<InventoryItem>::None);

    Effect::new(move |_| {
        reload_tick.track();
        let Some(token) = auth_state.get().token else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_inventory(&token).await {
                Ok(mut list) => {
                    // Stored quantities may predate a component edit.
                    for item in &mut list {
                        item.normalize();
                    }
                    set_items.set(list);
                    set_error_message.set(None);
                }
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Could not load inventory: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_initialize = move |_| {
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::initialize_inventory(&token).await {
                Ok(_) => set_reload_tick.update(|n| *n += 1),
                Err(e) => {
                    expire_on_unauthorized(set_auth_state, &e);
                    set_error_message.set(Some(format!("Initialize failed: {}", e)));
                }
            }
        });
    };

    let count_with = move |status: StockStatus| {
        items
            .get()
            .iter()
            .filter(|item| item.status() == status)
            .count()
    };

    view! {
        <div class="inventory-page">
            <div class="page-header">
                <h2>"Inventory"</h2>
                <Show when=move || !is_loading.get() && items.get().is_empty()>
                    <button class="btn-primary" on:click=on_initialize>
                        "Initialize Catalog"
                    </button>
                </Show>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <div class="metric-cards">
                <div class="metric-card">
                    <span class="metric-card__label">"Materials"</span>
                    <span class="metric-card__value">{move || items.get().len()}</span>
                </div>
                <div class="metric-card metric-card--danger">
                    <span class="metric-card__label">"Low Stock"</span>
                    <span class="metric-card__value">
                        {move || count_with(StockStatus::LowStock)}
                    </span>
                </div>
                <div class="metric-card metric-card--warning">
                    <span class="metric-card__label">"Overstock"</span>
                    <span class="metric-card__value">
                        {move || count_with(StockStatus::Overstock)}
                    </span>
                </div>
                <div class="metric-card metric-card--ok">
                    <span class="metric-card__label">"Healthy"</span>
                    <span class="metric-card__value">
                        {move || count_with(StockStatus::Healthy)}
                    </span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"In Transit"</span>
                    <span class="metric-card__value">
                        {move || {
                            format!(
                                "{:.0}",
                                items.get().iter().map(|item| item.in_transit).sum::<f64>(),
                            )
                        }}
                    </span>
                </div>
            </div>

            <Show when=move || is_loading.get() && items.get().is_empty()>
                <div class="loading">"Loading inventory..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Material"</th>
                        <th>"Category"</th>
                        <th>"Quantity"</th>
                        <th>"Available"</th>
                        <th>"Reserved"</th>
                        <th>"In Transit"</th>
                        <th>"Min / Max"</th>
                        <th>"Status"</th>
                        <th>"Warehouse"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|item| item.material_code.clone()
                        children=move |item: InventoryItem| {
                            let edit_item = item.clone();
                            let status = item.status();
                            let status_class = match status {
                                StockStatus::LowStock => "status-badge status-badge--danger",
                                StockStatus::Overstock => "status-badge status-badge--warning",
                                StockStatus::Healthy => "status-badge status-badge--ok",
                            };
                            view! {
                                <tr>
                                    <td>{format!("{} ({})", item.name, item.unit)}</td>
                                    <td>{item.category.clone()}</td>
                                    <td>{format!("{:.0}", item.quantity)}</td>
                                    <td>{format!("{:.0}", item.available)}</td>
                                    <td>{format!("{:.0}", item.reserved)}</td>
                                    <td>{format!("{:.0}", item.in_transit)}</td>
                                    <td>{format!("{:.0} / {:.0}", item.min_stock, item.max_stock)}</td>
                                    <td>
                                        <span class=status_class>{status.label()}</span>
                                    </td>
                                    <td>{item.warehouse.clone().unwrap_or_default()}</td>
                                    <td>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| set_edit_target.set(Some(edit_item.clone()))
                                        >
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                edit_target
                    .get()
                    .map(|item| {
                        view! {
                            <InventoryEditForm
                                item=item
                                on_close=set_edit_target
                                on_saved=set_reload_tick
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn InventoryEditForm(
    item: InventoryItem,
    on_close: WriteSignal<Option<InventoryItem>>,
    on_saved: WriteSignal<u32>,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (available, set_available) = signal(item.available.to_string());
    let (reserved, set_reserved) = signal(item.reserved.to_string());
    let (in_transit, set_in_transit) = signal(item.in_transit.to_string());
    let (min_stock, set_min_stock) = signal(item.min_stock.to_string());
    let (max_stock, set_max_stock) = signal(item.max_stock.to_string());
    let (warehouse, set_warehouse) = signal(item.warehouse.clone().unwrap_or_default());

    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let derived_quantity = move || {
        parse_quantity(&available.get())
            + parse_quantity(&reserved.get())
            + parse_quantity(&in_transit.get())
    };

    let live_status = move || {
        StockStatus::classify(
            derived_quantity(),
            parse_quantity(&min_stock.get()),
            parse_quantity(&max_stock.get()),
        )
    };

    let material_code = item.material_code.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let update = InventoryUpdate {
            quantity: derived_quantity(),
            min_stock: parse_quantity(&min_stock.get()),
            max_stock: parse_quantity(&max_stock.get()),
            available: parse_quantity(&available.get()),
            reserved: parse_quantity(&reserved.get()),
            in_transit: parse_quantity(&in_transit.get()),
            warehouse: {
                let w = warehouse.get();
                (!w.is_empty()).then_some(w)
            },
        };

        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };
        let material_code = material_code.clone();

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::update_item(&token, &material_code, &update).await {
                Ok(_) => {
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
                    <h3>{format!("Edit {}", item.name)}</h3>
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
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Available"</label>
                            <input
                                type="number"
                                prop:value=move || available.get()
                                on:input=move |ev| set_available.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Reserved"</label>
                            <input
                                type="number"
                                prop:value=move || reserved.get()
                                on:input=move |ev| set_reserved.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"In Transit"</label>
                            <input
                                type="number"
                                prop:value=move || in_transit.get()
                                on:input=move |ev| set_in_transit.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Min Stock"</label>
                            <input
                                type="number"
                                prop:value=move || min_stock.get()
                                on:input=move |ev| set_min_stock.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Max Stock"</label>
                            <input
                                type="number"
                                prop:value=move || max_stock.get()
                                on:input=move |ev| set_max_stock.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Warehouse"</label>
                            <input
                                type="text"
                                prop:value=move || warehouse.get()
                                on:input=move |ev| set_warehouse.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <p class="derived-quantity">
                        {move || {
                            format!(
                                "Total quantity: {:.0} ({})",
                                derived_quantity(),
                                live_status().label(),
                            )
                        }}
                    </p>

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
