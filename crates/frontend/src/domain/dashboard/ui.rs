//! Dashboard page: five independent feeds fanned out in parallel.
//!
//! The analytics overview is the one mandatory feed; if it fails the page
//! body is replaced by a retry affordance. Every other feed degrades to an
//! empty section on its own. A manual refresh keeps the stale data on
//! screen until its replacement arrives.

use contracts::dashboards::dto::{
    AnalyticsOverview, DashboardMetrics, MaterialsByCategory, TrendPoint,
};
use contracts::domain::forecast::format_material_name;
use contracts::domain::project::{Project, StatusCounts};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_date;
use crate::shared::format::{format_inr, format_signed, format_tons};
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::api;

const FEED_COUNT: u32 = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (overview, set_overview) = signal(Option::<AnalyticsOverview>::None);
    let (metrics, set_metrics) = signal(DashboardMetrics::default());
    let (trends, set_trends) = signal(Vec::<TrendPoint>::new());
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (materials, set_materials) = signal(MaterialsByCategory::new());
    let (pending, set_pending) = signal(0u32);
    let (overview_failed, set_overview_failed) = signal(false);
    let (loaded_once, set_loaded_once) = signal(false);

    let load = move || {
        let token = match auth_state.get_untracked().token {
            Some(token) => token,
            None => return,
        };

        set_pending.set(FEED_COUNT);
        set_overview_failed.set(false);

        let done = move || {
            set_pending.update(|n| *n = n.saturating_sub(1));
            if pending.get_untracked() == 0 {
                set_loaded_once.set(true);
            }
        };

        // Each feed is fetched independently; one slow or failing feed
        // never blocks the others.
        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_overview(&token).await {
                    Ok(data) => set_overview.set(Some(data)),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("analytics overview failed: {}", e);
                        set_overview_failed.set(true);
                    }
                }
                done();
            });
        }
        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_metrics(&token).await {
                    Ok(data) => set_metrics.set(data),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("dashboard metrics failed: {}", e);
                        if !loaded_once.get_untracked() {
                            set_metrics.set(DashboardMetrics::default());
                        }
                    }
                }
                done();
            });
        }
        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_trends(&token).await {
                    Ok(data) => set_trends.set(data),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("dashboard trends failed: {}", e);
                        if !loaded_once.get_untracked() {
                            set_trends.set(Vec::new());
                        }
                    }
                }
                done();
            });
        }
        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_projects(&token).await {
                    Ok(data) => set_projects.set(data),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("project list failed: {}", e);
                        if !loaded_once.get_untracked() {
                            set_projects.set(Vec::new());
                        }
                    }
                }
                done();
            });
        }
        {
            spawn_local(async move {
                match api::fetch_materials(&token).await {
                    Ok(data) => set_materials.set(data),
                    Err(e) => {
                        expire_on_unauthorized(set_auth_state, &e);
                        log::warn!("materials analytics failed: {}", e);
                        if !loaded_once.get_untracked() {
                            set_materials.set(MaterialsByCategory::new());
                        }
                    }
                }
                done();
            });
        }
    };

    Effect::new(move |_| {
        if auth_state.get().token.is_some() && !loaded_once.get_untracked() {
            load();
        }
    });

    let is_initial_loading = move || pending.get() > 0 && !loaded_once.get();
    let is_refreshing = move || pending.get() > 0 && loaded_once.get();

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <h2>"Dashboard"</h2>
                <button
                    class="btn-secondary"
                    disabled=move || { pending.get() > 0 }
                    on:click=move |_| load()
                >
                    {move || if is_refreshing() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <Show when=move || is_initial_loading()>
                <div class="loading">"Loading dashboard..."</div>
            </Show>

            <Show when=move || !is_initial_loading() && overview_failed.get()>
                <div class="error-panel">
                    <p>"Could not load the analytics overview."</p>
                    <button class="btn-primary" on:click=move |_| load()>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show when=move || !is_initial_loading() && !overview_failed.get()>
                <MetricCards metrics=metrics overview=overview />
                <TrendSection trends=trends />
                <div class="dashboard-columns">
                    <StatusSummary projects=projects />
                    <RecentProjects projects=projects />
                    <TopMaterials overview=overview materials=materials />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MetricCards(
    metrics: ReadSignal<DashboardMetrics>,
    overview: ReadSignal<Option<AnalyticsOverview>>,
) -> impl IntoView {
    let total_budget = move || {
        overview
            .get()
            .map(|o| format_inr(o.total_budget))
            .unwrap_or_else(|| "\u{2014}".to_string())
    };

    view! {
        <div class="metric-cards">
            <div class="metric-card">
                <span class="metric-card__label">"Total Projects"</span>
                <span class="metric-card__value">{move || metrics.get().total_projects}</span>
            </div>
            <div class="metric-card">
                <span class="metric-card__label">"Active Projects"</span>
                <span class="metric-card__value">{move || metrics.get().active_projects}</span>
            </div>
            <div class="metric-card">
                <span class="metric-card__label">"Forecast Accuracy"</span>
                <span class="metric-card__value">
                    {move || format!("{:.1}%", metrics.get().forecast_accuracy)}
                </span>
            </div>
            <div class="metric-card">
                <span class="metric-card__label">"Pending Orders"</span>
                <span class="metric-card__value">
                    {move || {
                        let m = metrics.get();
                        format!("{} / {}", m.pending_orders, m.total_orders)
                    }}
                </span>
            </div>
            <div class="metric-card">
                <span class="metric-card__label">"Total Budget"</span>
                <span class="metric-card__value">{total_budget}</span>
            </div>
        </div>
    }
}

#[component]
fn TrendSection(trends: ReadSignal<Vec<TrendPoint>>) -> impl IntoView {
    view! {
        <section class="trend-section">
            <h3>"Forecast vs Actual"</h3>
            <Show
                when=move || !trends.get().is_empty()
                fallback=|| view! { <p class="empty-hint">"No trend data yet."</p> }
            >
                <div class="trend-cards">
                    <For
                        each=move || trends.get()
                        key=|point| point.month.clone()
                        children=|point: TrendPoint| {
                            let forecast = if point.has_forecast() {
                                format_tons(point.forecast)
                            } else {
                                "no data".to_string()
                            };
                            let actual = if point.has_actual() {
                                format_tons(point.actual)
                            } else {
                                "no data".to_string()
                            };
                            // A variance between a real average and a missing one
                            // would be noise; only show it when both sides exist.
                            let variance = (point.has_forecast() && point.has_actual())
                                .then(|| format_signed(point.variance()));
                            view! {
                                <div class="trend-card">
                                    <span class="trend-card__month">{point.month.clone()}</span>
                                    <span class="trend-card__forecast">"Forecast: " {forecast}</span>
                                    <span class="trend-card__actual">"Actual: " {actual}</span>
                                    {variance
                                        .map(|v| {
                                            view! { <span class="trend-card__variance">"Variance: " {v}</span> }
                                        })}
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn StatusSummary(projects: ReadSignal<Vec<Project>>) -> impl IntoView {
    let counts = move || StatusCounts::tally(&projects.get());

    view! {
        <section class="status-summary">
            <h3>"Project Status"</h3>
            <ul>
                <li>"In Progress: " {move || counts().in_progress}</li>
                <li>"Completed: " {move || counts().completed}</li>
                <li>"Planned: " {move || counts().planned}</li>
                <Show when=move || counts().has_unknown()>
                    <li>"Other: " {move || counts().unknown}</li>
                </Show>
            </ul>
        </section>
    }
}

#[component]
fn RecentProjects(projects: ReadSignal<Vec<Project>>) -> impl IntoView {
    let recent = move || projects.get().into_iter().take(5).collect::<Vec<_>>();

    view! {
        <section class="recent-projects">
            <h3>"Recent Projects"</h3>
            <Show
                when=move || !recent().is_empty()
                fallback=|| view! { <p class="empty-hint">"No projects yet."</p> }
            >
                <ul>
                    <For
                        each=recent
                        key=|project| project.project_id.clone()
                        children=|project: Project| {
                            let started = project
                                .start_date
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_default();
                            view! {
                                <li class="recent-projects__row">
                                    <span>{project.name.clone()}</span>
                                    <span class="status-badge">{project.status().label()}</span>
                                    <span class="recent-projects__date">{started}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn TopMaterials(
    overview: ReadSignal<Option<AnalyticsOverview>>,
    materials: ReadSignal<MaterialsByCategory>,
) -> impl IntoView {
    // Largest material totals from the overview, prettified.
    let top = move || {
        let mut totals: Vec<(String, f64)> = overview
            .get()
            .map(|o| o.material_totals.into_iter().collect())
            .unwrap_or_default();
        totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        totals
            .into_iter()
            .take(5)
            .map(|(key, value)| (format_material_name(&key), value))
            .collect::<Vec<_>>()
    };

    let tracked_series = move || materials.get().len();

    view! {
        <section class="top-materials">
            <h3>"Top Materials"</h3>
            <Show
                when=move || !top().is_empty()
                fallback=|| view! { <p class="empty-hint">"No material data yet."</p> }
            >
                <ul>
                    <For
                        each=top
                        key=|(name, _)| name.clone()
                        children=|(name, value): (String, f64)| {
                            view! {
                                <li class="top-materials__row">
                                    <span>{name}</span>
                                    <span>{format!("{:.1}", value)}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <Show when=move || !materials.get().is_empty()>
                <p class="top-materials__footnote">
                    {move || format!("{} material series tracked", tracked_series())}
                </p>
            </Show>
        </section>
    }
}
