//! Map page: projects positioned by the offline geocoder. Rendered as a
//! coordinate listing with status filtering; the marker data is exactly
//! what a tile layer would consume.

use contracts::domain::project::{Project, ProjectStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::projects::api::list_projects;
use crate::system::auth::context::{expire_on_unauthorized, use_auth};

use super::geocode::{resolve_coordinates, Coord};

#[derive(Clone, PartialEq)]
struct Marker {
    project_id: String,
    name: String,
    place: String,
    status: ProjectStatus,
    kind: String,
    coord: Coord,
}

fn marker_for(project: &Project) -> Marker {
    let coord = resolve_coordinates(
        project.state.as_deref(),
        project.city.as_deref(),
        &project.location,
    );
    let place = match (&project.city, &project.state) {
        (Some(city), Some(state)) => format!("{}, {}", city, state),
        _ => project.location.clone(),
    };
    Marker {
        project_id: project.project_id.clone(),
        name: project.name.clone(),
        place,
        status: project.status(),
        kind: project.kind().unwrap_or("Transmission Tower").to_string(),
        coord,
    }
}

#[component]
pub fn MapPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (status_filter, set_status_filter) = signal(String::from("ALL"));
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    Effect::new(move |_| {
        let Some(token) = auth_state.get().token else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match list_projects(&token).await {
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

    let markers = move || {
        let filter = status_filter.get();
        projects
            .get()
            .iter()
            .map(marker_for)
            .filter(|marker| filter == "ALL" || marker.status.label() == filter)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="map-page">
            <div class="page-header">
                <h2>"Project Map"</h2>
                <select on:change=move |ev| set_status_filter.set(event_target_value(&ev))>
                    <option value="ALL">"All statuses"</option>
                    <option value="PLANNED">"Planned"</option>
                    <option value="IN PROGRESS">"In Progress"</option>
                    <option value="COMPLETED">"Completed"</option>
                </select>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || is_loading.get() && projects.get().is_empty()>
                <div class="loading">"Loading map..."</div>
            </Show>

            <Show
                when=move || !markers().is_empty()
                fallback=|| view! { <p class="empty-hint">"No projects to place on the map."</p> }
            >
                <ul class="marker-list">
                    <For
                        each=markers
                        key=|marker| marker.project_id.clone()
                        children=|marker: Marker| {
                            view! {
                                <li class="marker-row">
                                    <span class="marker-row__name">{marker.name.clone()}</span>
                                    <span class="marker-row__place">{marker.place.clone()}</span>
                                    <span class="marker-row__kind">{marker.kind.clone()}</span>
                                    <span class="status-badge">{marker.status.label()}</span>
                                    <span class="marker-row__coord">
                                        {format!("{:.4}, {:.4}", marker.coord.0, marker.coord.1)}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
