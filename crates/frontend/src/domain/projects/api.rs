//! Project CRUD plus the per-project forecast and actuals records.

use contracts::domain::forecast::MonthlyForecast;
use contracts::domain::material_actual::{MaterialActual, MaterialActualPayload};
use contracts::domain::project::{Project, ProjectInput};
use contracts::system::auth::MessageResponse;

use crate::shared::api::{delete_auth, get_json_auth, post_json_auth, put_json_auth, ApiError};

pub async fn list_projects(token: &str) -> Result<Vec<Project>, ApiError> {
    get_json_auth("/api/projects", token).await
}

pub async fn create_project(token: &str, input: &ProjectInput) -> Result<Project, ApiError> {
    post_json_auth("/api/projects", token, input).await
}

pub async fn update_project(
    token: &str,
    project_id: &str,
    input: &ProjectInput,
) -> Result<MessageResponse, ApiError> {
    let path = format!("/api/projects/{}", urlencoding::encode(project_id));
    put_json_auth(&path, token, input).await
}

pub async fn delete_project(token: &str, project_id: &str) -> Result<(), ApiError> {
    let path = format!("/api/projects/{}", urlencoding::encode(project_id));
    delete_auth(&path, token).await
}

/// All stored forecasts for a project, newest month first.
pub async fn list_forecasts(
    token: &str,
    project_id: &str,
) -> Result<Vec<MonthlyForecast>, ApiError> {
    let path = format!("/api/projects/{}/forecasts", urlencoding::encode(project_id));
    get_json_auth(&path, token).await
}

/// Stored actuals, filterable by project and month.
pub async fn list_actuals(
    token: &str,
    project_id: &str,
    month: &str,
) -> Result<Vec<MaterialActual>, ApiError> {
    let path = format!(
        "/api/material-actuals?project_id={}&month={}",
        urlencoding::encode(project_id),
        urlencoding::encode(month)
    );
    get_json_auth(&path, token).await
}

/// Upsert the actuals for a (project, month); repeated saves overwrite.
pub async fn save_actuals(
    token: &str,
    payload: &MaterialActualPayload,
) -> Result<MessageResponse, ApiError> {
    post_json_auth("/api/material-actuals", token, payload).await
}
