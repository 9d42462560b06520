//! Dashboard feed endpoints.

use contracts::dashboards::dto::{
    AnalyticsOverview, DashboardMetrics, MaterialsByCategory, TrendPoint,
};
use contracts::domain::project::Project;

use crate::shared::api::{get_json_auth, ApiError};

pub async fn fetch_overview(token: &str) -> Result<AnalyticsOverview, ApiError> {
    get_json_auth("/api/analytics/overview", token).await
}

pub async fn fetch_metrics(token: &str) -> Result<DashboardMetrics, ApiError> {
    get_json_auth("/api/dashboard/metrics", token).await
}

pub async fn fetch_trends(token: &str) -> Result<Vec<TrendPoint>, ApiError> {
    get_json_auth("/api/dashboard/trends", token).await
}

pub async fn fetch_projects(token: &str) -> Result<Vec<Project>, ApiError> {
    get_json_auth("/api/projects", token).await
}

pub async fn fetch_materials(token: &str) -> Result<MaterialsByCategory, ApiError> {
    get_json_auth("/api/analytics/materials", token).await
}
