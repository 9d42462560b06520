use contracts::domain::forecast::{ForecastRequest, ForecastResponse};

use crate::shared::api::{post_json_auth, ApiError};

/// Run the prediction model for a set of project parameters. When the
/// request carries a `project_id` and `forecast_month`, the backend also
/// stores the result against that project month.
pub async fn run_forecast(
    token: &str,
    request: &ForecastRequest,
) -> Result<ForecastResponse, ApiError> {
    post_json_auth("/api/forecast", token, request).await
}
