use contracts::domain::team::{InviteRequest, Team};
use contracts::system::auth::MessageResponse;
use serde::Serialize;

use crate::shared::api::{delete_auth, get_json_auth, post_json_auth, ApiError};

#[derive(Serialize)]
struct CreateTeam<'a> {
    name: &'a str,
    description: &'a str,
}

/// Teams the current user belongs to.
pub async fn list_teams(token: &str) -> Result<Vec<Team>, ApiError> {
    get_json_auth("/api/teams", token).await
}

pub async fn create_team(token: &str, name: &str, description: &str) -> Result<Team, ApiError> {
    post_json_auth("/api/teams", token, &CreateTeam { name, description }).await
}

pub async fn invite_member(
    token: &str,
    team_id: &str,
    invite: &InviteRequest,
) -> Result<MessageResponse, ApiError> {
    let path = format!("/api/teams/{}/invite", urlencoding::encode(team_id));
    post_json_auth(&path, token, invite).await
}

pub async fn remove_member(token: &str, team_id: &str, username: &str) -> Result<(), ApiError> {
    let path = format!(
        "/api/teams/{}/members/{}",
        urlencoding::encode(team_id),
        urlencoding::encode(username)
    );
    delete_auth(&path, token).await
}

pub async fn delete_team(token: &str, team_id: &str) -> Result<(), ApiError> {
    let path = format!("/api/teams/{}", urlencoding::encode(team_id));
    delete_auth(&path, token).await
}
