//! Teams and membership, for shared project visibility.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Team {
    /// Owners and admins can invite and remove members.
    pub fn can_manage(&self, username: &str) -> bool {
        self.members
            .iter()
            .any(|m| m.username == username && matches!(m.role.as_str(), "owner" | "admin"))
    }
}

/// Payload for `POST /api/teams/{team_id}/invite`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: Vec<(&str, &str)>) -> Team {
        Team {
            team_id: "T0001".to_string(),
            name: "Grid West".to_string(),
            project_id: None,
            members: members
                .into_iter()
                .map(|(username, role)| TeamMember {
                    username: username.to_string(),
                    email: None,
                    role: role.to_string(),
                })
                .collect(),
            created_at: None,
        }
    }

    #[test]
    fn owners_and_admins_manage_members_do_not() {
        let team = team(vec![("alice", "owner"), ("bob", "admin"), ("carol", "member")]);
        assert!(team.can_manage("alice"));
        assert!(team.can_manage("bob"));
        assert!(!team.can_manage("carol"));
        assert!(!team.can_manage("mallory"));
    }
}
