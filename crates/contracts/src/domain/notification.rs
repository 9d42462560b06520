//! User notifications (team and forecast activity).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Some feeds omit the id; mark-as-read is only possible when present.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Notification {
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            "team_created" => "\u{1F389}",
            "team_joined" => "\u{1F465}",
            "team_removed" => "\u{1F44B}",
            "project_shared" => "\u{1F4C1}",
            "forecast_updated" => "\u{1F4CA}",
            _ => "\u{1F514}",
        }
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_count_ignores_read_entries() {
        let notifications = vec![
            Notification {
                id: "1".to_string(),
                kind: "team_joined".to_string(),
                message: "joined".to_string(),
                read: true,
                created_at: None,
            },
            Notification {
                id: "2".to_string(),
                kind: "forecast_updated".to_string(),
                message: "updated".to_string(),
                read: false,
                created_at: None,
            },
        ];
        assert_eq!(unread_count(&notifications), 1);
    }

    #[test]
    fn unknown_kinds_get_the_bell() {
        let n = Notification {
            id: "3".to_string(),
            kind: "something_else".to_string(),
            message: String::new(),
            read: false,
            created_at: None,
        };
        assert_eq!(n.icon(), "\u{1F514}");
    }
}
