//! Wire types exchanged with the todo API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

impl TodoStatus {
    /// Every status in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Wire value, e.g. `in_progress`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a status string is not one of the wire values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TodoStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// A stored todo as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: i32,
    /// Non-blank title.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Current status.
    pub status: TodoStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoInput {
    /// Title, already checked for blankness.
    pub title: String,
    /// Optional free text; sent as `null` when absent.
    pub description: Option<String>,
    /// Requested status.
    pub status: TodoStatus,
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteConfirmation {
    /// Human-readable confirmation.
    pub message: String,
    /// Identifier of the removed todo.
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("pending", TodoStatus::Pending)]
    #[case("in_progress", TodoStatus::InProgress)]
    #[case("completed", TodoStatus::Completed)]
    fn status_parses_wire_values(#[case] raw: &str, #[case] expected: TodoStatus) {
        assert_eq!(raw.parse::<TodoStatus>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("Pending")]
    #[case("done")]
    #[case("")]
    fn status_rejects_other_values(#[case] raw: &str) {
        assert_eq!(raw.parse::<TodoStatus>(), Err(UnknownStatus(raw.to_owned())));
    }

    #[rstest]
    fn todo_decodes_server_json() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "title": "Water plants",
            "description": null,
            "status": "in_progress",
            "created_at": "2024-05-01T09:30:00Z",
            "updated_at": "2024-05-01T09:30:00.123456Z"
        }))
        .expect("decode todo");

        assert_eq!(todo.id, 7);
        assert_eq!(todo.description, None);
        assert_eq!(todo.status, TodoStatus::InProgress);
        assert!(todo.updated_at > todo.created_at);
    }

    #[rstest]
    fn input_serialises_null_description() {
        let input = TodoInput {
            title: "A".to_owned(),
            description: None,
            status: TodoStatus::Pending,
        };
        assert_eq!(
            serde_json::to_value(&input).expect("encode input"),
            json!({ "title": "A", "description": null, "status": "pending" })
        );
    }
}
