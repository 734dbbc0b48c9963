//! Todo entity and its validated building blocks.
//!
//! A [`Todo`] is only ever built from a [`TodoDraft`], which in turn can only
//! be obtained through validation, so every stored record satisfies the title
//! and status rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Maximum number of characters accepted in a todo title.
pub const TODO_TITLE_MAX: usize = 255;

/// Validation failures raised while building todo values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoValidationError {
    #[error("title is required")]
    EmptyTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("status must be one of pending, in_progress, completed (got {value:?})")]
    UnknownStatus { value: String },
}

/// Raised when a raw value cannot name a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("todo id must be a positive integer")]
pub struct InvalidTodoId;

/// Store-assigned todo identifier.
///
/// # Examples
/// ```
/// use todo_backend::domain::TodoId;
///
/// let id: TodoId = "42".parse().expect("positive id");
/// assert_eq!(id.get(), 42);
/// assert!("0".parse::<TodoId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i32);

impl TodoId {
    /// Wrap a raw identifier, rejecting zero and negatives.
    pub fn new(raw: i32) -> Result<Self, InvalidTodoId> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(InvalidTodoId)
        }
    }

    /// The raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = InvalidTodoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.parse::<i32>().map_err(|_| InvalidTodoId)?;
        Self::new(raw)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty title of at most [`TODO_TITLE_MAX`] characters.
///
/// The title is stored exactly as supplied; only the emptiness check ignores
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and wrap a title.
    pub fn new(raw: impl Into<String>) -> Result<Self, TodoValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        if raw.chars().count() > TODO_TITLE_MAX {
            return Err(TodoValidationError::TitleTooLong {
                max: TODO_TITLE_MAX,
            });
        }
        Ok(Self(raw))
    }

    /// Borrow the title text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Progress state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TodoStatus {
    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for TodoStatus {
    type Err = TodoValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(TodoValidationError::UnknownStatus {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input for creating or fully replacing a todo.
///
/// Omitted fields take their defaults: no description and
/// [`TodoStatus::Pending`]. An empty status string is treated as omitted. Updates are full replacements, so the same
/// defaults apply there.
///
/// # Examples
/// ```
/// use todo_backend::domain::{TodoDraft, TodoStatus};
///
/// let draft = TodoDraft::try_from_parts(Some("Buy milk".into()), None, None)
///     .expect("valid draft");
/// assert_eq!(draft.title().as_str(), "Buy milk");
/// assert_eq!(draft.status(), TodoStatus::Pending);
/// assert!(draft.description().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title: TodoTitle,
    description: Option<String>,
    status: TodoStatus,
}

impl TodoDraft {
    /// Build a draft from already validated parts.
    pub fn new(title: TodoTitle, description: Option<String>, status: TodoStatus) -> Self {
        Self {
            title,
            description,
            status,
        }
    }

    /// Validate raw request fields into a draft.
    pub fn try_from_parts(
        title: Option<String>,
        description: Option<String>,
        status: Option<String>,
    ) -> Result<Self, TodoValidationError> {
        let title = TodoTitle::new(title.unwrap_or_default())?;
        // An empty status counts as unspecified.
        let status = status
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(TodoStatus::from_str)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::new(title, description, status))
    }

    /// Validated title.
    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Optional free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Requested status.
    pub fn status(&self) -> TodoStatus {
        self.status
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    description: Option<String>,
    status: TodoStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Assemble a stored todo from its identifier, content and timestamps.
    pub fn new(
        id: TodoId,
        draft: TodoDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let TodoDraft {
            title,
            description,
            status,
        } = draft;
        Self {
            id,
            title,
            description,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_titles_are_rejected(#[case] raw: &str) {
        assert_eq!(TodoTitle::new(raw), Err(TodoValidationError::EmptyTitle));
    }

    #[rstest]
    fn title_length_is_counted_in_characters() {
        let at_limit = "é".repeat(TODO_TITLE_MAX);
        assert!(TodoTitle::new(at_limit).is_ok());

        let over = "a".repeat(TODO_TITLE_MAX + 1);
        assert_eq!(
            TodoTitle::new(over),
            Err(TodoValidationError::TitleTooLong {
                max: TODO_TITLE_MAX
            })
        );
    }

    #[rstest]
    fn title_keeps_surrounding_whitespace() {
        let title = TodoTitle::new("  Buy milk ").expect("valid title");
        assert_eq!(title.as_str(), "  Buy milk ");
    }

    #[rstest]
    #[case("pending", TodoStatus::Pending)]
    #[case("in_progress", TodoStatus::InProgress)]
    #[case("completed", TodoStatus::Completed)]
    fn status_parses_known_values(#[case] raw: &str, #[case] expected: TodoStatus) {
        assert_eq!(raw.parse::<TodoStatus>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("done")]
    #[case("Pending")]
    #[case("")]
    fn status_rejects_unknown_values(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<TodoStatus>(),
            Err(TodoValidationError::UnknownStatus { .. })
        ));
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("2147483647", Some(i32::MAX))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("abc", None)]
    #[case("1.5", None)]
    #[case("99999999999", None)]
    fn todo_id_parsing(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(raw.parse::<TodoId>().ok().map(TodoId::get), expected);
    }

    #[rstest]
    fn draft_defaults_to_pending_without_description() {
        let draft = TodoDraft::try_from_parts(Some("Write report".into()), None, None)
            .expect("valid draft");
        assert_eq!(draft.status(), TodoStatus::Pending);
        assert_eq!(draft.description(), None);
    }

    #[rstest]
    fn draft_treats_empty_status_as_pending() {
        let draft = TodoDraft::try_from_parts(Some("Walk".into()), None, Some(String::new()))
            .expect("empty status defaults");
        assert_eq!(draft.status(), TodoStatus::Pending);
    }

    #[rstest]
    fn draft_requires_title() {
        assert_eq!(
            TodoDraft::try_from_parts(None, Some("notes".into()), None),
            Err(TodoValidationError::EmptyTitle)
        );
    }

    #[rstest]
    fn draft_reports_title_before_status() {
        assert_eq!(
            TodoDraft::try_from_parts(Some(" ".into()), None, Some("bogus".into())),
            Err(TodoValidationError::EmptyTitle)
        );
    }

    #[rstest]
    fn todo_carries_draft_fields() {
        let draft = TodoDraft::try_from_parts(
            Some("Ship".into()),
            Some("release 1.0".into()),
            Some("in_progress".into()),
        )
        .expect("valid draft");
        let now = Utc::now();
        let id = TodoId::new(9).expect("positive id");

        let todo = Todo::new(id, draft, now, now);

        assert_eq!(todo.id(), id);
        assert_eq!(todo.title().as_str(), "Ship");
        assert_eq!(todo.description(), Some("release 1.0"));
        assert_eq!(todo.status(), TodoStatus::InProgress);
        assert_eq!(todo.created_at(), now);
    }
}
