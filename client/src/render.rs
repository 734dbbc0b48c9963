//! Plain-text rendering of the board.

use crate::api::TodoApi;
use crate::board::TodoBoard;
use crate::model::{Todo, TodoStatus};

/// Shown until the first list load finishes.
pub const LOADING: &str = "Loading todos...";
/// Shown for an empty list.
pub const EMPTY: &str = "No todos found. Add a new todo to get started!";

const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Status badge text, e.g. `IN PROGRESS`.
#[must_use]
pub fn status_label(status: TodoStatus) -> String {
    status.as_str().replace('_', " ").to_uppercase()
}

/// One todo as a block of lines.
#[must_use]
pub fn render_todo(todo: &Todo) -> String {
    let mut lines = vec![format!(
        "#{} {} [{}]",
        todo.id,
        todo.title,
        status_label(todo.status)
    )];
    if let Some(description) = todo.description.as_deref().filter(|text| !text.is_empty()) {
        lines.push(format!("    {description}"));
    }
    lines.push(format!("    Created: {}", todo.created_at.format(DATE_FORMAT)));
    lines.into_iter().map(|line| line + "\n").collect()
}

/// The banner, loading indicator or list.
#[must_use]
pub fn render_board<A: TodoApi>(board: &TodoBoard<A>) -> String {
    let banner = board
        .error()
        .map(|message| format!("! {message}\n"))
        .unwrap_or_default();
    let body = if board.is_loading() {
        format!("{LOADING}\n")
    } else if board.todos().is_empty() {
        format!("{EMPTY}\n")
    } else {
        board.todos().iter().map(render_todo).collect()
    };
    banner + &body
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use crate::api::ApiError;
    use crate::model::TodoInput;

    /// Serves a fixed list; every other call fails.
    struct StaticApi(Result<Vec<Todo>, ApiError>);

    #[async_trait]
    impl TodoApi for StaticApi {
        async fn list(&self) -> Result<Vec<Todo>, ApiError> {
            self.0.clone()
        }

        async fn create(&self, _input: &TodoInput) -> Result<Todo, ApiError> {
            Err(unused())
        }

        async fn update(&self, _id: i32, _input: &TodoInput) -> Result<Todo, ApiError> {
            Err(unused())
        }

        async fn delete(&self, _id: i32) -> Result<(), ApiError> {
            Err(unused())
        }
    }

    fn unused() -> ApiError {
        ApiError::Transport {
            message: "not scripted".to_owned(),
        }
    }

    fn sample(description: Option<&str>, status: TodoStatus) -> Todo {
        let stamp = Utc
            .with_ymd_and_hms(2024, 3, 7, 14, 5, 0)
            .single()
            .expect("valid timestamp");
        Todo {
            id: 4,
            title: "Pay rent".to_owned(),
            description: description.map(str::to_owned),
            status,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[rstest]
    #[case(TodoStatus::Pending, "PENDING")]
    #[case(TodoStatus::InProgress, "IN PROGRESS")]
    #[case(TodoStatus::Completed, "COMPLETED")]
    fn labels_are_upper_case(#[case] status: TodoStatus, #[case] expected: &str) {
        assert_eq!(status_label(status), expected);
    }

    #[rstest]
    fn row_shows_description_and_creation_date() {
        let text = render_todo(&sample(Some("before the 10th"), TodoStatus::InProgress));
        assert_eq!(
            text,
            "#4 Pay rent [IN PROGRESS]\n    before the 10th\n    Created: Mar 7, 2024, 02:05 PM\n"
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn row_omits_missing_description(#[case] description: Option<&str>) {
        let text = render_todo(&sample(description, TodoStatus::Pending));
        assert_eq!(text.lines().count(), 2);
    }

    #[rstest]
    fn board_shows_loading_before_first_load() {
        let board = TodoBoard::new(StaticApi(Ok(Vec::new())));
        assert_eq!(render_board(&board), format!("{LOADING}\n"));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_board_shows_hint() {
        let mut board = TodoBoard::new(StaticApi(Ok(Vec::new())));
        board.load().await;
        assert_eq!(render_board(&board), format!("{EMPTY}\n"));
    }

    #[rstest]
    #[tokio::test]
    async fn failed_load_shows_banner_above_list() {
        let mut board = TodoBoard::new(StaticApi(Err(unused())));
        board.load().await;
        let text = render_board(&board);
        assert!(text.starts_with("! Error fetching todos. Please try again.\n"));
        assert!(text.ends_with(&format!("{EMPTY}\n")));
    }

    #[rstest]
    #[tokio::test]
    async fn loaded_board_lists_rows() {
        let rows = vec![sample(None, TodoStatus::Completed)];
        let mut board = TodoBoard::new(StaticApi(Ok(rows)));
        board.load().await;
        assert!(render_board(&board).starts_with("#4 Pay rent [COMPLETED]\n"));
    }
}
