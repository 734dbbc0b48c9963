//! Editable form backing create and edit.

use thiserror::Error;

use crate::model::{Todo, TodoInput, TodoStatus};

/// Local validation failures; these never reach the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The title is empty or whitespace.
    #[error("Title is required")]
    TitleRequired,
}

/// Current form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    /// Title as typed.
    pub title: String,
    /// Description as typed; only an empty string means none.
    pub description: String,
    /// Selected status.
    pub status: TodoStatus,
}

impl TodoForm {
    /// Form pre-filled from an existing todo.
    #[must_use]
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
            status: todo.status,
        }
    }

    /// Back to empty fields and `pending`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request body.
    ///
    /// # Errors
    ///
    /// [`FormError::TitleRequired`] when the title is blank.
    pub fn to_input(&self) -> Result<TodoInput, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        let description = Some(self.description.clone()).filter(|text| !text.is_empty());
        Ok(TodoInput {
            title: self.title.clone(),
            description,
            status: self.status,
        })
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
    fn blank_titles_are_rejected(#[case] title: &str) {
        let form = TodoForm {
            title: title.to_owned(),
            ..TodoForm::default()
        };
        assert_eq!(form.to_input(), Err(FormError::TitleRequired));
        assert_eq!(FormError::TitleRequired.to_string(), "Title is required");
    }

    #[rstest]
    #[case("", None)]
    #[case("  ", Some("  "))]
    #[case("-", Some("-"))]
    #[case("two litres", Some("two litres"))]
    fn only_empty_description_becomes_none(#[case] description: &str, #[case] expected: Option<&str>) {
        let form = TodoForm {
            title: "Buy milk".to_owned(),
            description: description.to_owned(),
            status: TodoStatus::Completed,
        };
        let input = form.to_input().expect("valid form");
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description.as_deref(), expected);
        assert_eq!(input.status, TodoStatus::Completed);
    }

    #[rstest]
    fn reset_restores_defaults() {
        let mut form = TodoForm {
            title: "x".to_owned(),
            description: "y".to_owned(),
            status: TodoStatus::InProgress,
        };
        form.reset();
        assert_eq!(form, TodoForm::default());
        assert_eq!(form.status, TodoStatus::Pending);
    }
}
