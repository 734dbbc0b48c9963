//! Client-side state: the local todo list plus form and edit state.
//!
//! Every mutation goes to the API first and is mirrored locally only on
//! success; failures keep the previous list and set a static banner message
//! while the underlying error goes to the log.

use tracing::{info, warn};

use crate::api::TodoApi;
use crate::form::{FormError, TodoForm};
use crate::model::Todo;

/// Banner shown when loading the list fails.
pub const FETCH_ERROR: &str = "Error fetching todos. Please try again.";
/// Banner shown when a create fails.
pub const CREATE_ERROR: &str = "Error adding todo. Please try again.";
/// Banner shown when an update fails.
pub const UPDATE_ERROR: &str = "Error updating todo. Please try again.";
/// Banner shown when a delete fails.
pub const DELETE_ERROR: &str = "Error deleting todo. Please try again.";
/// Question asked before deleting.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

/// Asks the user a yes/no question.
pub trait Confirm {
    /// `true` when the user agrees.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Result of [`TodoBoard::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new todo was stored with this id.
    Created(i32),
    /// The edited todo was stored.
    Updated(i32),
    /// The form failed local validation; nothing was sent.
    Invalid(FormError),
    /// The API call failed; see [`TodoBoard::error`].
    Failed,
}

/// Result of [`TodoBoard::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The todo was removed.
    Deleted(i32),
    /// The user declined the confirmation.
    Declined,
    /// No todo with that id is on the board.
    Unknown,
    /// The API call failed; see [`TodoBoard::error`].
    Failed,
}

/// Local mirror of the server list.
#[derive(Debug)]
pub struct TodoBoard<A> {
    api: A,
    todos: Vec<Todo>,
    loading: bool,
    error: Option<&'static str>,
    form: TodoForm,
    editing: Option<i32>,
}

impl<A: TodoApi> TodoBoard<A> {
    /// Board in its loading state; call [`Self::load`] next.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            todos: Vec::new(),
            loading: true,
            error: None,
            form: TodoForm::default(),
            editing: None,
        }
    }

    /// Todos in display order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Whether the list is still being fetched.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current banner message.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Form contents.
    #[must_use]
    pub const fn form(&self) -> &TodoForm {
        &self.form
    }

    /// Mutable form contents.
    pub const fn form_mut(&mut self) -> &mut TodoForm {
        &mut self.form
    }

    /// Id of the todo being edited.
    #[must_use]
    pub const fn editing(&self) -> Option<i32> {
        self.editing
    }

    /// Look up a todo on the board.
    #[must_use]
    pub fn find(&self, id: i32) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Replace the local list with the server's.
    ///
    /// Returns `false` and keeps the previous list on failure.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;
        match result {
            Ok(todos) => {
                info!(count = todos.len(), "fetched todos");
                self.todos = todos;
                self.error = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch todos");
                self.error = Some(FETCH_ERROR);
                false
            }
        }
    }

    /// Pre-fill the form from todo `id` and enter edit mode.
    ///
    /// Returns `false` when the todo is not on the board.
    pub fn begin_edit(&mut self, id: i32) -> bool {
        let Some(form) = self.find(id).map(TodoForm::from_todo) else {
            return false;
        };
        self.form = form;
        self.editing = Some(id);
        true
    }

    /// Leave edit mode and clear the form without calling the API.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.reset();
    }

    /// Send the form as a create, or as an update while editing.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(err) => return SubmitOutcome::Invalid(err),
        };

        let Some(id) = self.editing else {
            return match self.api.create(&input).await {
                Ok(todo) => {
                    let id = todo.id;
                    self.todos.insert(0, todo);
                    self.form.reset();
                    SubmitOutcome::Created(id)
                }
                Err(err) => {
                    warn!(error = %err, "failed to create todo");
                    self.error = Some(CREATE_ERROR);
                    SubmitOutcome::Failed
                }
            };
        };

        match self.api.update(id, &input).await {
            Ok(todo) => {
                if let Some(slot) = self.todos.iter_mut().find(|row| row.id == id) {
                    *slot = todo;
                }
                self.cancel_edit();
                SubmitOutcome::Updated(id)
            }
            Err(err) => {
                warn!(error = %err, id, "failed to update todo");
                self.error = Some(UPDATE_ERROR);
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete todo `id` once `confirm` agrees.
    pub async fn delete(&mut self, id: i32, confirm: &mut dyn Confirm) -> DeleteOutcome {
        if self.find(id).is_none() {
            return DeleteOutcome::Unknown;
        }
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Declined;
        }
        match self.api.delete(id).await {
            Ok(()) => {
                self.todos.retain(|todo| todo.id != id);
                if self.editing == Some(id) {
                    self.cancel_edit();
                }
                DeleteOutcome::Deleted(id)
            }
            Err(err) => {
                warn!(error = %err, id, "failed to delete todo");
                self.error = Some(DELETE_ERROR);
                DeleteOutcome::Failed
            }
        }
    }
}
