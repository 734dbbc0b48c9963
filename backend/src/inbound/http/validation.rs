//! Request validation helpers for the todo endpoints.
//!
//! Turns raw path segments and bodies into domain values, producing
//! `invalid_request` errors with a `{field, code}` details object.

use serde_json::json;

use crate::domain::{Error, TodoDraft, TodoId, TodoValidationError};

/// Field names reported in validation details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const TITLE: Self = Self("title");
    pub(crate) const STATUS: Self = Self("status");

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

fn draft_error(err: &TodoValidationError) -> Error {
    match err {
        TodoValidationError::EmptyTitle => {
            field_error(FieldName::TITLE, "empty_title", err.to_string())
        }
        TodoValidationError::TitleTooLong { .. } => {
            field_error(FieldName::TITLE, "title_too_long", err.to_string())
        }
        TodoValidationError::UnknownStatus { value } => {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": FieldName::STATUS.as_str(),
                "code": "unknown_status",
                "value": value,
            }))
        }
    }
}

/// Parse the `:id` path segment.
///
/// Anything that is not a positive 32-bit integer cannot name a stored todo,
/// so it is reported as not found rather than as a bad request.
pub(crate) fn parse_todo_id(raw: &str) -> Result<TodoId, Error> {
    raw.parse::<TodoId>()
        .map_err(|_| Error::not_found(format!("todo {raw} not found")))
}

/// Validate body fields into a [`TodoDraft`].
pub(crate) fn parse_todo_draft(
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
) -> Result<TodoDraft, Error> {
    TodoDraft::try_from_parts(title, description, status).map_err(|err| draft_error(&err))
}
