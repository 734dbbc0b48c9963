//! Scripted [`TodoApi`] fake shared by the unit tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::api::{ApiError, TodoApi};
use crate::model::{Todo, TodoInput, TodoStatus};

#[derive(Default)]
struct FakeState {
    rows: Vec<Todo>,
    next_id: i32,
    failing: bool,
    calls: Vec<&'static str>,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub(crate) fn with_rows(rows: Vec<Todo>) -> Self {
        let next_id = rows.iter().map(|todo| todo.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(FakeState {
                rows,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    fn record(&self, call: &'static str) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.calls.push(call);
        if state.failing {
            return Err(ApiError::Status {
                status: 500,
                message: "Internal server error".to_owned(),
            });
        }
        Ok(state)
    }

    pub(crate) fn fail(&self) {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).failing = true;
    }

    pub(crate) fn recover(&self) {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).failing = false;
    }

    pub(crate) fn rows(&self) -> Vec<Todo> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .clone()
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .calls
            .clone()
    }
}

pub(crate) fn todo(id: i32, title: &str) -> Todo {
    let stamp = Utc
        .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    Todo {
        id,
        title: title.to_owned(),
        description: None,
        status: TodoStatus::Pending,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn stored(id: i32, input: &TodoInput) -> Todo {
    Todo {
        title: input.title.clone(),
        description: input.description.clone(),
        status: input.status,
        ..todo(id, "")
    }
}

#[async_trait]
impl TodoApi for &FakeApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.record("list")?.rows.clone())
    }

    async fn create(&self, input: &TodoInput) -> Result<Todo, ApiError> {
        let mut state = self.record("create")?;
        state.next_id += 1;
        let row = stored(state.next_id, input);
        state.rows.insert(0, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, input: &TodoInput) -> Result<Todo, ApiError> {
        let mut state = self.record("update")?;
        let row = stored(id, input);
        let slot = state
            .rows
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("todo {id} not found"),
            })?;
        *slot = row.clone();
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.record("delete")?.rows.retain(|todo| todo.id != id);
        Ok(())
    }
}
