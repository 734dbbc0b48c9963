//! Test utilities shared by unit and integration tests.
//!
//! Enabled for `cfg(test)` and through the `test-support` feature so the
//! `tests/` suites can drive the HTTP adapter without PostgreSQL.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDraft, TodoId, TodoService};
use crate::inbound::http::state::HttpState;

#[derive(Default)]
struct Store {
    last_id: i32,
    last_stamp: Option<DateTime<Utc>>,
    rows: Vec<Todo>,
    failure: Option<TodoRepositoryError>,
}

impl Store {
    /// Timestamps strictly increase so newest-first ordering is deterministic
    /// even when inserts land within the same clock tick.
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn check(&self) -> Result<(), TodoRepositoryError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// In-memory [`TodoRepository`] mirroring the PostgreSQL adapter's ordering
/// and id assignment.
///
/// # Examples
/// ```
/// use todo_backend::test_support::InMemoryTodoRepository;
///
/// let repo = InMemoryTodoRepository::default();
/// assert!(repo.is_empty());
/// ```
#[derive(Default)]
pub struct InMemoryTodoRepository {
    store: Mutex<Store>,
}

impl InMemoryTodoRepository {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent call fail with `failure`, or clear it with `None`.
    pub fn set_failure(&self, failure: Option<TodoRepositoryError>) {
        self.lock().failure = failure;
    }

    /// Number of stored todos.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    /// Whether the store holds no todos.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the stored rows in insertion order.
    pub fn snapshot(&self) -> Vec<Todo> {
        self.lock().rows.clone()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let store = self.lock();
        store.check()?;
        let mut rows = store.rows.clone();
        rows.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let store = self.lock();
        store.check()?;
        Ok(store.rows.iter().find(|todo| todo.id() == id).cloned())
    }

    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, TodoRepositoryError> {
        let mut store = self.lock();
        store.check()?;
        store.last_id += 1;
        let id = TodoId::new(store.last_id)
            .map_err(|err| TodoRepositoryError::query(err.to_string()))?;
        let stamp = store.next_stamp();
        store.rows.push(Todo::new(id, draft.clone(), stamp, stamp));
        Ok(id)
    }

    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<bool, TodoRepositoryError> {
        let mut store = self.lock();
        store.check()?;
        let Some(index) = store.rows.iter().position(|todo| todo.id() == id) else {
            return Ok(false);
        };
        let stamp = store.next_stamp();
        if let Some(slot) = store.rows.get_mut(index) {
            *slot = Todo::new(id, draft.clone(), slot.created_at(), stamp);
        }
        Ok(true)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        let mut store = self.lock();
        store.check()?;
        let before = store.rows.len();
        store.rows.retain(|todo| todo.id() != id);
        Ok(store.rows.len() < before)
    }
}

/// HTTP state wired to a [`TodoService`] over `repo`.
pub fn todo_http_state(repo: Arc<InMemoryTodoRepository>) -> HttpState {
    HttpState::from_service(Arc::new(TodoService::new(repo)))
}
