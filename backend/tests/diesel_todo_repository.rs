//! Integration tests for `DieselTodoRepository` against embedded PostgreSQL.
//!
//! Each test provisions its own temporary database, creates the schema the
//! way the server does on start-up, and drives the repository through a
//! dedicated Tokio runtime.

use std::time::Duration;

use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

use todo_backend::domain::ports::TodoRepository;
use todo_backend::domain::{TodoDraft, TodoId, TodoStatus, TodoTitle};
use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};

mod support;

use support::{handle_cluster_setup_failure, shared_cluster_handle, temporary_database};

struct TestContext {
    runtime: Runtime,
    repository: DieselTodoRepository,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let database = temporary_database(cluster).map_err(|err| err.to_string())?;

    let config = PoolConfig::new(database.url())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;
    let repository = DieselTodoRepository::new(pool);
    runtime
        .block_on(repository.ensure_schema())
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository,
        _database: database,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_context() {
        Ok(context) => Some(context),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn draft(title: &str, description: Option<&str>, status: TodoStatus) -> TodoDraft {
    TodoDraft::new(
        TodoTitle::new(title).expect("valid title"),
        description.map(str::to_owned),
        status,
    )
}

#[rstest]
fn insert_then_find_round_trips(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let id = ctx
        .block_on(ctx.repository.insert(&draft("Buy milk", Some("2 litres"), TodoStatus::Pending)))
        .expect("insert succeeds");
    let todo = ctx
        .block_on(ctx.repository.find_by_id(id))
        .expect("lookup succeeds")
        .expect("row exists");

    assert_eq!(todo.id(), id);
    assert_eq!(todo.title().as_str(), "Buy milk");
    assert_eq!(todo.description(), Some("2 litres"));
    assert_eq!(todo.status(), TodoStatus::Pending);
    assert_eq!(todo.created_at(), todo.updated_at());
}

#[rstest]
fn ensure_schema_is_idempotent(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    ctx.block_on(ctx.repository.insert(&draft("Keep me", None, TodoStatus::Pending)))
        .expect("insert succeeds");
    ctx.block_on(ctx.repository.ensure_schema())
        .expect("second run succeeds");

    let todos = ctx.block_on(ctx.repository.list()).expect("list succeeds");
    assert_eq!(todos.len(), 1);
}

#[rstest]
fn list_returns_newest_first(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let mut ids = Vec::new();
    for title in ["first", "second", "third"] {
        ids.push(
            ctx.block_on(ctx.repository.insert(&draft(title, None, TodoStatus::Pending)))
                .expect("insert succeeds"),
        );
    }

    let listed: Vec<TodoId> = ctx
        .block_on(ctx.repository.list())
        .expect("list succeeds")
        .iter()
        .map(|todo| todo.id())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[rstest]
fn update_overwrites_fields_and_bumps_timestamp(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let id = ctx
        .block_on(ctx.repository.insert(&draft("Draft", Some("notes"), TodoStatus::Pending)))
        .expect("insert succeeds");
    let before = ctx
        .block_on(ctx.repository.find_by_id(id))
        .expect("lookup succeeds")
        .expect("row exists");

    // now() is the transaction start time, so let the clock move on.
    std::thread::sleep(Duration::from_millis(5));
    let updated = ctx
        .block_on(ctx.repository.update(id, &draft("Final", None, TodoStatus::Completed)))
        .expect("update succeeds");
    assert!(updated);

    let after = ctx
        .block_on(ctx.repository.find_by_id(id))
        .expect("lookup succeeds")
        .expect("row exists");
    assert_eq!(after.title().as_str(), "Final");
    assert_eq!(after.description(), None);
    assert_eq!(after.status(), TodoStatus::Completed);
    assert_eq!(after.created_at(), before.created_at());
    assert!(after.updated_at() > before.updated_at());
}

#[rstest]
fn missing_rows_report_absence(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let missing = TodoId::new(4242).expect("positive id");

    assert!(
        ctx.block_on(ctx.repository.find_by_id(missing))
            .expect("lookup succeeds")
            .is_none()
    );
    assert!(
        !ctx.block_on(ctx.repository.update(missing, &draft("x", None, TodoStatus::Pending)))
            .expect("update succeeds")
    );
    assert!(
        !ctx.block_on(ctx.repository.delete(missing))
            .expect("delete succeeds")
    );
}

#[rstest]
fn delete_removes_row(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let id = ctx
        .block_on(ctx.repository.insert(&draft("Temporary", None, TodoStatus::InProgress)))
        .expect("insert succeeds");
    assert!(ctx.block_on(ctx.repository.delete(id)).expect("delete succeeds"));
    assert!(
        ctx.block_on(ctx.repository.find_by_id(id))
            .expect("lookup succeeds")
            .is_none()
    );
}
