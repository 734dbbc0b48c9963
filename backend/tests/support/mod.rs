//! Shared helpers for backend integration tests that need PostgreSQL.

mod cluster_skip;

use std::time::Duration;

use pg_embedded_setup_unpriv::{BootstrapResult, ClusterHandle, TemporaryDatabase};
use uuid::Uuid;

pub use cluster_skip::handle_cluster_setup_failure;

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Shared embedded cluster, retried while a concurrent bootstrap settles.
pub fn shared_cluster_handle() -> BootstrapResult<&'static ClusterHandle> {
    ensure_stable_password();
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => return Err(error),
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Fresh, uniquely named database dropped when the guard goes out of scope.
pub fn temporary_database(cluster: &ClusterHandle) -> BootstrapResult<TemporaryDatabase> {
    let name = format!("todo_test_{}", Uuid::new_v4().simple());
    cluster.temporary_database(name.as_str())
}

/// A reused data directory keeps its original password, so pin one.
fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster bootstrap spawns any threads.
        unsafe {
            std::env::set_var("PG_PASSWORD", "todo_embedded_test");
        }
    }
}
