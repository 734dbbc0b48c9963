//! Todo backend library: domain model, HTTP adapter and PostgreSQL storage.
//!
//! The binary in `main.rs` wires these together; tests drive the same pieces
//! with the in-memory repository from `test_support`.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
