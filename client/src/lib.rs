//! Terminal client for the todo REST API.
//!
//! [`board::TodoBoard`] mirrors the server's list and owns the form and edit
//! state; [`shell`] drives it from line-oriented input. The HTTP transport sits
//! behind the [`api::TodoApi`] trait so the board can be tested without a
//! server.

pub mod api;
pub mod board;
pub mod form;
pub mod model;
pub mod render;
pub mod shell;
#[cfg(test)]
mod test_support;
