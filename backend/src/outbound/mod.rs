//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed todo storage using Diesel ORM.

pub mod persistence;
