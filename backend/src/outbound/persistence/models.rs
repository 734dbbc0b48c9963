//! Diesel row structs for the `todos` table.
//!
//! Internal to the persistence adapter; the domain never sees these.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::todos;

/// Full row as read from the database.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; timestamps come from column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
}

/// Full-replacement changeset. A missing description clears the column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct TodoUpdate<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
}
