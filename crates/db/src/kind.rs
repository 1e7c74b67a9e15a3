//! The per-variant description of a bookmark table.
//!
//! Both application variants share one storage implementation
//! ([`RecordStore`](crate::repositories::RecordStore)); everything that
//! differs between them lives behind [`RecordKind`].

use std::collections::HashMap;
use std::fmt::Debug;

use serde::Serialize;
use shelf_core::variant::Variant;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// Display-oriented view of a stored record, shared by both variants.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    pub heading: Option<&'a str>,
    pub label: Option<&'a str>,
    pub description: Option<&'a str>,
    pub link: Option<&'a str>,
    pub image_filename: Option<&'a str>,
}

pub trait RecordKind: Send + Sync + 'static {
    /// A row as read back from the table.
    type Record: for<'r> FromRow<'r, SqliteRow> + Serialize + Debug + Clone + Send + Unpin;
    /// A row about to be inserted (no identifier yet).
    type NewRecord: Debug + Send;

    const VARIANT: Variant;
    const TABLE: &'static str;
    /// Idempotent `CREATE TABLE IF NOT EXISTS` statement.
    const CREATE_TABLE: &'static str;
    /// Column list used by every `SELECT` of [`Self::Record`].
    const COLUMNS: &'static str;
    /// Columns written on insert, in the order of [`Self::insert_values`].
    const INSERT_COLUMNS: &'static [&'static str];
    /// Column records can be filtered on, if any.
    const FACET_COLUMN: Option<&'static str>;
    /// Form field names read by [`Self::from_fields`].
    const FORM_FIELDS: &'static [&'static str];
    const ACCEPTS_IMAGE: bool;
    const ALLOWS_DROP: bool;

    /// Build an insertable record from submitted form fields.
    ///
    /// Absent fields become `None` and are stored as NULL.
    fn from_fields(
        fields: &mut HashMap<String, String>,
        image_filename: Option<String>,
    ) -> Self::NewRecord;

    fn insert_values(record: Self::NewRecord) -> Vec<Option<String>>;

    fn summary(record: &Self::Record) -> Summary<'_>;
}
