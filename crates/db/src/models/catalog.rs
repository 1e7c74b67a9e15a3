//! Catalog bookmarks: titled links grouped by a free-text category, with an
//! optional uploaded image.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shelf_core::types::DbId;
use shelf_core::variant::Variant;
use sqlx::FromRow;

use crate::kind::{RecordKind, Summary};

/// A row from the `bookmarks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CatalogBookmark {
    pub id: DbId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Stored upload name, served under `/uploads/`.
    pub image_filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCatalogBookmark {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_filename: Option<String>,
}

/// Marker type selecting the catalog schema.
#[derive(Debug, Clone, Copy)]
pub struct Catalog;

impl RecordKind for Catalog {
    type Record = CatalogBookmark;
    type NewRecord = NewCatalogBookmark;

    const VARIANT: Variant = Variant::Catalog;
    const TABLE: &'static str = "bookmarks";
    const CREATE_TABLE: &'static str = "\
        CREATE TABLE IF NOT EXISTS bookmarks (\
            id INTEGER PRIMARY KEY AUTOINCREMENT, \
            title TEXT, \
            category TEXT, \
            description TEXT, \
            link TEXT, \
            image_filename TEXT\
        )";
    const COLUMNS: &'static str = "id, title, category, description, link, image_filename";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["title", "category", "description", "link", "image_filename"];
    const FACET_COLUMN: Option<&'static str> = Some("category");
    const FORM_FIELDS: &'static [&'static str] = &["title", "category", "description", "link"];
    const ACCEPTS_IMAGE: bool = true;
    const ALLOWS_DROP: bool = true;

    fn from_fields(
        fields: &mut HashMap<String, String>,
        image_filename: Option<String>,
    ) -> NewCatalogBookmark {
        NewCatalogBookmark {
            title: fields.remove("title"),
            category: fields.remove("category"),
            description: fields.remove("description"),
            link: fields.remove("link"),
            image_filename,
        }
    }

    fn insert_values(record: NewCatalogBookmark) -> Vec<Option<String>> {
        vec![
            record.title,
            record.category,
            record.description,
            record.link,
            record.image_filename,
        ]
    }

    fn summary(record: &CatalogBookmark) -> Summary<'_> {
        Summary {
            heading: record.title.as_deref(),
            label: record.category.as_deref(),
            description: record.description.as_deref(),
            link: record.link.as_deref(),
            image_filename: record.image_filename.as_deref(),
        }
    }
}
