//! Website bookmarks: a named site with the reason ("aim") it was saved.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shelf_core::types::DbId;
use shelf_core::variant::Variant;
use sqlx::FromRow;

use crate::kind::{RecordKind, Summary};

/// A row from the `bookmarks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct WebsiteBookmark {
    pub id: DbId,
    pub website_name: Option<String>,
    pub aim: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewWebsiteBookmark {
    pub website_name: Option<String>,
    pub aim: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Marker type selecting the websites schema.
#[derive(Debug, Clone, Copy)]
pub struct Websites;

impl RecordKind for Websites {
    type Record = WebsiteBookmark;
    type NewRecord = NewWebsiteBookmark;

    const VARIANT: Variant = Variant::Websites;
    const TABLE: &'static str = "bookmarks";
    const CREATE_TABLE: &'static str = "\
        CREATE TABLE IF NOT EXISTS bookmarks (\
            id INTEGER PRIMARY KEY AUTOINCREMENT, \
            website_name TEXT, \
            aim TEXT, \
            description TEXT, \
            link TEXT\
        )";
    const COLUMNS: &'static str = "id, website_name, aim, description, link";
    const INSERT_COLUMNS: &'static [&'static str] = &["website_name", "aim", "description", "link"];
    const FACET_COLUMN: Option<&'static str> = None;
    const FORM_FIELDS: &'static [&'static str] = Self::INSERT_COLUMNS;
    const ACCEPTS_IMAGE: bool = false;
    const ALLOWS_DROP: bool = false;

    fn from_fields(
        fields: &mut HashMap<String, String>,
        _image_filename: Option<String>,
    ) -> NewWebsiteBookmark {
        NewWebsiteBookmark {
            website_name: fields.remove("website_name"),
            aim: fields.remove("aim"),
            description: fields.remove("description"),
            link: fields.remove("link"),
        }
    }

    fn insert_values(record: NewWebsiteBookmark) -> Vec<Option<String>> {
        vec![record.website_name, record.aim, record.description, record.link]
    }

    fn summary(record: &WebsiteBookmark) -> Summary<'_> {
        Summary {
            heading: record.website_name.as_deref(),
            label: record.aim.as_deref(),
            description: record.description.as_deref(),
            link: record.link.as_deref(),
            image_filename: None,
        }
    }
}
