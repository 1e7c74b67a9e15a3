//! Server-side rendering of the index page.

use axum::response::Html;
use shelf_db::kind::{RecordKind, Summary};

use crate::form::IMAGE_FIELD;

/// Everything the index page shows.
pub struct IndexPage<'a, K: RecordKind> {
    pub bookmarks: &'a [K::Record],
    /// Distinct categories for the filter dropdown (empty without a facet).
    pub categories: &'a [String],
    /// The active filter echoed back, empty when unfiltered.
    pub selected: &'a str,
}

pub fn render_index<K: RecordKind>(page: &IndexPage<'_, K>) -> Html<String> {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Bookmarks</title>\n<link rel=\"stylesheet\" href=\"/style.css\">\n\
         </head>\n<body>\n<h1>Bookmarks</h1>\n",
    );

    render_add_form::<K>(&mut html);
    if K::FACET_COLUMN.is_some() {
        render_filter(&mut html, page.categories, page.selected);
    }

    html.push_str("<ul class=\"bookmarks\">\n");
    for record in page.bookmarks {
        render_entry(&mut html, &K::summary(record));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    Html(html)
}

fn render_add_form<K: RecordKind>(html: &mut String) {
    let enctype = if K::ACCEPTS_IMAGE {
        "multipart/form-data"
    } else {
        "application/x-www-form-urlencoded"
    };
    html.push_str(&format!(
        "<form class=\"add\" action=\"/add\" method=\"post\" enctype=\"{enctype}\">\n"
    ));
    for field in K::FORM_FIELDS {
        html.push_str(&format!(
            "<label>{label} <input type=\"text\" name=\"{field}\"></label>\n",
            label = field_label(field),
        ));
    }
    if K::ACCEPTS_IMAGE {
        html.push_str(&format!(
            "<label>Image <input type=\"file\" name=\"{IMAGE_FIELD}\" accept=\"image/*\"></label>\n"
        ));
    }
    html.push_str("<button type=\"submit\">Add</button>\n</form>\n");
}

fn render_filter(html: &mut String, categories: &[String], selected: &str) {
    html.push_str(
        "<form class=\"filter\" action=\"/\" method=\"get\">\n<select name=\"category\">\n\
         <option value=\"\">All categories</option>\n",
    );
    for category in categories {
        let marker = if category == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{value}\"{marker}>{value}</option>\n",
            value = escape(category),
        ));
    }
    html.push_str("</select>\n<button type=\"submit\">Filter</button>\n</form>\n");
}

fn render_entry(html: &mut String, summary: &Summary<'_>) {
    let text = |value: Option<&str>| escape(value.unwrap_or(""));

    html.push_str("<li class=\"bookmark\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", text(summary.heading)));
    html.push_str(&format!(
        "<span class=\"label\">{}</span>\n",
        text(summary.label)
    ));
    html.push_str(&format!("<p>{}</p>\n", text(summary.description)));
    html.push_str(&format!(
        "<a href=\"{link}\">{link}</a>\n",
        link = text(summary.link)
    ));
    if let Some(image) = summary.image_filename {
        html.push_str(&format!(
            "<img src=\"/uploads/{}\" alt=\"{}\">\n",
            escape(image),
            text(summary.heading)
        ));
    }
    html.push_str("</li>\n");
}

/// `website_name` -> `Website name`.
fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
