//! Integration tests for the catalog variant: index page, category filter,
//! adding bookmarks, and dropping the table.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, body_text, build_test_app, delete, get, post_form, post_multipart};
use shelf_db::models::catalog::Catalog;

fn example_fields() -> [(&'static str, &'static str); 4] {
    [
        ("title", "Example"),
        ("category", "Tools"),
        ("description", "A tool"),
        ("link", "http://example.com"),
    ]
}

// ---------------------------------------------------------------------------
// POST /add
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_redirects_home_with_302() {
    let t = build_test_app::<Catalog>().await;

    let response = post_form(&t.app, "/add", &example_fields()).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn added_bookmark_without_image_is_filterable() {
    let t = build_test_app::<Catalog>().await;
    post_form(&t.app, "/add", &example_fields()).await;

    let json = body_json(get(&t.app, "/api/bookmarks?category=Tools").await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Example");
    assert_eq!(data[0]["category"], "Tools");
    assert_eq!(data[0]["description"], "A tool");
    assert_eq!(data[0]["link"], "http://example.com");
    assert!(data[0]["image_filename"].is_null());
}

#[tokio::test]
async fn multipart_add_without_file_stores_no_image() {
    let t = build_test_app::<Catalog>().await;

    let response = post_multipart(&t.app, "/add", &example_fields(), None).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let rows = t.store.list_all(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title.as_deref(), Some("Example"));
    assert_eq!(rows[0].image_filename, None);
}

#[tokio::test]
async fn missing_fields_are_stored_as_null() {
    let t = build_test_app::<Catalog>().await;

    let response = post_form(&t.app, "/add", &[("title", "Only a title")]).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let rows = t.store.list_all(None).await.unwrap();
    assert_eq!(rows[0].title.as_deref(), Some("Only a title"));
    assert_eq!(rows[0].category, None);
    assert_eq!(rows[0].link, None);
}

#[tokio::test]
async fn add_without_content_type_stores_empty_bookmark() {
    let t = build_test_app::<Catalog>().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/add")
        .body(Body::empty())
        .unwrap();
    let response = common::send(&t.app, request).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let rows = t.store.list_all(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, None);
    assert_eq!(rows[0].category, None);
    assert_eq!(rows[0].description, None);
    assert_eq!(rows[0].link, None);
    assert_eq!(rows[0].image_filename, None);
}

#[tokio::test]
async fn add_with_json_body_ignores_it_and_stores_empty_bookmark() {
    let t = build_test_app::<Catalog>().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"x"}"#))
        .unwrap();
    let response = common::send(&t.app, request).await;

    assert_eq!(response.status(), StatusCode::FOUND);

    let rows = t.store.list_all(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, None);
}

#[tokio::test]
async fn malformed_multipart_is_rejected() {
    let t = build_test_app::<Catalog>().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/add")
        .header(header::CONTENT_TYPE, "multipart/form-data")
        .body(Body::from("not multipart"))
        .unwrap();
    let response = common::send(&t.app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(t.store.count().await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_lists_bookmarks_and_categories() {
    let t = build_test_app::<Catalog>().await;
    post_form(&t.app, "/add", &example_fields()).await;
    post_form(&t.app, "/add", &[("title", "Dune"), ("category", "Books")]).await;

    let response = get(&t.app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<h2>Example</h2>"));
    assert!(html.contains("<h2>Dune</h2>"));
    assert!(html.contains("<option value=\"Tools\">Tools</option>"));
    assert!(html.contains("<option value=\"Books\">Books</option>"));
}

#[tokio::test]
async fn index_filter_excludes_other_categories_and_echoes_selection() {
    let t = build_test_app::<Catalog>().await;
    post_form(&t.app, "/add", &example_fields()).await;
    post_form(&t.app, "/add", &[("title", "Dune"), ("category", "Books")]).await;

    let html = body_text(get(&t.app, "/?category=Books").await).await;

    assert!(html.contains("<h2>Dune</h2>"));
    assert!(!html.contains("<h2>Example</h2>"));
    assert!(html.contains("<option value=\"Books\" selected>Books</option>"));
    // The dropdown still offers every category.
    assert!(html.contains("<option value=\"Tools\">Tools</option>"));
}

#[tokio::test]
async fn empty_category_param_means_no_filter() {
    let t = build_test_app::<Catalog>().await;
    post_form(&t.app, "/add", &example_fields()).await;
    post_form(&t.app, "/add", &[("title", "Dune"), ("category", "Books")]).await;

    let json = body_json(get(&t.app, "/api/bookmarks?category=").await).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn index_on_empty_table_renders() {
    let t = build_test_app::<Catalog>().await;

    let response = get(&t.app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<ul class=\"bookmarks\">"));
}

// ---------------------------------------------------------------------------
// DELETE /deleteTable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_table_drops_everything() {
    let t = build_test_app::<Catalog>().await;
    post_form(&t.app, "/add", &example_fields()).await;

    let response = delete(&t.app, "/deleteTable").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "Bookmarks table deleted successfully"
    );

    // Reads fail until the schema is recreated.
    let response = get(&t.app, "/").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Database error");

    t.store.ensure_schema().await.unwrap();
    assert_eq!(t.store.count().await.unwrap(), 0);
    assert_eq!(get(&t.app, "/").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn add_after_drop_reports_database_error() {
    let t = build_test_app::<Catalog>().await;
    delete(&t.app, "/deleteTable").await;

    let response = post_form(&t.app, "/add", &example_fields()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Database error");
}

#[tokio::test]
async fn delete_table_requires_delete_method() {
    let t = build_test_app::<Catalog>().await;

    let response = get(&t.app, "/deleteTable").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
