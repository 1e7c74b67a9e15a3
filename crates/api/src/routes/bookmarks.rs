//! Route definitions for bookmarks.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use shelf_db::kind::RecordKind;

use crate::handlers::bookmarks;
use crate::state::AppState;

/// Bookmark routes, mounted at the root.
///
/// ```text
/// GET    /               -> index
/// POST   /add            -> add
/// GET    /api/bookmarks  -> list
/// DELETE /deleteTable    -> delete_table (only kinds that allow dropping)
/// ```
pub fn router<K: RecordKind>(max_upload_bytes: usize) -> Router<AppState<K>> {
    let router = Router::new()
        .route("/", get(bookmarks::index::<K>))
        .route(
            "/add",
            post(bookmarks::add::<K>).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/bookmarks", get(bookmarks::list::<K>));

    if K::ALLOWS_DROP {
        router.route("/deleteTable", delete(bookmarks::delete_table::<K>))
    } else {
        router
    }
}
