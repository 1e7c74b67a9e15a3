//! Handlers for the bookmark pages and the table-level delete.
//!
//! Every handler is generic over the [`RecordKind`] the server was started
//! with; behavior that only one variant has (category filter, image
//! upload, dropping the table) is switched by the kind's constants.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use shelf_db::kind::RecordKind;

use crate::error::{AppError, AppResult};
use crate::form::Submission;
use crate::query::CategoryParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::upload;
use crate::views::{self, IndexPage};

/// GET /
///
/// Render all bookmarks, optionally narrowed by `?category=`, together with
/// the distinct categories for the filter dropdown. The two reads are
/// independent; the first failure aborts the request.
pub async fn index<K: RecordKind>(
    State(state): State<AppState<K>>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Html<String>> {
    let selected = params.selected();

    let bookmarks = state.store.list_all(Some(selected)).await?;
    let categories = state.store.list_distinct_facets().await?;

    Ok(views::render_index::<K>(&IndexPage {
        bookmarks: &bookmarks,
        categories: &categories,
        selected,
    }))
}

/// GET /api/bookmarks
///
/// Same listing as the index page, as JSON.
pub async fn list<K: RecordKind>(
    State(state): State<AppState<K>>,
    Query(params): Query<CategoryParams>,
) -> AppResult<impl IntoResponse> {
    let bookmarks = state.store.list_all(Some(params.selected())).await?;

    Ok(Json(DataResponse { data: bookmarks }))
}

/// POST /add
///
/// Store the optional image first, then insert the record and redirect
/// back to the index with `302 Found`.
pub async fn add<K: RecordKind>(
    State(state): State<AppState<K>>,
    submission: Submission,
) -> AppResult<impl IntoResponse> {
    let Submission { mut fields, image } = submission;

    let image_filename = match image {
        Some(file) if K::ACCEPTS_IMAGE => {
            Some(upload::persist_image(&state.config.upload_dir, &file).await?)
        }
        _ => None,
    };

    let record = K::from_fields(&mut fields, image_filename);
    let id = state.store.insert(record).await?;

    tracing::info!(id, variant = %K::VARIANT, "Bookmark added");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}

/// DELETE /deleteTable
///
/// Drop the bookmarks table and everything in it.
pub async fn delete_table<K: RecordKind>(
    State(state): State<AppState<K>>,
) -> AppResult<impl IntoResponse> {
    state
        .store
        .drop_all()
        .await
        .map_err(AppError::DropTable)?;

    tracing::warn!(variant = %K::VARIANT, "Bookmarks table deleted");

    Ok((StatusCode::OK, "Bookmarks table deleted successfully"))
}
