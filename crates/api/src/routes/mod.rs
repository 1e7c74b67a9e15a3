pub mod bookmarks;
pub mod health;

use axum::http::HeaderName;
use axum::Router;
use shelf_db::kind::RecordKind;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Build the full application: routes, static files, and middleware.
///
/// ```text
/// /health                 service + database health
/// /                       index page (?category= filter)
/// /add                    add a bookmark
/// /api/bookmarks          JSON listing
/// /deleteTable            drop the table (kinds that allow it)
/// /uploads/{file}         uploaded images (kinds that accept them)
/// anything else           static files from the public directory
/// ```
///
/// Shared by `main.rs` and the integration tests so both run the same
/// middleware stack.
pub fn build_app<K: RecordKind>(state: AppState<K>) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        .merge(health::router::<K>())
        .merge(bookmarks::router::<K>(config.max_upload_bytes));

    if K::ACCEPTS_IMAGE {
        router = router.nest_service("/uploads", ServeDir::new(&config.upload_dir));
    }

    let request_id_header = HeaderName::from_static("x-request-id");

    router
        .fallback_service(ServeDir::new(&config.public_dir))
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: a panicking handler becomes a 500.
        .layer(CatchPanicLayer::new())
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
