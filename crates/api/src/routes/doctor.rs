//! Route definitions for the `/doctors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::doctor;
use crate::state::AppState;

/// Routes for `/doctors`. The collection is served with and without a
/// trailing slash.
///
/// ```text
/// GET    /doctors/          -> list
/// POST   /doctors/          -> create
/// GET    /doctors/{id}      -> get_by_id
/// PUT    /doctors/{id}      -> update
/// DELETE /doctors/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(doctor::list).post(doctor::create))
        .route("/doctors/", get(doctor::list).post(doctor::create))
        .route(
            "/doctors/{id}",
            get(doctor::get_by_id)
                .put(doctor::update)
                .delete(doctor::delete),
        )
}
