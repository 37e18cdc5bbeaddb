pub mod doctor;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /doctors                                          list, create
/// /doctors/{id}                                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(doctor::router())
}
