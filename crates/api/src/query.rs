//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /doctors` (`?specialty=&skip=&limit=`).
///
/// Defaults and bounds are resolved by `clinic_core::doctor::resolve_page`.
#[derive(Debug, Default, Deserialize)]
pub struct ListDoctorsParams {
    pub specialty: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
