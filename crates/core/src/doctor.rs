//! Doctor input rules and list pagination defaults.
//!
//! Lives in `core` so the HTTP layer and any store implementation agree on
//! what a valid doctor payload and a valid page window look like.

use crate::error::CoreError;

/// Entity label used in `NotFound` errors.
pub const ENTITY: &str = "Doctor";

/// Default page size for `GET /doctors`.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Default number of leading matches skipped by `GET /doctors`.
pub const DEFAULT_LIST_SKIP: i64 = 0;

/// A resolved `skip`/`limit` window over the id-ordered doctor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_LIST_SKIP,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Resolve user-provided paging parameters, applying defaults.
///
/// `skip` must be non-negative and `limit` must be at least 1. There is
/// no upper bound on `limit`.
pub fn resolve_page(skip: Option<i64>, limit: Option<i64>) -> Result<Page, CoreError> {
    let skip = skip.unwrap_or(DEFAULT_LIST_SKIP);
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);

    if skip < 0 {
        return Err(CoreError::Validation(format!(
            "skip must be non-negative, got {skip}"
        )));
    }
    if limit < 1 {
        return Err(CoreError::Validation(format!(
            "limit must be at least 1, got {limit}"
        )));
    }
    Ok(Page { skip, limit })
}

/// Validate a required text field: must contain something other than whitespace.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate the fields of a create request.
pub fn validate_create(name: &str, specialty: &str) -> Result<(), CoreError> {
    validate_required_text("name", name)?;
    validate_required_text("specialty", specialty)
}

/// Validate the fields of an update request. Omitted fields are left
/// unchanged, so only provided values are checked.
pub fn validate_update(name: Option<&str>, specialty: Option<&str>) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_required_text("name", name)?;
    }
    if let Some(specialty) = specialty {
        validate_required_text("specialty", specialty)?;
    }
    Ok(())
}

/// Normalize the optional `specialty` list filter. An empty filter means
/// "no filter".
pub fn specialty_filter(specialty: Option<&str>) -> Option<&str> {
    specialty.filter(|s| !s.is_empty())
}
