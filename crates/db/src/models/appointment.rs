//! Appointment entity model (read-only from this service).

use clinic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An appointment row from the `appointments` table.
///
/// `doctor_id` is cleared when the referenced doctor is deleted.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: DbId,
    pub patient_id: DbId,
    pub doctor_id: Option<DbId>,
    pub date_time: Timestamp,
    pub status: String,
}
