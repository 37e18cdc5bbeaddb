//! Doctor entity model and DTOs.

use clinic_core::doctor::Page;
use clinic_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::appointment::Appointment;

/// A doctor row from the `doctors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Doctor {
    pub id: DbId,
    pub name: String,
    pub specialty: String,
}

/// DTO for creating a new doctor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoctor {
    pub name: String,
    pub specialty: String,
}

/// DTO for updating an existing doctor. Omitted or `null` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDoctor {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

/// Filter and paging window for listing doctors.
///
/// Results are always ordered by `id` ascending.
#[derive(Debug, Clone, Default)]
pub struct DoctorFilter {
    /// Case-sensitive substring the specialty must contain.
    pub specialty: Option<String>,
    pub page: Page,
}

/// A doctor together with its appointments, ordered by appointment id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorWithAppointments {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub appointments: Vec<Appointment>,
}
