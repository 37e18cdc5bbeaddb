//! Repository for the `appointments` table.

use clinic_core::types::DbId;
use sqlx::PgConnection;

use crate::models::appointment::Appointment;

const COLUMNS: &str = "id, patient_id, doctor_id, date_time, status";

/// Read access to appointments from the doctor side of the relation.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// List the appointments attached to a doctor, ordered by id.
    ///
    /// Takes a connection so callers can read inside the same transaction
    /// as the doctor row.
    pub async fn list_by_doctor(
        conn: &mut PgConnection,
        doctor_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM appointments WHERE doctor_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(doctor_id)
            .fetch_all(conn)
            .await
    }
}
