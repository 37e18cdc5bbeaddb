//! Repository for the `doctors` table.

use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::doctor::{
    CreateDoctor, Doctor, DoctorFilter, DoctorWithAppointments, UpdateDoctor,
};
use crate::repositories::AppointmentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, specialty";

/// Provides CRUD operations for doctors.
pub struct DoctorRepo;

impl DoctorRepo {
    /// Insert a new doctor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDoctor) -> Result<Doctor, sqlx::Error> {
        let query = format!(
            "INSERT INTO doctors (name, specialty)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doctor>(&query)
            .bind(&input.name)
            .bind(&input.specialty)
            .fetch_one(pool)
            .await
    }

    /// Find a doctor by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doctors WHERE id = $1");
        sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a doctor by ID, enriched with its appointments.
    ///
    /// Both reads run in one `REPEATABLE READ` transaction so a concurrent
    /// delete cannot pair the doctor row with already-detached appointments.
    pub async fn find_with_appointments(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DoctorWithAppointments>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM doctors WHERE id = $1");
        let doctor = sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let found = match doctor {
            Some(doctor) => {
                let appointments = AppointmentRepo::list_by_doctor(&mut *tx, id).await?;
                Some(DoctorWithAppointments {
                    doctor,
                    appointments,
                })
            }
            None => None,
        };

        tx.commit().await?;
        Ok(found)
    }

    /// List doctors ordered by id, optionally keeping only those whose
    /// specialty contains `filter.specialty` (literal, case-sensitive).
    pub async fn list(pool: &PgPool, filter: &DoctorFilter) -> Result<Vec<Doctor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM doctors
             WHERE ($1::TEXT IS NULL OR strpos(specialty, $1) > 0)
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Doctor>(&query)
            .bind(filter.specialty.as_deref())
            .bind(filter.page.limit)
            .bind(filter.page.skip)
            .fetch_all(pool)
            .await
    }

    /// Update a doctor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDoctor,
    ) -> Result<Option<Doctor>, sqlx::Error> {
        let query = format!(
            "UPDATE doctors SET
                name = COALESCE($2, name),
                specialty = COALESCE($3, specialty)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.specialty)
            .fetch_optional(pool)
            .await
    }

    /// Delete a doctor by ID, returning the row as it was before removal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        let query = format!("DELETE FROM doctors WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
