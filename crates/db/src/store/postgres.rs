use async_trait::async_trait;
use clinic_core::types::DbId;

use super::DoctorStore;
use crate::models::doctor::{
    CreateDoctor, Doctor, DoctorFilter, DoctorWithAppointments, UpdateDoctor,
};
use crate::repositories::DoctorRepo;
use crate::DbPool;

/// [`DoctorStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgDoctorStore {
    pool: DbPool,
}

impl PgDoctorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DoctorStore for PgDoctorStore {
    async fn create(&self, input: &CreateDoctor) -> Result<Doctor, sqlx::Error> {
        DoctorRepo::create(&self.pool, input).await
    }

    async fn find_with_appointments(
        &self,
        id: DbId,
    ) -> Result<Option<DoctorWithAppointments>, sqlx::Error> {
        DoctorRepo::find_with_appointments(&self.pool, id).await
    }

    async fn list(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, sqlx::Error> {
        DoctorRepo::list(&self.pool, filter).await
    }

    async fn update(&self, id: DbId, input: &UpdateDoctor) -> Result<Option<Doctor>, sqlx::Error> {
        DoctorRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        DoctorRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
