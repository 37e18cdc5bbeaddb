//! Store abstraction consumed by the HTTP layer.
//!
//! Handlers receive an `Arc<dyn DoctorStore>` instead of a concrete pool so
//! they can run against PostgreSQL in production and against
//! [`MemoryDoctorStore`] in tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use clinic_core::types::DbId;

use crate::models::doctor::{
    CreateDoctor, Doctor, DoctorFilter, DoctorWithAppointments, UpdateDoctor,
};

pub use memory::MemoryDoctorStore;
pub use postgres::PgDoctorStore;

/// Persistent storage for doctor records.
///
/// `update` and `delete` are conditional on the row existing and report
/// absence as `Ok(None)`; the existence check and the mutation happen as
/// one step.
#[async_trait]
pub trait DoctorStore: Send + Sync {
    /// Insert a doctor with a store-assigned id.
    async fn create(&self, input: &CreateDoctor) -> Result<Doctor, sqlx::Error>;

    /// Look up a doctor and eagerly load its appointments.
    async fn find_with_appointments(
        &self,
        id: DbId,
    ) -> Result<Option<DoctorWithAppointments>, sqlx::Error>;

    /// List doctors by ascending id, filtered and windowed by `filter`.
    async fn list(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, sqlx::Error>;

    /// Apply the provided fields of `input`, returning the updated row.
    async fn update(&self, id: DbId, input: &UpdateDoctor) -> Result<Option<Doctor>, sqlx::Error>;

    /// Remove a doctor, returning its state prior to removal.
    async fn delete(&self, id: DbId) -> Result<Option<Doctor>, sqlx::Error>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
