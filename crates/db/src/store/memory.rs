use std::collections::BTreeMap;

use async_trait::async_trait;
use clinic_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::DoctorStore;
use crate::models::appointment::Appointment;
use crate::models::doctor::{
    CreateDoctor, Doctor, DoctorFilter, DoctorWithAppointments, UpdateDoctor,
};

#[derive(Default)]
struct Tables {
    next_doctor_id: DbId,
    next_appointment_id: DbId,
    doctors: BTreeMap<DbId, Doctor>,
    appointments: BTreeMap<DbId, Appointment>,
}

/// In-process [`DoctorStore`] with the same observable behaviour as the
/// PostgreSQL store: ids start at 1 and are never reused, listing is
/// ordered by id, and deleting a doctor detaches its appointments.
#[derive(Default)]
pub struct MemoryDoctorStore {
    tables: RwLock<Tables>,
}

impl MemoryDoctorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an appointment, optionally attached to a doctor.
    pub async fn insert_appointment(
        &self,
        patient_id: DbId,
        doctor_id: Option<DbId>,
        date_time: Timestamp,
        status: &str,
    ) -> Appointment {
        let mut tables = self.tables.write().await;
        tables.next_appointment_id += 1;
        let appointment = Appointment {
            id: tables.next_appointment_id,
            patient_id,
            doctor_id,
            date_time,
            status: status.to_string(),
        };
        tables
            .appointments
            .insert(appointment.id, appointment.clone());
        appointment
    }

    /// Snapshot of every stored appointment, ordered by id.
    pub async fn appointments(&self) -> Vec<Appointment> {
        self.tables
            .read()
            .await
            .appointments
            .values()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DoctorStore for MemoryDoctorStore {
    async fn create(&self, input: &CreateDoctor) -> Result<Doctor, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.next_doctor_id += 1;
        let doctor = Doctor {
            id: tables.next_doctor_id,
            name: input.name.clone(),
            specialty: input.specialty.clone(),
        };
        tables.doctors.insert(doctor.id, doctor.clone());
        Ok(doctor)
    }

    async fn find_with_appointments(
        &self,
        id: DbId,
    ) -> Result<Option<DoctorWithAppointments>, sqlx::Error> {
        let tables = self.tables.read().await;
        let Some(doctor) = tables.doctors.get(&id).cloned() else {
            return Ok(None);
        };
        let appointments = tables
            .appointments
            .values()
            .filter(|a| a.doctor_id == Some(id))
            .cloned()
            .collect();
        Ok(Some(DoctorWithAppointments {
            doctor,
            appointments,
        }))
    }

    async fn list(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, sqlx::Error> {
        let skip = usize::try_from(filter.page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.page.limit).unwrap_or(usize::MAX);
        let tables = self.tables.read().await;
        let doctors = tables
            .doctors
            .values()
            .filter(|d| match filter.specialty.as_deref() {
                Some(needle) => d.specialty.contains(needle),
                None => true,
            })
            .skip(skip)
            .take(limit)
            .cloned()
            .collect();
        Ok(doctors)
    }

    async fn update(&self, id: DbId, input: &UpdateDoctor) -> Result<Option<Doctor>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let Some(doctor) = tables.doctors.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            doctor.name = name.clone();
        }
        if let Some(specialty) = &input.specialty {
            doctor.specialty = specialty.clone();
        }
        Ok(Some(doctor.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let Some(doctor) = tables.doctors.remove(&id) else {
            return Ok(None);
        };
        for appointment in tables.appointments.values_mut() {
            if appointment.doctor_id == Some(id) {
                appointment.doctor_id = None;
            }
        }
        Ok(Some(doctor))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
