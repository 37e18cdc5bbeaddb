//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod appointment_repo;
pub mod doctor_repo;

pub use appointment_repo::AppointmentRepo;
pub use doctor_repo::DoctorRepo;
