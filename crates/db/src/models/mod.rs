//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Writable entities also carry `Deserialize` create and
//! update DTOs.

pub mod appointment;
pub mod doctor;
