use std::sync::Arc;

use clinic_db::store::DoctorStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Doctor persistence. PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn DoctorStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DoctorStore>) -> Self {
        Self { store }
    }
}
