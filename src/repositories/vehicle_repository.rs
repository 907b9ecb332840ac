//! Contrato del store de vehículos
//!
//! Los handlers dependen de este trait y no del pool directamente, de modo
//! que el store se inyecta en `AppState` y puede sustituirse en tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::dto::vehicle_dto::VehiclePayload;
use crate::models::vehicle::VehicleRow;

/// Errores reportados por el store
#[derive(Error, Debug)]
pub enum StoreError {
    /// El store rechazó la escritura por un índice único
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// Valor que no se puede representar en la columna destino
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operaciones CRUD sobre la tabla vehicles
///
/// Cada método corresponde a una única sentencia contra el store. La
/// coincidencia por VIN es siempre case-insensitive y la unicidad del VIN
/// la decide el store, nunca un chequeo previo.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Todos los vehículos ordenados por id ascendente
    async fn list(&self) -> StoreResult<Vec<VehicleRow>>;

    async fn insert(&self, payload: &VehiclePayload) -> StoreResult<VehicleRow>;

    async fn find_by_vin(&self, vin: &str) -> StoreResult<Option<VehicleRow>>;

    /// Actualiza todos los campos mutables. El VIN almacenado no se reescribe.
    async fn update_by_vin(&self, vin: &str, payload: &VehiclePayload) -> StoreResult<Option<VehicleRow>>;

    /// Devuelve `true` si se borró una fila
    async fn delete_by_vin(&self, vin: &str) -> StoreResult<bool>;
}
