//! Repositorios
//!
//! Acceso al store de vehículos detrás del trait `VehicleRepository`.

pub mod vehicle_repository;
pub mod pg_vehicle_repository;
pub mod memory_vehicle_repository;

pub use vehicle_repository::{StoreError, StoreResult, VehicleRepository};
pub use pg_vehicle_repository::PgVehicleRepository;
pub use memory_vehicle_repository::MemoryVehicleRepository;
