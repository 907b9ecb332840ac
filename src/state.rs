//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El store se inyecta ya construido, el
//! estado no abre conexiones por su cuenta.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(vehicles: Arc<dyn VehicleRepository>, config: EnvironmentConfig) -> Self {
        Self { vehicles, config }
    }
}
