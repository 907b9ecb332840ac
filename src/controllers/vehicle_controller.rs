use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::dto::vehicle_dto::VehicleDto;
use crate::repositories::vehicle_repository::{StoreError, VehicleRepository};
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::validate_vehicle_payload;

pub const MSG_VIN_TAKEN: &str = "Vehicle with this VIN already exists";
pub const MSG_VIN_MISMATCH: &str = "VIN in body must match VIN in path";

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

/// Traducir errores conocidos del store; el resto queda como 500
fn translate_store_error(error: StoreError) -> AppError {
    match error {
        StoreError::UniqueViolation { constraint } => {
            warn!("⚠️ VIN duplicado rechazado por el store ({})", constraint);
            validation_error("vin", "unique", MSG_VIN_TAKEN)
        }
        other => AppError::Store(other),
    }
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<VehicleDto>> {
        let vehicles = self.repository.list().await?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    pub async fn create(&self, payload: Value) -> AppResult<VehicleDto> {
        let payload = validate_vehicle_payload(&payload)?;

        // La unicidad del VIN la decide el índice del store, sin chequeo previo
        let vehicle = self
            .repository
            .insert(&payload)
            .await
            .map_err(translate_store_error)?;

        info!("🚗 Vehículo creado: id={} vin={}", vehicle.id, vehicle.vin);
        Ok(vehicle.into())
    }

    pub async fn get_by_vin(&self, vin: &str) -> AppResult<VehicleDto> {
        let vehicle = self
            .repository
            .find_by_vin(vin)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        Ok(vehicle.into())
    }

    pub async fn update(&self, vin: &str, payload: Value) -> AppResult<VehicleDto> {
        // El VIN del body, si viene, tiene que coincidir con el del path
        if let Some(body_vin) = payload.get("vin").and_then(Value::as_str) {
            if body_vin.to_lowercase() != vin.to_lowercase() {
                return Err(validation_error("vin", "mismatch", MSG_VIN_MISMATCH));
            }
        }

        let payload = validate_vehicle_payload(&payload)?;

        let vehicle = self
            .repository
            .update_by_vin(vin, &payload)
            .await
            .map_err(translate_store_error)?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        info!("✏️ Vehículo actualizado: id={} vin={}", vehicle.id, vehicle.vin);
        Ok(vehicle.into())
    }

    pub async fn delete(&self, vin: &str) -> AppResult<()> {
        if !self.repository.delete_by_vin(vin).await? {
            return Err(not_found_error("Vehicle"));
        }

        info!("🗑️ Vehículo eliminado: vin={}", vin);
        Ok(())
    }
}
