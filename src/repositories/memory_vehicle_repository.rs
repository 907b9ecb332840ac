//! Store de vehículos en memoria
//!
//! Reproduce la semántica de la tabla vehicles (id serial, índice único
//! sobre `lower(vin)`) sin base de datos. Se usa en los tests del router y
//! con `VEHICLE_STORE=memory` para levantar la API en local.

use std::sync::Arc;

use async_trait::async_trait;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::dto::vehicle_dto::VehiclePayload;
use crate::models::vehicle::VehicleRow;
use crate::repositories::vehicle_repository::{StoreError, StoreResult, VehicleRepository};

const VIN_INDEX: &str = "vehicles_vin_lower_idx";

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<VehicleRow>,
}

#[derive(Clone, Default)]
pub struct MemoryVehicleRepository {
    table: Arc<RwLock<Table>>,
}

impl MemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_vin(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn to_decimal(value: f64) -> StoreResult<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| StoreError::InvalidValue(format!("{} does not fit NUMERIC", value)))
}

#[async_trait]
impl VehicleRepository for MemoryVehicleRepository {
    async fn list(&self) -> StoreResult<Vec<VehicleRow>> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    async fn insert(&self, payload: &VehiclePayload) -> StoreResult<VehicleRow> {
        let mut table = self.table.write().await;

        if table.rows.iter().any(|row| same_vin(&row.vin, &payload.vin)) {
            return Err(StoreError::UniqueViolation {
                constraint: VIN_INDEX.to_string(),
            });
        }

        let row = VehicleRow {
            id: table.next_id + 1,
            vin: payload.vin.clone(),
            manufacturer: payload.manufacturer.clone(),
            description: payload.description.clone(),
            horse_power: to_decimal(payload.horse_power)?,
            model_name: payload.model_name.clone(),
            model_year: payload.model_year,
            purchase_price: to_decimal(payload.purchase_price)?,
            fuel_type: payload.fuel_type.clone(),
        };

        table.next_id = row.id;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_vin(&self, vin: &str) -> StoreResult<Option<VehicleRow>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|row| same_vin(&row.vin, vin)).cloned())
    }

    async fn update_by_vin(&self, vin: &str, payload: &VehiclePayload) -> StoreResult<Option<VehicleRow>> {
        let horse_power = to_decimal(payload.horse_power)?;
        let purchase_price = to_decimal(payload.purchase_price)?;

        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|row| same_vin(&row.vin, vin)) else {
            return Ok(None);
        };

        row.manufacturer = payload.manufacturer.clone();
        row.description = payload.description.clone();
        row.horse_power = horse_power;
        row.model_name = payload.model_name.clone();
        row.model_year = payload.model_year;
        row.purchase_price = purchase_price;
        row.fuel_type = payload.fuel_type.clone();

        Ok(Some(row.clone()))
    }

    async fn delete_by_vin(&self, vin: &str) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| !same_vin(&row.vin, vin));
        Ok(table.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(vin: &str) -> VehiclePayload {
        VehiclePayload {
            vin: vin.to_string(),
            manufacturer: "VW".to_string(),
            model_name: "Golf".to_string(),
            fuel_type: "gasoline".to_string(),
            description: Some("Golf".to_string()),
            horse_power: 150.0,
            model_year: 2019,
            purchase_price: 18000.0,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = MemoryVehicleRepository::new();
        let first = repo.insert(&payload("VIN1")).await.unwrap();
        let second = repo.insert(&payload("VIN2")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_vin_uniqueness_ignores_case() {
        let repo = MemoryVehicleRepository::new();
        repo.insert(&payload("abc123")).await.unwrap();
        let err = repo.insert(&payload("ABC123")).await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = MemoryVehicleRepository::new();
        repo.insert(&payload("VIN1")).await.unwrap();
        assert!(repo.delete_by_vin("vin1").await.unwrap());
        let again = repo.insert(&payload("VIN1")).await.unwrap();
        assert_eq!(again.id, 2);
    }

    #[tokio::test]
    async fn test_update_keeps_stored_vin() {
        let repo = MemoryVehicleRepository::new();
        repo.insert(&payload("AbC")).await.unwrap();

        let mut changes = payload("abc");
        changes.horse_power = 210.0;
        let updated = repo.update_by_vin("ABC", &changes).await.unwrap().unwrap();

        assert_eq!(updated.vin, "AbC");
        assert_eq!(updated.horse_power, Decimal::from(210));
    }

    #[tokio::test]
    async fn test_missing_vin_yields_none_and_false() {
        let repo = MemoryVehicleRepository::new();
        assert!(repo.find_by_vin("nope").await.unwrap().is_none());
        assert!(repo.update_by_vin("nope", &payload("nope")).await.unwrap().is_none());
        assert!(!repo.delete_by_vin("nope").await.unwrap());
    }
}
