use async_trait::async_trait;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::vehicle_dto::VehiclePayload;
use crate::models::vehicle::VehicleRow;
use crate::repositories::vehicle_repository::{StoreError, StoreResult, VehicleRepository};

const COLUMNS: &str =
    "id, vin, manufacturer, description, horse_power, model_name, model_year, purchase_price, fuel_type";

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Clasificar errores del driver: la violación de índice único es un error conocido
fn classify(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return StoreError::UniqueViolation {
                constraint: db_error.constraint().unwrap_or("vehicles_vin").to_string(),
            };
        }
    }
    StoreError::Database(error)
}

fn to_decimal(value: f64) -> StoreResult<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| StoreError::InvalidValue(format!("{} does not fit NUMERIC", value)))
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn list(&self) -> StoreResult<Vec<VehicleRow>> {
        let vehicles = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM vehicles ORDER BY id ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(vehicles)
    }

    async fn insert(&self, payload: &VehiclePayload) -> StoreResult<VehicleRow> {
        let vehicle = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            INSERT INTO vehicles (vin, manufacturer, description, horse_power, model_name, model_year, purchase_price, fuel_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&payload.vin)
        .bind(&payload.manufacturer)
        .bind(&payload.description)
        .bind(to_decimal(payload.horse_power)?)
        .bind(&payload.model_name)
        .bind(payload.model_year)
        .bind(to_decimal(payload.purchase_price)?)
        .bind(&payload.fuel_type)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(vehicle)
    }

    async fn find_by_vin(&self, vin: &str) -> StoreResult<Option<VehicleRow>> {
        let vehicle = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM vehicles WHERE lower(vin) = lower($1)",
            COLUMNS
        ))
        .bind(vin)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;

        Ok(vehicle)
    }

    async fn update_by_vin(&self, vin: &str, payload: &VehiclePayload) -> StoreResult<Option<VehicleRow>> {
        let vehicle = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            UPDATE vehicles
            SET manufacturer = $2, description = $3, horse_power = $4, model_name = $5,
                model_year = $6, purchase_price = $7, fuel_type = $8
            WHERE lower(vin) = lower($1)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(vin)
        .bind(&payload.manufacturer)
        .bind(&payload.description)
        .bind(to_decimal(payload.horse_power)?)
        .bind(&payload.model_name)
        .bind(payload.model_year)
        .bind(to_decimal(payload.purchase_price)?)
        .bind(&payload.fuel_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;

        Ok(vehicle)
    }

    async fn delete_by_vin(&self, vin: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE lower(vin) = lower($1)")
            .bind(vin)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.rows_affected() > 0)
    }
}
