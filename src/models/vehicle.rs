//! Modelo de Vehicle
//!
//! Fila de la tabla `vehicles` tal como la devuelve PostgreSQL y su
//! conversión a la forma que expone la API.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::dto::vehicle_dto::VehicleDto;

/// Vehicle persistido - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VehicleRow {
    pub id: i32,
    pub vin: String,
    pub manufacturer: String,
    pub description: Option<String>,
    pub horse_power: Decimal,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: Decimal,
    pub fuel_type: String,
}

impl From<VehicleRow> for VehicleDto {
    fn from(row: VehicleRow) -> Self {
        Self {
            id: row.id,
            vin: row.vin,
            manufacturer: row.manufacturer,
            description: row.description,
            // NUMERIC llega como Decimal, la API expone números JSON
            horse_power: row.horse_power.to_f64().unwrap_or_default(),
            model_name: row.model_name,
            model_year: row.model_year,
            purchase_price: row.purchase_price.to_f64().unwrap_or_default(),
            fuel_type: row.fuel_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row() -> VehicleRow {
        VehicleRow {
            id: 7,
            vin: "ABCDEFGH000001".to_string(),
            manufacturer: "Honda".to_string(),
            description: None,
            horse_power: Decimal::from(185),
            model_name: "Accord".to_string(),
            model_year: 2020,
            purchase_price: Decimal::from_str("23000.50").unwrap(),
            fuel_type: "gasoline".to_string(),
        }
    }

    #[test]
    fn test_row_maps_to_camel_case_dto() {
        let dto = VehicleDto::from(row());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["modelName"], "Accord");
        assert_eq!(json["fuelType"], "gasoline");
        assert_eq!(json["modelYear"], 2020);
        assert!(json["description"].is_null());
        assert!(json.get("model_name").is_none());
    }

    #[test]
    fn test_numeric_columns_become_json_numbers() {
        let dto = VehicleDto::from(row());
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json["purchasePrice"].is_number());
        assert_eq!(json["purchasePrice"].as_f64(), Some(23000.5));
        assert_eq!(json["horsePower"].as_f64(), Some(185.0));
    }
}
