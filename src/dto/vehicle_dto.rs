use serde::{Deserialize, Serialize};

// Payload de escritura ya validado (POST / PUT)
#[derive(Debug, Clone, PartialEq)]
pub struct VehiclePayload {
    pub vin: String,
    pub manufacturer: String,
    pub model_name: String,
    pub fuel_type: String,
    pub description: Option<String>,
    pub horse_power: f64,
    pub model_year: i32,
    pub purchase_price: f64,
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i32,
    pub vin: String,
    pub manufacturer: String,
    pub description: Option<String>,
    pub horse_power: f64,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: f64,
    pub fuel_type: String,
}
