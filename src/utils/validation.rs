//! Utilidades de validación
//!
//! Validación del payload de vehículos. Trabaja sobre el JSON sin tipar
//! para poder reportar todos los campos inválidos a la vez en lugar de
//! cortar en el primer error de deserialización.

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use validator::ValidationErrors;

use crate::dto::vehicle_dto::VehiclePayload;
use crate::utils::errors::field_error;

pub const MSG_REQUIRED_STRING: &str = "Required string field missing or empty";
pub const MSG_REQUIRED_NUMBER: &str = "Required number field missing";
pub const MSG_OPTIONAL_STRING: &str = "Must be a string if provided";
pub const MSG_NOT_OBJECT: &str = "Request body must be a JSON object";
pub const MSG_NOT_INTEGER: &str = "Must be an integer";
pub const MSG_OUT_OF_RANGE: &str = "Must be within the supported numeric range";

/// Clave usada cuando el payload completo no es un objeto
pub const BODY_FIELD: &str = "body";

const REQUIRED_STRINGS: [&str; 4] = ["vin", "manufacturer", "modelName", "fuelType"];
const REQUIRED_NUMBERS: [&str; 3] = ["horsePower", "modelYear", "purchasePrice"];

/// Cota inferior de cada campo numérico con su mensaje
const LOWER_BOUNDS: [(&str, f64, &str); 3] = [
    ("horsePower", 0.0, "Must be >= 0"),
    ("modelYear", 1850.0, "Must be >= 1850"),
    ("purchasePrice", 0.0, "Must be >= 0"),
];

/// Validar un payload de vehículo
///
/// Todas las reglas se evalúan de forma independiente y los errores se
/// acumulan por campo. Si el payload no es un objeto se devuelve un único
/// error bajo `body` sin evaluar el resto.
pub fn validate_vehicle_payload(payload: &Value) -> Result<VehiclePayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(object) = payload.as_object() else {
        errors.add(BODY_FIELD, field_error("type", MSG_NOT_OBJECT));
        return Err(errors);
    };

    for field in REQUIRED_STRINGS {
        if required_string(object, field).is_none() {
            errors.add(field, field_error("required", MSG_REQUIRED_STRING));
        }
    }

    for field in REQUIRED_NUMBERS {
        if required_number(object, field).is_none() {
            errors.add(field, field_error("required", MSG_REQUIRED_NUMBER));
        }
    }

    // description es opcional, null cuenta como ausente
    match object.get("description") {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => errors.add("description", field_error("type", MSG_OPTIONAL_STRING)),
    }

    // Los rangos solo aplican a campos que ya pasaron el chequeo de tipo
    for (field, bound, message) in LOWER_BOUNDS {
        if let Some(value) = required_number(object, field) {
            if value < bound {
                errors.add(field, field_error("range", message));
            }
        }
    }

    // horse_power y purchase_price son NUMERIC, se enlazan como Decimal
    for field in ["horsePower", "purchasePrice"] {
        if let Some(value) = required_number(object, field) {
            if Decimal::from_f64(value).is_none() {
                errors.add(field, field_error("range", MSG_OUT_OF_RANGE));
            }
        }
    }

    // model_year es INTEGER en la tabla
    if let Some(year) = required_number(object, "modelYear") {
        if year.fract() != 0.0 || year > i32::MAX as f64 {
            errors.add("modelYear", field_error("integer", MSG_NOT_INTEGER));
        }
    }

    if !errors.errors().is_empty() {
        return Err(errors);
    }

    // Todos los campos requeridos existen con el tipo correcto
    let text = |field: &str| required_string(object, field).unwrap_or_default().to_string();
    let number = |field: &str| required_number(object, field).unwrap_or_default();

    Ok(VehiclePayload {
        vin: text("vin"),
        manufacturer: text("manufacturer"),
        model_name: text("modelName"),
        fuel_type: text("fuelType"),
        description: object
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        horse_power: number("horsePower"),
        model_year: number("modelYear") as i32,
        purchase_price: number("purchasePrice"),
    })
}

/// String presente y no vacío tras recortar espacios
fn required_string<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Número presente y distinto de NaN
fn required_number(object: &Map<String, Value>, field: &str) -> Option<f64> {
    object
        .get(field)
        .filter(|v| v.is_number())
        .and_then(Value::as_f64)
        .filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::validation_details;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "vin": "ABCDEFGH000001",
            "manufacturer": "Honda",
            "modelName": "Accord",
            "fuelType": "gasoline",
            "horsePower": 185,
            "modelYear": 2020,
            "purchasePrice": 23000
        })
    }

    fn details(payload: &Value) -> std::collections::BTreeMap<String, Vec<String>> {
        let errors = validate_vehicle_payload(payload).expect_err("payload should be rejected");
        validation_details(&errors)
    }

    #[test]
    fn test_valid_payload_is_accepted() {
        let payload = validate_vehicle_payload(&valid_payload()).unwrap();
        assert_eq!(payload.vin, "ABCDEFGH000001");
        assert_eq!(payload.model_name, "Accord");
        assert_eq!(payload.model_year, 2020);
        assert_eq!(payload.purchase_price, 23000.0);
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_non_object_payloads_get_single_body_error() {
        for payload in [json!(null), json!([1, 2]), json!("text"), json!(42), json!(true)] {
            let details = details(&payload);
            assert_eq!(details.len(), 1);
            assert_eq!(details[BODY_FIELD], vec![MSG_NOT_OBJECT.to_string()]);
        }
    }

    #[test]
    fn test_every_missing_required_field_is_reported() {
        let details = details(&json!({ "foo": "bar" }));
        for field in REQUIRED_STRINGS {
            assert_eq!(details[field], vec![MSG_REQUIRED_STRING.to_string()], "{}", field);
        }
        for field in REQUIRED_NUMBERS {
            assert_eq!(details[field], vec![MSG_REQUIRED_NUMBER.to_string()], "{}", field);
        }
        assert!(!details.contains_key("description"));
    }

    #[test]
    fn test_each_single_missing_field_is_reported() {
        for field in REQUIRED_STRINGS.iter().chain(REQUIRED_NUMBERS.iter()) {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(*field);
            let details = details(&payload);
            assert_eq!(details.len(), 1, "{}", field);
            assert!(details.contains_key(*field));
        }
    }

    #[test]
    fn test_blank_strings_are_rejected() {
        let mut payload = valid_payload();
        payload["manufacturer"] = json!("   ");
        payload["vin"] = json!("");
        let details = details(&payload);
        assert!(details.contains_key("manufacturer"));
        assert!(details.contains_key("vin"));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let mut payload = valid_payload();
        payload["fuelType"] = json!(7);
        payload["horsePower"] = json!("185");
        payload["description"] = json!(12);
        let details = details(&payload);
        assert_eq!(details["fuelType"], vec![MSG_REQUIRED_STRING.to_string()]);
        assert_eq!(details["horsePower"], vec![MSG_REQUIRED_NUMBER.to_string()]);
        assert_eq!(details["description"], vec![MSG_OPTIONAL_STRING.to_string()]);
    }

    #[test]
    fn test_null_description_counts_as_absent() {
        let mut payload = valid_payload();
        payload["description"] = Value::Null;
        let accepted = validate_vehicle_payload(&payload).unwrap();
        assert!(accepted.description.is_none());

        payload["description"] = json!("Silver sedan");
        let accepted = validate_vehicle_payload(&payload).unwrap();
        assert_eq!(accepted.description.as_deref(), Some("Silver sedan"));
    }

    #[test]
    fn test_lower_bounds_are_inclusive() {
        let mut payload = valid_payload();
        payload["horsePower"] = json!(0);
        payload["modelYear"] = json!(1850);
        payload["purchasePrice"] = json!(0);
        assert!(validate_vehicle_payload(&payload).is_ok());
    }

    #[test]
    fn test_one_below_bound_fails_with_message() {
        let cases = [
            ("horsePower", json!(-1), "Must be >= 0"),
            ("modelYear", json!(1849), "Must be >= 1850"),
            ("purchasePrice", json!(-1), "Must be >= 0"),
        ];
        for (field, value, message) in cases {
            let mut payload = valid_payload();
            payload[field] = value;
            let details = details(&payload);
            assert_eq!(details[field], vec![message.to_string()], "{}", field);
        }
    }

    #[test]
    fn test_range_not_checked_when_type_fails() {
        let mut payload = valid_payload();
        payload["modelYear"] = json!("1700");
        let details = details(&payload);
        assert_eq!(details["modelYear"], vec![MSG_REQUIRED_NUMBER.to_string()]);
    }

    #[test]
    fn test_fractional_model_year_is_rejected() {
        let mut payload = valid_payload();
        payload["modelYear"] = json!(2020.5);
        let details = details(&payload);
        assert_eq!(details["modelYear"], vec![MSG_NOT_INTEGER.to_string()]);
    }

    #[test]
    fn test_violations_accumulate_per_field() {
        let mut payload = valid_payload();
        payload["modelYear"] = json!(1700.5);
        let details = details(&payload);
        assert_eq!(
            details["modelYear"],
            vec!["Must be >= 1850".to_string(), MSG_NOT_INTEGER.to_string()]
        );
    }

    #[test]
    fn test_numbers_beyond_decimal_range_are_rejected() {
        let mut payload = valid_payload();
        payload["horsePower"] = json!(1e30);
        payload["purchasePrice"] = json!(1e300);
        let details = details(&payload);
        assert_eq!(details["horsePower"], vec![MSG_OUT_OF_RANGE.to_string()]);
        assert_eq!(details["purchasePrice"], vec![MSG_OUT_OF_RANGE.to_string()]);
    }

    #[test]
    fn test_large_number_within_decimal_range_is_accepted() {
        let mut payload = valid_payload();
        payload["purchasePrice"] = json!(1e20);
        assert!(validate_vehicle_payload(&payload).is_ok());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut payload = valid_payload();
        payload["id"] = json!(99);
        payload["color"] = json!("red");
        assert!(validate_vehicle_payload(&payload).is_ok());
    }
}
