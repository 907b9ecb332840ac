//! Extractor de body JSON
//!
//! Sustituye a `axum::Json` en las rutas de escritura: un body que no es
//! JSON válido corta la petición con 400 antes de llegar al controller, y
//! el valor se entrega sin tipar para que la validación reporte todos los
//! campos a la vez.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::utils::errors::bad_request_error;

pub const MSG_INVALID_JSON: &str = "Request body must be valid JSON";

/// Body JSON sin tipar. Un body vacío se entrega como objeto vacío.
#[derive(Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Los rechazos al leer el body (p. ej. límite de tamaño) conservan su status
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("📥 No se pudo leer el body: {}", e);
            e.into_response()
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!("📥 Body JSON inválido: {}", e);
            bad_request_error(MSG_INVALID_JSON).into_response()
        })
    }
}
