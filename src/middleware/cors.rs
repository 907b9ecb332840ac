//! Middleware de CORS

use tower_http::cors::CorsLayer;

/// CORS abierto: la API no maneja credenciales ni sesiones
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
