//! Rutas HTTP
//!
//! `create_app` arma el router completo sobre un `AppState` ya construido.

pub mod health_routes;
pub mod vehicle_routes;

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, BoxError, Router};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_app(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/vehicle", vehicle_routes::create_vehicle_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_middleware())
                .layer(HandleErrorLayer::new(handle_layer_error))
                // Un store colgado no bloquea la petición indefinidamente
                .timeout(request_timeout),
        )
        .with_state(state)
}

/// Errores de las capas de tower convertidos al contrato JSON de la API
async fn handle_layer_error(error: BoxError) -> AppError {
    if error.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_elapsed_becomes_timeout() {
        let error: BoxError = Box::new(Elapsed::new());
        assert!(matches!(handle_layer_error(error).await, AppError::Timeout));
    }

    #[tokio::test]
    async fn test_other_layer_errors_become_internal() {
        let error: BoxError = "overloaded".into();
        assert!(matches!(
            handle_layer_error(error).await,
            AppError::Internal(msg) if msg == "overloaded"
        ));
    }
}
