use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleDto;
use crate::middleware::json_body::JsonBody;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:vin",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleDto>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<(StatusCode, Json<VehicleDto>), AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.create(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<VehicleDto>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.get_by_vin(&vin).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<Json<VehicleDto>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.update(&vin, payload).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    controller.delete(&vin).await?;
    Ok(StatusCode::NO_CONTENT)
}
