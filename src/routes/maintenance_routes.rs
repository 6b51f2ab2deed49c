use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceResponse, UpdateMaintenanceRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::messages;

#[derive(Debug, Deserialize)]
struct MaintenanceListQuery {
    vehicle_id: Option<Uuid>,
}

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/", get(list_maintenances))
        .route("/:id", get(get_maintenance))
        .route("/:id", put(update_maintenance))
        .route("/:id", delete(delete_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceResponse>>), AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(&auth.user, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            messages::MAINTENANCE_CREATED.to_string(),
        )),
    ))
}

async fn list_maintenances(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(query): Query<MaintenanceListQuery>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list(&auth.user, query.vehicle_id).await?;
    Ok(Json(response))
}

async fn get_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.get(&auth.user, id).await?;
    Ok(Json(response))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update(&auth.user, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        messages::MAINTENANCE_UPDATED.to_string(),
    )))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete(&auth.user, id).await?;
    Ok(Json(ApiResponse::message_only(
        messages::MAINTENANCE_DELETED.to_string(),
    )))
}
