use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::shift_controller::ShiftController;
use crate::controllers::transaction_controller::TransactionController;
use crate::dto::common::ApiResponse;
use crate::dto::shift_dto::{
    ActiveShiftResponse, EndShiftRequest, ShiftResponse, StartShiftRequest, UpdateShiftRequest,
};
use crate::dto::transaction_dto::TransactionResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::messages;

#[derive(Debug, Deserialize)]
struct ShiftListQuery {
    page: Option<i64>,
}

pub fn create_shift_router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_shift))
        .route("/end", post(end_shift))
        .route("/active", get(active_shift))
        .route("/", get(list_shifts))
        .route("/:id", get(get_shift))
        .route("/:id", put(update_shift))
        .route("/:id", delete(delete_shift))
        .route("/:id/transactions", get(list_shift_transactions))
}

async fn start_shift(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<StartShiftRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ShiftResponse>>), AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    let response = controller
        .start(&auth.user, state.clock.today(), request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            messages::SHIFT_STARTED.to_string(),
        )),
    ))
}

async fn end_shift(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<EndShiftRequest>,
) -> Result<Json<ApiResponse<ShiftResponse>>, AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    let response = controller.end(&auth.user, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        messages::SHIFT_ENDED.to_string(),
    )))
}

async fn active_shift(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<Option<ActiveShiftResponse>>, AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    let response = controller.active(&auth.user).await?;
    Ok(Json(response))
}

async fn list_shifts(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(query): Query<ShiftListQuery>,
) -> Result<Json<Vec<ShiftResponse>>, AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    let response = controller
        .list(&auth.user, state.clock.today(), query.page.unwrap_or(1))
        .await?;
    Ok(Json(response))
}

async fn get_shift(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShiftResponse>, AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    let response = controller.get(&auth.user, id).await?;
    Ok(Json(response))
}

async fn update_shift(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateShiftRequest>,
) -> Result<Json<ApiResponse<ShiftResponse>>, AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    let response = controller.update(&auth.user, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        messages::SHIFT_UPDATED.to_string(),
    )))
}

async fn delete_shift(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ShiftController::new(state.pool.clone(), &state.config);
    controller.delete(&auth.user, id).await?;
    Ok(Json(ApiResponse::message_only(
        messages::SHIFT_DELETED.to_string(),
    )))
}

async fn list_shift_transactions(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller.list_by_record(&auth.user, id).await?;
    Ok(Json(response))
}
