use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::transaction_controller::TransactionController;
use crate::dto::common::ApiResponse;
use crate::dto::transaction_dto::{
    CreateTransactionRequest, TransactionResponse, UpdateTransactionRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::messages;

pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transaction))
        .route("/:id", put(update_transaction))
        .route("/:id", delete(delete_transaction))
}

async fn create_transaction(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransactionResponse>>), AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller.create(&auth.user, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            messages::TRANSACTION_SAVED.to_string(),
        )),
    ))
}

async fn update_transaction(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<Json<ApiResponse<TransactionResponse>>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller.update(&auth.user, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        messages::TRANSACTION_UPDATED.to_string(),
    )))
}

async fn delete_transaction(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    controller.delete(&auth.user, id).await?;
    Ok(Json(ApiResponse::message_only(
        messages::TRANSACTION_DELETED.to_string(),
    )))
}
