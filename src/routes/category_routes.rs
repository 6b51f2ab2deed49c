use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::category_controller::CategoryController;
use crate::dto::category_dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::messages;

pub fn create_category_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category))
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
        .route("/:id", put(update_category))
        .route("/:id", delete(delete_category))
}

async fn create_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponse>>), AppError> {
    let controller = CategoryController::new(state.pool.clone());
    let response = controller.create(&auth.user, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            messages::CATEGORY_CREATED.to_string(),
        )),
    ))
}

async fn list_categories(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let controller = CategoryController::new(state.pool.clone());
    let response = controller.list(&auth.user).await?;
    Ok(Json(response))
}

async fn get_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryResponse>, AppError> {
    let controller = CategoryController::new(state.pool.clone());
    let response = controller.get(&auth.user, id).await?;
    Ok(Json(response))
}

async fn update_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<CategoryResponse>>, AppError> {
    let controller = CategoryController::new(state.pool.clone());
    let response = controller.update(&auth.user, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        messages::CATEGORY_UPDATED.to_string(),
    )))
}

async fn delete_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CategoryController::new(state.pool.clone());
    controller.delete(&auth.user, id).await?;
    Ok(Json(ApiResponse::message_only(
        messages::CATEGORY_DELETED.to_string(),
    )))
}
