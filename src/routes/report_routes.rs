use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::MonthlyReportRow;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/monthly", get(monthly_report))
        .route("/export", get(export_report))
}

async fn monthly_report(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<MonthlyReportRow>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.monthly(&auth.user, state.clock.today()).await?;
    Ok(Json(response))
}

async fn export_report(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let csv = controller
        .export_csv(&auth.user, state.clock.today())
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"relatorio_financeiro.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
