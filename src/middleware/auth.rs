//! Middleware de autenticação JWT
//!
//! Valida o token Bearer, carrega o usuário do banco e injeta a linha
//! completa na requisição. Os controllers recebem o usuário inteiro para
//! que as verificações de plano derivem is_pro a cada avaliação.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::user::User;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};
use crate::utils::messages;

/// Usuário autenticado injetado nas requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(messages::AUTH_TOKEN_REQUIRED.to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized(messages::AUTH_TOKEN_INVALID.to_string()))?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized(messages::AUTH_USER_NOT_FOUND.to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}
