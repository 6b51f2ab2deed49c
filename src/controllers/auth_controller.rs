use chrono::NaiveDate;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, RegisterRequest, TokenResponse, UserProfileResponse};
use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::services::plan;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::messages;

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    /// Cadastra o usuário; as categorias padrão são semeadas junto.
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        request.validate()?;

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self
            .repository
            .create(request.username, request.email, password_hash, request.first_name)
            .await?;

        tracing::info!(user_id = %user.id, "Novo usuário cadastrado");

        let token = generate_token(user.id, &self.jwt_config)?;

        Ok(TokenResponse {
            token,
            expires_in: self.jwt_config.expiration,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(messages::AUTH_INVALID_CREDENTIALS.to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            return Err(AppError::Unauthorized(
                messages::AUTH_INVALID_CREDENTIALS.to_string(),
            ));
        }

        let token = generate_token(user.id, &self.jwt_config)?;

        Ok(TokenResponse {
            token,
            expires_in: self.jwt_config.expiration,
        })
    }

    /// Perfil do usuário autenticado. is_pro é derivado agora, com a data
    /// corrente, nunca lido de cache.
    pub fn profile(user: &User, today: NaiveDate) -> UserProfileResponse {
        UserProfileResponse {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            is_pro: plan::is_pro(user, today),
            pro_expiry_date: user.pro_expiry_date,
        }
    }
}
