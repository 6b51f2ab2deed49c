use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::category::DEFAULT_CATEGORIES;
use crate::models::user::User;
use crate::utils::errors::{map_constraint_error, AppError};
use crate::utils::messages;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cria o usuário e semeia as categorias padrão na mesma transação
    /// de storage.
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        first_name: Option<String>,
    ) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users
                (id, username, email, password_hash, first_name,
                 is_superuser, is_pro_legacy, pro_expiry_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, FALSE, NULL, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_constraint_error(e, messages::AUTH_USER_EXISTS))?;

        for (name, kind, color, is_fuel, is_maintenance) in DEFAULT_CATEGORIES {
            sqlx::query(
                r#"
                INSERT INTO categories
                    (id, user_id, name, type, color, is_fuel, is_maintenance, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user.id)
            .bind(name)
            .bind(kind)
            .bind(color)
            .bind(is_fuel)
            .bind(is_maintenance)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
