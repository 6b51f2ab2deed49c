use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::category::Category;
use crate::utils::errors::{map_constraint_error, AppError};
use crate::utils::messages;

pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        name: String,
        kind: &str,
        color: String,
        is_fuel: bool,
        is_maintenance: bool,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories
                (id, user_id, name, type, color, is_fuel, is_maintenance, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(name)
        .bind(kind)
        .bind(color)
        .bind(is_fuel)
        .bind(is_maintenance)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Option<Category>, AppError> {
        let category =
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE user_id = $1 ORDER BY name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        name: Option<String>,
        color: Option<String>,
        is_fuel: Option<bool>,
        is_maintenance: Option<bool>,
    ) -> Result<Category, AppError> {
        let current = self
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::CATEGORY_NOT_FOUND.to_string()))?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, color = $3, is_fuel = $4, is_maintenance = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(color.unwrap_or(current.color))
        .bind(is_fuel.unwrap_or(current.is_fuel))
        .bind(is_maintenance.unwrap_or(current.is_maintenance))
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    /// Categoria referenciada por transações é protegida contra exclusão
    /// (RESTRICT no storage; a violação vira Conflict).
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, messages::CATEGORY_IN_USE))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(messages::CATEGORY_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
