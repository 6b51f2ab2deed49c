use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::category_dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::user::User;
use crate::repositories::category_repository::CategoryRepository;
use crate::utils::errors::AppError;
use crate::utils::messages;

const DEFAULT_COLOR: &str = "#64748b";

pub struct CategoryController {
    repository: CategoryRepository,
}

impl CategoryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CategoryRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &User,
        request: CreateCategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        request.validate()?;

        let category = self
            .repository
            .create(
                user.id,
                request.name,
                request.r#type.as_str(),
                request.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                request.is_fuel,
                request.is_maintenance,
            )
            .await?;

        Ok(category.into())
    }

    pub async fn list(&self, user: &User) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = self.repository.find_by_user(user.id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, user: &User, id: Uuid) -> Result<CategoryResponse, AppError> {
        let category = self
            .repository
            .find_by_id(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::CATEGORY_NOT_FOUND.to_string()))?;

        Ok(category.into())
    }

    pub async fn update(
        &self,
        user: &User,
        id: Uuid,
        request: UpdateCategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        request.validate()?;

        let category = self
            .repository
            .update(
                user.id,
                id,
                request.name,
                request.color,
                request.is_fuel,
                request.is_maintenance,
            )
            .await?;

        Ok(category.into())
    }

    pub async fn delete(&self, user: &User, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(user.id, id).await
    }
}
