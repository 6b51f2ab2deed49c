use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::category::Category;
use crate::models::transaction::TransactionType;

/// Request para criar uma categoria
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    pub r#type: TransactionType,

    #[validate(custom(function = "crate::utils::validation::validate_hex_color"))]
    pub color: Option<String>,

    #[serde(default)]
    pub is_fuel: bool,

    #[serde(default)]
    pub is_maintenance: bool,
}

/// Request para atualizar uma categoria
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(custom(function = "crate::utils::validation::validate_hex_color"))]
    pub color: Option<String>,

    pub is_fuel: Option<bool>,

    pub is_maintenance: Option<bool>,
}

/// Response de categoria
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub r#type: String,
    pub color: String,
    pub is_fuel: bool,
    pub is_maintenance: bool,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            r#type: category.r#type,
            color: category.color,
            is_fuel: category.is_fuel,
            is_maintenance: category.is_maintenance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_name_too_short() {
        let req = CreateCategoryRequest {
            name: "X".to_string(),
            r#type: TransactionType::Cost,
            color: None,
            is_fuel: false,
            is_maintenance: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_category_invalid_color() {
        let req = CreateCategoryRequest {
            name: "Pedágio".to_string(),
            r#type: TransactionType::Cost,
            color: Some("vermelho".to_string()),
            is_fuel: false,
            is_maintenance: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_category_valid() {
        let req = CreateCategoryRequest {
            name: "Pedágio".to_string(),
            r#type: TransactionType::Cost,
            color: Some("#22c55e".to_string()),
            is_fuel: false,
            is_maintenance: false,
        };
        assert!(req.validate().is_ok());
    }
}
