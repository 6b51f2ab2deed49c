use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::transaction::{TransactionType, TransactionWithCategory};

/// Request para lançar uma transação em um plantão
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    pub record_id: Uuid,

    pub category_id: Uuid,

    pub r#type: TransactionType,

    #[validate(custom(function = "crate::utils::validation::validate_positive_amount"))]
    pub amount: Decimal,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    // Campos de abastecimento
    pub liters: Option<Decimal>,

    #[serde(default)]
    pub is_full_tank: bool,

    #[validate(range(min = 0))]
    pub actual_km: Option<i32>,

    // Campo de manutenção
    #[validate(range(min = 0))]
    pub next_due_km: Option<i32>,
}

/// Request de atualização. O tipo da transação é imutável após o
/// lançamento; os demais campos propagam para o espelho quando existir.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTransactionRequest {
    pub category_id: Option<Uuid>,

    #[validate(custom(function = "crate::utils::validation::validate_positive_amount"))]
    pub amount: Option<Decimal>,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    pub liters: Option<Decimal>,

    pub is_full_tank: Option<bool>,

    #[validate(range(min = 0))]
    pub actual_km: Option<i32>,

    #[validate(range(min = 0))]
    pub next_due_km: Option<i32>,
}

/// Response de transação com dados da categoria
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub record_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub category_color: String,
    pub r#type: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub liters: Option<Decimal>,
    pub is_full_tank: bool,
    pub actual_km: Option<i32>,
    pub next_due_km: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<TransactionWithCategory> for TransactionResponse {
    fn from(t: TransactionWithCategory) -> Self {
        Self {
            id: t.id,
            record_id: t.record_id,
            category_id: t.category_id,
            category_name: t.category_name,
            category_color: t.category_color,
            r#type: t.r#type,
            amount: t.amount,
            description: t.description,
            liters: t.liters,
            is_full_tank: t.is_full_tank,
            actual_km: t.actual_km,
            next_due_km: t.next_due_km,
            created_at: t.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn request(amount: &str) -> CreateTransactionRequest {
        CreateTransactionRequest {
            record_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            r#type: TransactionType::Income,
            amount: Decimal::from_str(amount).unwrap(),
            description: None,
            liters: None,
            is_full_tank: false,
            actual_km: None,
            next_due_km: None,
        }
    }

    #[test]
    fn test_rejects_zero_amount() {
        assert!(request("0").validate().is_err());
    }

    #[test]
    fn test_rejects_negative_amount() {
        assert!(request("-10.00").validate().is_err());
    }

    #[test]
    fn test_accepts_positive_amount() {
        assert!(request("150.00").validate().is_ok());
    }
}
