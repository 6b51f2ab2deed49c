//! Modelo de Transaction

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo da transação: receita ou custo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Cost,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Cost => "COST",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub record_id: Uuid,
    pub category_id: Uuid,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub liters: Option<Decimal>,
    pub is_full_tank: bool,
    pub actual_km: Option<i32>,
    pub next_due_km: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Linha de transação com dados da categoria, para o detalhe do plantão
#[derive(Debug, Clone, FromRow)]
pub struct TransactionWithCategory {
    pub id: Uuid,
    pub record_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub category_color: String,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub liters: Option<Decimal>,
    pub is_full_tank: bool,
    pub actual_km: Option<i32>,
    pub next_due_km: Option<i32>,
    pub created_at: DateTime<Utc>,
}
