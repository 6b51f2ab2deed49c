//! Modelo de Category

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub color: String,
    pub is_fuel: bool,
    pub is_maintenance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Categorias padrão criadas no cadastro de um novo usuário.
/// (nome, tipo, cor, is_fuel, is_maintenance)
pub const DEFAULT_CATEGORIES: [(&str, &str, &str, bool, bool); 4] = [
    ("Abastecimento", "COST", "#ef4444", true, false),
    ("Manutenção", "COST", "#f97316", false, true),
    ("Alimentação", "COST", "#eab308", false, false),
    ("Outros", "COST", "#64748b", false, false),
];
