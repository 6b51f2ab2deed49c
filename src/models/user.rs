//! Modelo de User
//!
//! O plano PRO não é uma coluna: é derivado a cada avaliação a partir de
//! is_superuser, pro_expiry_date e do flag manual legado (ver services::plan).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub is_superuser: bool,
    pub is_pro_legacy: bool,
    pub pro_expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
