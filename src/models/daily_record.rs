//! Modelo de DailyRecord (plantão)
//!
//! end_km NULL significa plantão aberto. total_income/total_cost são sempre
//! derivados das transações pelo motor de recálculo e nunca aceitos do
//! cliente.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub start_km: i32,
    pub end_km: Option<i32>,
    pub total_income: Decimal,
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyRecord {
    /// Plantão aberto enquanto o KM final não foi registrado
    pub fn is_active(&self) -> bool {
        self.end_km.is_none()
    }
}

/// Linha de plantão com os dados do veículo, para listagens e detalhe
#[derive(Debug, Clone, FromRow)]
pub struct DailyRecordWithVehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_model: String,
    pub vehicle_plate: String,
    pub date: NaiveDate,
    pub start_km: i32,
    pub end_km: Option<i32>,
    pub total_income: Decimal,
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
}
