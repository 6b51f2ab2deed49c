//! Modelo de Maintenance
//!
//! transaction_id presente indica um espelho: a manutenção foi criada
//! automaticamente a partir de uma transação de custo marcada como
//! manutenção e é mantida em sincronia por services::ledger.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de serviço de manutenção
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaintenanceType {
    Oil,
    Tires,
    Mechanic,
    Electrical,
    Documentation,
    Cleaning,
    Other,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Oil => "OIL",
            MaintenanceType::Tires => "TIRES",
            MaintenanceType::Mechanic => "MECHANIC",
            MaintenanceType::Electrical => "ELECTRICAL",
            MaintenanceType::Documentation => "DOCUMENTATION",
            MaintenanceType::Cleaning => "CLEANING",
            MaintenanceType::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub odometer: i32,
    pub cost: Decimal,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub description: String,
    pub next_due_km: Option<i32>,
    pub transaction_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
