use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{Maintenance, MaintenanceType};

/// Request para registrar uma manutenção manualmente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,

    pub date: NaiveDate,

    #[validate(range(min = 0))]
    pub odometer: i32,

    #[validate(custom(function = "crate::utils::validation::validate_positive_amount"))]
    pub cost: Decimal,

    pub r#type: MaintenanceType,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub next_due_km: Option<i32>,
}

/// Request de atualização de manutenção
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    pub date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub odometer: Option<i32>,

    #[validate(custom(function = "crate::utils::validation::validate_positive_amount"))]
    pub cost: Option<Decimal>,

    pub r#type: Option<MaintenanceType>,

    #[validate(length(max = 200))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub next_due_km: Option<i32>,
}

/// Response de manutenção; transaction_id presente indica espelho
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub odometer: i32,
    pub cost: Decimal,
    pub r#type: String,
    pub description: String,
    pub next_due_km: Option<i32>,
    pub transaction_id: Option<Uuid>,
}

impl From<Maintenance> for MaintenanceResponse {
    fn from(m: Maintenance) -> Self {
        Self {
            id: m.id,
            vehicle_id: m.vehicle_id,
            date: m.date,
            odometer: m.odometer,
            cost: m.cost,
            r#type: m.r#type,
            description: m.description,
            next_due_km: m.next_due_km,
            transaction_id: m.transaction_id,
        }
    }
}
