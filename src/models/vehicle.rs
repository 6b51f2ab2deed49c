//! Modelo de Vehicle
//!
//! A coluna fuel_type é armazenada como texto; o enum FuelType faz a
//! conversão na borda da API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipos de combustível aceitos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    Gasoline,
    Ethanol,
    Diesel,
    Cng,
    Electric,
    Flex,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "GASOLINE",
            FuelType::Ethanol => "ETHANOL",
            FuelType::Diesel => "DIESEL",
            FuelType::Cng => "CNG",
            FuelType::Electric => "ELECTRIC",
            FuelType::Flex => "FLEX",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub model_name: String,
    pub plate: String,
    pub fuel_type: String,
    pub initial_km: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Agregados por veículo usados no cálculo do odômetro corrente
/// (ver services::metrics::current_odometer).
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleOdometerInputs {
    pub max_end_km: Option<i32>,
    pub max_start_km: Option<i32>,
    pub max_actual_km: Option<i32>,
}
