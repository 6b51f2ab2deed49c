use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{FuelType, Vehicle};
use crate::services::metrics::MaintenanceStatus;

/// Request para cadastrar um novo veículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub model_name: String,

    #[validate(length(max = 20))]
    pub plate: Option<String>,

    pub fuel_type: Option<FuelType>,

    #[validate(range(min = 0))]
    pub initial_km: i32,
}

/// Request para atualizar um veículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub model_name: Option<String>,

    #[validate(length(max = 20))]
    pub plate: Option<String>,

    pub fuel_type: Option<FuelType>,

    #[validate(range(min = 0))]
    pub initial_km: Option<i32>,
}

/// Request para ativar/desativar um veículo (sujeito à política de plano)
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub is_active: bool,
}

/// Response de veículo para a API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub model_name: String,
    pub plate: String,
    pub fuel_type: String,
    pub initial_km: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            model_name: vehicle.model_name,
            plate: vehicle.plate,
            fuel_type: vehicle.fuel_type,
            initial_km: vehicle.initial_km,
            is_active: vehicle.is_active,
            created_at: vehicle.created_at,
        }
    }
}

/// Response de detalhe com os indicadores derivados do veículo
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    #[serde(flatten)]
    pub vehicle: VehicleResponse,
    pub current_odometer: i32,
    pub fuel_average: Option<f64>,
    pub maintenance_status: Option<MaintenanceStatus>,
}

/// Sugestão de KM inicial para o próximo plantão
#[derive(Debug, Serialize)]
pub struct LastKmResponse {
    pub km: i32,
    pub source: &'static str,
    pub message: String,
}
