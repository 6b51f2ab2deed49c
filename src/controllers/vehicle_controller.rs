use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, LastKmResponse, UpdateVehicleRequest, UpdateVehicleStatusRequest,
    VehicleDetailResponse, VehicleResponse,
};
use crate::models::user::User;
use crate::models::vehicle::FuelType;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::{metrics, plan};
use crate::utils::errors::AppError;
use crate::utils::messages;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Cadastra um veículo respeitando o limite do plano Grátis.
    pub async fn create(
        &self,
        user: &User,
        today: NaiveDate,
        request: CreateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let pro = plan::is_pro(user, today);
        let count = self.repository.count_by_user(user.id).await?;

        if !plan::can_create_vehicle(pro, count) {
            return Err(AppError::Forbidden(messages::VEHICLE_LIMIT_REACHED.to_string()));
        }

        let vehicle = self
            .repository
            .create(
                user.id,
                request.model_name,
                request.plate.unwrap_or_default(),
                request.fuel_type.unwrap_or(FuelType::Flex).as_str(),
                request.initial_km,
            )
            .await?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, user: &User) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_by_user(user.id).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    /// Detalhe do veículo com os indicadores derivados: odômetro corrente,
    /// média de consumo e situação da próxima manutenção.
    pub async fn get_detail(&self, user: &User, id: Uuid) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

        let inputs = self.repository.odometer_inputs(vehicle.id).await?;
        let fills = self.repository.recent_full_tank_fills(vehicle.id).await?;
        let next_due = self.repository.last_next_due_km(vehicle.id).await?;

        let current_odometer = metrics::current_odometer(vehicle.initial_km, inputs);
        let fuel_average = metrics::fuel_average(&fills);
        let maintenance_status = metrics::maintenance_status(next_due, current_odometer);

        Ok(VehicleDetailResponse {
            vehicle: vehicle.into(),
            current_odometer,
            fuel_average,
            maintenance_status,
        })
    }

    pub async fn update(
        &self,
        user: &User,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                user.id,
                id,
                request.model_name,
                request.plate,
                request.fuel_type.map(|f| f.as_str().to_string()),
                request.initial_km,
            )
            .await?;

        Ok(vehicle.into())
    }

    /// Ativa/desativa o veículo. No plano Grátis o slot ativo é congelado:
    /// não dá para desativar o único ativo nem ativar um segundo.
    pub async fn set_active(
        &self,
        user: &User,
        today: NaiveDate,
        id: Uuid,
        request: UpdateVehicleStatusRequest,
    ) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

        if vehicle.is_active == request.is_active {
            return Ok(vehicle.into());
        }

        let pro = plan::is_pro(user, today);
        let active_count = self.repository.count_active_by_user(user.id).await?;

        if !plan::can_toggle_vehicle(pro, vehicle.is_active, active_count) {
            return Err(AppError::Forbidden(messages::VEHICLE_SLOT_FROZEN.to_string()));
        }

        let updated = self.repository.set_active(vehicle.id, request.is_active).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, user: &User, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(user.id, id).await
    }

    /// Sugestão de KM para abrir o próximo plantão: último fechamento do
    /// veículo, senão o KM de cadastro.
    pub async fn last_km(&self, user: &User, vehicle_id: Uuid) -> Result<LastKmResponse, AppError> {
        if let Some(km) = self.repository.last_closed_end_km(user.id, vehicle_id).await? {
            return Ok(LastKmResponse {
                km,
                source: "last_shift",
                message: format!("Último fechamento: {} km", km),
            });
        }

        let vehicle = self
            .repository
            .find_by_id(user.id, vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

        Ok(LastKmResponse {
            km: vehicle.initial_km,
            source: "vehicle_register",
            message: format!(
                "Primeira jornada! Sugerido KM do cadastro ({} km)",
                vehicle.initial_km
            ),
        })
    }
}
