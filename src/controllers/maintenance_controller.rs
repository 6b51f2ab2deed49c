use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceResponse, UpdateMaintenanceRequest,
};
use crate::models::user::User;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::messages;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Registro manual de manutenção (os espelhos automáticos são criados
    /// pelo ledger a partir de transações de custo).
    pub async fn create(
        &self,
        user: &User,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicles
            .find_by_id(user.id, request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

        let maintenance = self
            .repository
            .create(
                user.id,
                vehicle.id,
                request.date,
                request.odometer,
                request.cost,
                request.r#type.as_str(),
                request.description.unwrap_or_default(),
                request.next_due_km,
            )
            .await?;

        Ok(maintenance.into())
    }

    pub async fn list(
        &self,
        user: &User,
        vehicle_id: Option<Uuid>,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        let maintenances = self.repository.find_by_user(user.id, vehicle_id).await?;
        Ok(maintenances.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, user: &User, id: Uuid) -> Result<MaintenanceResponse, AppError> {
        let maintenance = self
            .repository
            .find_by_id(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::MAINTENANCE_NOT_FOUND.to_string()))?;

        Ok(maintenance.into())
    }

    pub async fn update(
        &self,
        user: &User,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        request.validate()?;

        let maintenance = self
            .repository
            .update(
                user.id,
                id,
                request.date,
                request.odometer,
                request.cost,
                request.r#type.map(|t| t.as_str().to_string()),
                request.description,
                request.next_due_km,
            )
            .await?;

        Ok(maintenance.into())
    }

    pub async fn delete(&self, user: &User, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(user.id, id).await
    }
}
