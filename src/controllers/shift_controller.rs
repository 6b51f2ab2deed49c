use chrono::{Duration, NaiveDate};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::shift_dto::{
    ActiveShiftResponse, EndShiftRequest, ShiftResponse, StartShiftRequest, UpdateShiftRequest,
};
use crate::models::user::User;
use crate::repositories::daily_record_repository::DailyRecordRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::plan;
use crate::utils::errors::AppError;
use crate::utils::messages;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// Valida o encerramento: KM final nunca menor que o inicial e distância
/// dentro do teto de plausibilidade configurado.
pub fn validate_close(start_km: i32, end_km: i32, max_distance_km: i32) -> Result<(), AppError> {
    if end_km < start_km {
        return Err(AppError::BadRequest(messages::SHIFT_END_BEFORE_START.to_string()));
    }

    if end_km - start_km > max_distance_km {
        return Err(AppError::BadRequest(
            messages::SHIFT_DISTANCE_IMPLAUSIBLE.to_string(),
        ));
    }

    Ok(())
}

pub struct ShiftController {
    records: DailyRecordRepository,
    vehicles: VehicleRepository,
    max_shift_distance_km: i32,
    free_history_days: i64,
}

impl ShiftController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            records: DailyRecordRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
            max_shift_distance_km: config.max_shift_distance_km,
            free_history_days: config.free_history_days,
        }
    }

    /// Inicia um plantão datado de hoje (relógio do servidor). Falha com
    /// Conflict se já existe plantão aberto ou plantão na data de hoje;
    /// as constraints de unicidade cobrem a corrida entre requisições.
    pub async fn start(
        &self,
        user: &User,
        today: NaiveDate,
        request: StartShiftRequest,
    ) -> Result<ShiftResponse, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicles
            .find_by_id(user.id, request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

        if !vehicle.is_active {
            return Err(AppError::BadRequest(messages::VEHICLE_INACTIVE.to_string()));
        }

        if self.records.find_open(user.id).await?.is_some() {
            return Err(AppError::Conflict(messages::SHIFT_ALREADY_OPEN.to_string()));
        }

        if self.records.exists_for_date(user.id, today).await? {
            return Err(AppError::Conflict(messages::SHIFT_ALREADY_TODAY.to_string()));
        }

        let record = self
            .records
            .create(user.id, vehicle.id, today, request.start_km)
            .await?;

        tracing::info!(user_id = %user.id, record_id = %record.id, "Plantão iniciado");

        self.response(user, record.id).await
    }

    /// Encerra o único plantão aberto do usuário (transição terminal).
    pub async fn end(&self, user: &User, request: EndShiftRequest) -> Result<ShiftResponse, AppError> {
        request.validate()?;

        let record = self
            .records
            .find_open(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::SHIFT_NO_ACTIVE.to_string()))?;

        validate_close(record.start_km, request.end_km, self.max_shift_distance_km)?;

        let closed = self.records.close(record.id, request.end_km).await?;

        tracing::info!(user_id = %user.id, record_id = %closed.id, "Plantão encerrado");

        self.response(user, closed.id).await
    }

    /// Resumo do plantão aberto, para o painel
    pub async fn active(&self, user: &User) -> Result<Option<ActiveShiftResponse>, AppError> {
        let record = self.records.find_open(user.id).await?;

        Ok(record.map(|r| ActiveShiftResponse {
            id: r.id,
            vehicle_id: r.vehicle_id,
            start_km: r.start_km,
            start_time: r.created_at.format("%H:%M").to_string(),
        }))
    }

    /// Histórico de plantões. No plano Grátis só a janela móvel configurada
    /// é listada; registros antigos ficam ocultos, não excluídos.
    pub async fn list(
        &self,
        user: &User,
        today: NaiveDate,
        page: i64,
    ) -> Result<Vec<ShiftResponse>, AppError> {
        let pro = plan::is_pro(user, today);
        let since = plan::history_window_days(pro, self.free_history_days)
            .map(|days| today - Duration::days(days));

        let page = page.max(1);
        let offset = (page - 1) * DEFAULT_PAGE_SIZE;

        let records = self
            .records
            .list(user.id, since, DEFAULT_PAGE_SIZE, offset)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, user: &User, id: Uuid) -> Result<ShiftResponse, AppError> {
        let record = self
            .records
            .find_with_vehicle(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::SHIFT_NOT_FOUND.to_string()))?;

        Ok(record.into())
    }

    /// Edita um registro (aberto ou fechado). Mudança de end_km é
    /// revalidada contra o start_km resultante; totais não passam por aqui.
    pub async fn update(
        &self,
        user: &User,
        id: Uuid,
        request: UpdateShiftRequest,
    ) -> Result<ShiftResponse, AppError> {
        request.validate()?;

        let current = self
            .records
            .find_by_id(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::SHIFT_NOT_FOUND.to_string()))?;

        let vehicle_id = request.vehicle_id.unwrap_or(current.vehicle_id);
        if vehicle_id != current.vehicle_id {
            let vehicle = self
                .vehicles
                .find_by_id(user.id, vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

            if !vehicle.is_active {
                return Err(AppError::BadRequest(messages::VEHICLE_INACTIVE.to_string()));
            }
        }

        let date = request.date.unwrap_or(current.date);
        let start_km = request.start_km.unwrap_or(current.start_km);
        let end_km = request.end_km.or(current.end_km);

        if let Some(end) = end_km {
            validate_close(start_km, end, self.max_shift_distance_km)?;
        }

        let updated = self
            .records
            .update(current.id, vehicle_id, date, start_km, end_km)
            .await?;

        self.response(user, updated.id).await
    }

    pub async fn delete(&self, user: &User, id: Uuid) -> Result<(), AppError> {
        self.records.delete(user.id, id).await
    }

    async fn response(&self, user: &User, record_id: Uuid) -> Result<ShiftResponse, AppError> {
        let record = self
            .records
            .find_with_vehicle(user.id, record_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::SHIFT_NOT_FOUND.to_string()))?;

        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_close_end_before_start() {
        assert!(validate_close(1000, 999, 2000).is_err());
    }

    #[test]
    fn test_validate_close_zero_distance_ok() {
        // end_km == start_km é um encerramento válido com 0 km
        assert!(validate_close(1000, 1000, 2000).is_ok());
    }

    #[test]
    fn test_validate_close_within_ceiling() {
        assert!(validate_close(1000, 1120, 2000).is_ok());
        assert!(validate_close(1000, 3000, 2000).is_ok());
    }

    #[test]
    fn test_validate_close_implausible_distance() {
        assert!(validate_close(1000, 3001, 2000).is_err());
    }
}
