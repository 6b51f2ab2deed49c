use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::daily_record::{DailyRecord, DailyRecordWithVehicle};
use crate::utils::errors::{map_constraint_error, AppError};
use crate::utils::messages;

const SELECT_WITH_VEHICLE: &str = r#"
    SELECT r.id, r.user_id, r.vehicle_id,
           v.model_name AS vehicle_model, v.plate AS vehicle_plate,
           r.date, r.start_km, r.end_km, r.total_income, r.total_cost, r.created_at
    FROM daily_records r
    JOIN vehicles v ON v.id = r.vehicle_id
"#;

pub struct DailyRecordRepository {
    pool: PgPool,
}

impl DailyRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Plantão aberto do usuário (end_km IS NULL), se existir
    pub async fn find_open(&self, user_id: Uuid) -> Result<Option<DailyRecord>, AppError> {
        let record = sqlx::query_as::<_, DailyRecord>(
            "SELECT * FROM daily_records WHERE user_id = $1 AND end_km IS NULL",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn exists_for_date(&self, user_id: Uuid, date: NaiveDate) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM daily_records WHERE user_id = $1 AND date = $2)",
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Abre um plantão. As constraints de unicidade ((user, date) e índice
    /// parcial de plantão aberto) fecham a corrida check-then-act entre
    /// requisições concorrentes; a violação vira Conflict.
    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        date: NaiveDate,
        start_km: i32,
    ) -> Result<DailyRecord, AppError> {
        let record = sqlx::query_as::<_, DailyRecord>(
            r#"
            INSERT INTO daily_records
                (id, user_id, vehicle_id, date, start_km, end_km,
                 total_income, total_cost, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NULL, 0, 0, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(vehicle_id)
        .bind(date)
        .bind(start_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, messages::SHIFT_ALREADY_TODAY))?;

        Ok(record)
    }

    /// Encerra o plantão registrando o KM final (transição terminal)
    pub async fn close(&self, record_id: Uuid, end_km: i32) -> Result<DailyRecord, AppError> {
        let record = sqlx::query_as::<_, DailyRecord>(
            "UPDATE daily_records SET end_km = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(record_id)
        .bind(end_km)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Option<DailyRecord>, AppError> {
        let record = sqlx::query_as::<_, DailyRecord>(
            "SELECT * FROM daily_records WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn find_with_vehicle(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<DailyRecordWithVehicle>, AppError> {
        let sql = format!("{} WHERE r.id = $1 AND r.user_id = $2", SELECT_WITH_VEHICLE);

        let record = sqlx::query_as::<_, DailyRecordWithVehicle>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Lista plantões do usuário, mais recentes primeiro. `since` aplica a
    /// janela de histórico do plano Grátis (plantões antigos ficam ocultos,
    /// não excluídos).
    pub async fn list(
        &self,
        user_id: Uuid,
        since: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DailyRecordWithVehicle>, AppError> {
        let records = match since {
            Some(since) => {
                let sql = format!(
                    "{} WHERE r.user_id = $1 AND r.date >= $2 ORDER BY r.date DESC LIMIT $3 OFFSET $4",
                    SELECT_WITH_VEHICLE
                );
                sqlx::query_as::<_, DailyRecordWithVehicle>(&sql)
                    .bind(user_id)
                    .bind(since)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "{} WHERE r.user_id = $1 ORDER BY r.date DESC LIMIT $2 OFFSET $3",
                    SELECT_WITH_VEHICLE
                );
                sqlx::query_as::<_, DailyRecordWithVehicle>(&sql)
                    .bind(user_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(records)
    }

    /// Atualiza os campos editáveis do registro. Totais ficam de fora:
    /// são de escrita exclusiva do motor de recálculo.
    pub async fn update(
        &self,
        record_id: Uuid,
        vehicle_id: Uuid,
        date: NaiveDate,
        start_km: i32,
        end_km: Option<i32>,
    ) -> Result<DailyRecord, AppError> {
        let record = sqlx::query_as::<_, DailyRecord>(
            r#"
            UPDATE daily_records
            SET vehicle_id = $2, date = $3, start_km = $4, end_km = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record_id)
        .bind(vehicle_id)
        .bind(date)
        .bind(start_km)
        .bind(end_km)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, messages::SHIFT_ALREADY_TODAY))?;

        Ok(record)
    }

    /// Exclui o registro; as transações filhas (e seus espelhos) caem em
    /// cascata no storage.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM daily_records WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(messages::SHIFT_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
