use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance::Maintenance;
use crate::utils::errors::AppError;
use crate::utils::messages;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registro manual de manutenção (sem vínculo com transação)
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        date: NaiveDate,
        odometer: i32,
        cost: Decimal,
        kind: &str,
        description: String,
        next_due_km: Option<i32>,
    ) -> Result<Maintenance, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenances
                (id, user_id, vehicle_id, date, odometer, cost, type,
                 description, next_due_km, transaction_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NULL, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(vehicle_id)
        .bind(date)
        .bind(odometer)
        .bind(cost)
        .bind(kind)
        .bind(description)
        .bind(next_due_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Option<Maintenance>, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenances WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        vehicle_id: Option<Uuid>,
    ) -> Result<Vec<Maintenance>, AppError> {
        let maintenances = match vehicle_id {
            Some(vehicle_id) => {
                sqlx::query_as::<_, Maintenance>(
                    "SELECT * FROM maintenances WHERE user_id = $1 AND vehicle_id = $2 ORDER BY date DESC",
                )
                .bind(user_id)
                .bind(vehicle_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Maintenance>(
                    "SELECT * FROM maintenances WHERE user_id = $1 ORDER BY date DESC",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(maintenances)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        date: Option<NaiveDate>,
        odometer: Option<i32>,
        cost: Option<Decimal>,
        kind: Option<String>,
        description: Option<String>,
        next_due_km: Option<i32>,
    ) -> Result<Maintenance, AppError> {
        let current = self
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::MAINTENANCE_NOT_FOUND.to_string()))?;

        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenances
            SET date = $2, odometer = $3, cost = $4, type = $5,
                description = $6, next_due_km = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date.unwrap_or(current.date))
        .bind(odometer.unwrap_or(current.odometer))
        .bind(cost.unwrap_or(current.cost))
        .bind(kind.unwrap_or(current.r#type))
        .bind(description.unwrap_or(current.description))
        .bind(next_due_km.or(current.next_due_km))
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM maintenances WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(messages::MAINTENANCE_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
