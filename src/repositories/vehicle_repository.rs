use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleOdometerInputs};
use crate::services::metrics::FuelFill;
use crate::utils::errors::{map_constraint_error, AppError};
use crate::utils::messages;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        model_name: String,
        plate: String,
        fuel_type: &str,
        initial_km: i32,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (id, user_id, model_name, plate, fuel_type, initial_km, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(model_name)
        .bind(plate)
        .bind(fuel_type)
        .bind(initial_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(vehicle)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicles WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn count_active_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM vehicles WHERE user_id = $1 AND is_active = TRUE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        model_name: Option<String>,
        plate: Option<String>,
        fuel_type: Option<String>,
        initial_km: Option<i32>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET model_name = $2, plate = $3, fuel_type = $4, initial_km = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(model_name.unwrap_or(current.model_name))
        .bind(plate.unwrap_or(current.plate))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(initial_km.unwrap_or(current.initial_km))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET is_active = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Veículos com plantões registrados são protegidos contra exclusão
    /// (RESTRICT no storage; a violação vira Conflict).
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, messages::VEHICLE_IN_USE))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(messages::VEHICLE_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    /// Agregados usados por metrics::current_odometer
    pub async fn odometer_inputs(&self, vehicle_id: Uuid) -> Result<VehicleOdometerInputs, AppError> {
        let (max_end_km, max_start_km, max_actual_km): (Option<i32>, Option<i32>, Option<i32>) =
            sqlx::query_as(
                r#"
                SELECT
                    (SELECT MAX(end_km) FROM daily_records WHERE vehicle_id = $1),
                    (SELECT MAX(start_km) FROM daily_records WHERE vehicle_id = $1),
                    (SELECT MAX(t.actual_km)
                     FROM transactions t
                     JOIN daily_records r ON r.id = t.record_id
                     WHERE r.vehicle_id = $1)
                "#,
            )
            .bind(vehicle_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(VehicleOdometerInputs {
            max_end_km,
            max_start_km,
            max_actual_km,
        })
    }

    /// Os dois abastecimentos de tanque cheio mais recentes do veículo,
    /// do mais novo para o mais antigo (ver metrics::fuel_average).
    pub async fn recent_full_tank_fills(&self, vehicle_id: Uuid) -> Result<Vec<FuelFill>, AppError> {
        let rows: Vec<(i32, Decimal)> = sqlx::query_as(
            r#"
            SELECT t.actual_km, t.liters
            FROM transactions t
            JOIN daily_records r ON r.id = t.record_id
            JOIN categories c ON c.id = t.category_id
            WHERE r.vehicle_id = $1
              AND c.is_fuel = TRUE
              AND t.is_full_tank = TRUE
              AND t.actual_km IS NOT NULL
              AND t.liters IS NOT NULL
            ORDER BY t.created_at DESC
            LIMIT 2
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(actual_km, liters)| FuelFill { actual_km, liters })
            .collect())
    }

    /// next_due_km da transação mais recente que informou um
    pub async fn last_next_due_km(&self, vehicle_id: Uuid) -> Result<Option<i32>, AppError> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT t.next_due_km
            FROM transactions t
            JOIN daily_records r ON r.id = t.record_id
            WHERE r.vehicle_id = $1 AND t.next_due_km IS NOT NULL
            ORDER BY t.created_at DESC
            LIMIT 1
            "#,
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(km,)| km))
    }

    /// Último KM de fechamento registrado para o veículo (sugestão de
    /// abertura do próximo plantão)
    pub async fn last_closed_end_km(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<Option<i32>, AppError> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT end_km
            FROM daily_records
            WHERE user_id = $1 AND vehicle_id = $2 AND end_km IS NOT NULL
            ORDER BY date DESC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(km,)| km))
    }
}
