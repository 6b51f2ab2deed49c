use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Agregado mensal dos plantões
#[derive(Debug, FromRow)]
pub struct MonthlyShiftRow {
    pub month: NaiveDate,
    pub income: Decimal,
    pub days: i64,
    pub km: i64,
}

/// Linha da exportação CSV do histórico
#[derive(Debug, FromRow)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub vehicle_model: String,
    pub start_km: i32,
    pub end_km: Option<i32>,
    pub total_income: Decimal,
    pub total_cost: Decimal,
}

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn monthly_shifts(&self, user_id: Uuid) -> Result<Vec<MonthlyShiftRow>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyShiftRow>(
            r#"
            SELECT DATE_TRUNC('month', date)::date AS month,
                   COALESCE(SUM(total_income), 0) AS income,
                   COUNT(id) AS days,
                   COALESCE(SUM(GREATEST(COALESCE(end_km, start_km) - start_km, 0)), 0)::bigint AS km
            FROM daily_records
            WHERE user_id = $1
            GROUP BY 1
            ORDER BY 1 DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Custos operacionais por mês: transações de custo fora de categorias
    /// de manutenção (manutenção entra pela tabela própria, evitando dupla
    /// contagem dos espelhos).
    pub async fn monthly_operational_costs(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(NaiveDate, Decimal)>, AppError> {
        let rows: Vec<(NaiveDate, Decimal)> = sqlx::query_as(
            r#"
            SELECT DATE_TRUNC('month', r.date)::date AS month,
                   COALESCE(SUM(t.amount), 0) AS cost
            FROM transactions t
            JOIN daily_records r ON r.id = t.record_id
            JOIN categories c ON c.id = t.category_id
            WHERE r.user_id = $1 AND t.type = 'COST' AND c.is_maintenance = FALSE
            GROUP BY 1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn monthly_maintenance_costs(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(NaiveDate, Decimal)>, AppError> {
        let rows: Vec<(NaiveDate, Decimal)> = sqlx::query_as(
            r#"
            SELECT DATE_TRUNC('month', date)::date AS month,
                   COALESCE(SUM(cost), 0) AS cost
            FROM maintenances
            WHERE user_id = $1
            GROUP BY 1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn export_rows(&self, user_id: Uuid) -> Result<Vec<ExportRow>, AppError> {
        let rows = sqlx::query_as::<_, ExportRow>(
            r#"
            SELECT r.date, v.model_name AS vehicle_model, r.start_km, r.end_km,
                   r.total_income, r.total_cost
            FROM daily_records r
            JOIN vehicles v ON v.id = r.vehicle_id
            WHERE r.user_id = $1
            ORDER BY r.date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
