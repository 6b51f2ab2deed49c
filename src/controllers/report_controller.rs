use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::report_dto::{EfficiencySummary, FinancialSummary, MonthlyReportRow};
use crate::models::user::User;
use crate::repositories::report_repository::ReportRepository;
use crate::services::{metrics, plan};
use crate::utils::errors::AppError;
use crate::utils::messages;

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    /// Relatório mensal consolidado (exclusivo PRO). O custo real do mês
    /// soma os custos operacionais das transações com as manutenções da
    /// tabela própria, sem contar duas vezes os espelhos.
    pub async fn monthly(
        &self,
        user: &User,
        today: NaiveDate,
    ) -> Result<Vec<MonthlyReportRow>, AppError> {
        self.check_access(user, today)?;

        let shifts = self.repository.monthly_shifts(user.id).await?;
        let ops: HashMap<NaiveDate, Decimal> = self
            .repository
            .monthly_operational_costs(user.id)
            .await?
            .into_iter()
            .collect();
        let maint: HashMap<NaiveDate, Decimal> = self
            .repository
            .monthly_maintenance_costs(user.id)
            .await?
            .into_iter()
            .collect();

        let rows = shifts
            .into_iter()
            .map(|row| {
                let operational_cost = ops.get(&row.month).copied().unwrap_or(Decimal::ZERO);
                let maintenance_cost = maint.get(&row.month).copied().unwrap_or(Decimal::ZERO);
                let cost = operational_cost + maintenance_cost;
                let profit = row.income - cost;

                MonthlyReportRow {
                    month: row.month.format("%Y-%m").to_string(),
                    days_worked: row.days,
                    km_driven: row.km,
                    financial: FinancialSummary {
                        income: row.income,
                        cost,
                        operational_cost,
                        maintenance_cost,
                        profit,
                    },
                    efficiency: EfficiencySummary {
                        income_per_km: metrics::per_km(row.income, row.km).round_dp(2),
                        cost_per_km: metrics::per_km(cost, row.km).round_dp(2),
                        profit_per_km: metrics::per_km(profit, row.km).round_dp(2),
                    },
                }
            })
            .collect();

        Ok(rows)
    }

    /// Exportação CSV do histórico de plantões (exclusivo PRO)
    pub async fn export_csv(&self, user: &User, today: NaiveDate) -> Result<Vec<u8>, AppError> {
        self.check_access(user, today)?;

        let rows = self.repository.export_rows(user.id).await?;

        let mut writer = csv::Writer::from_writer(vec![]);

        writer
            .write_record([
                "Data", "Veículo", "KM Inicial", "KM Final", "Receita", "Custos", "Lucro",
            ])
            .map_err(|e| AppError::Internal(format!("Erro escrevendo CSV: {}", e)))?;

        for row in rows {
            let profit = metrics::profit(row.total_income, row.total_cost);

            writer
                .write_record([
                    row.date.format("%Y-%m-%d").to_string(),
                    row.vehicle_model,
                    row.start_km.to_string(),
                    row.end_km.map(|km| km.to_string()).unwrap_or_default(),
                    row.total_income.to_string(),
                    row.total_cost.to_string(),
                    profit.to_string(),
                ])
                .map_err(|e| AppError::Internal(format!("Erro escrevendo CSV: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("Erro finalizando CSV: {}", e)))
    }

    fn check_access(&self, user: &User, today: NaiveDate) -> Result<(), AppError> {
        if !plan::can_access_reports(plan::is_pro(user, today)) {
            return Err(AppError::Forbidden(messages::PRO_ONLY.to_string()));
        }
        Ok(())
    }
}
