use rust_decimal::Decimal;
use serde::Serialize;

/// Bloco financeiro do relatório mensal
#[derive(Debug, Serialize)]
pub struct FinancialSummary {
    pub income: Decimal,
    pub cost: Decimal,
    pub operational_cost: Decimal,
    pub maintenance_cost: Decimal,
    pub profit: Decimal,
}

/// Indicadores por km do relatório mensal
#[derive(Debug, Serialize)]
pub struct EfficiencySummary {
    pub income_per_km: Decimal,
    pub cost_per_km: Decimal,
    pub profit_per_km: Decimal,
}

/// Linha do relatório mensal consolidado
#[derive(Debug, Serialize)]
pub struct MonthlyReportRow {
    pub month: String,
    pub days_worked: i64,
    pub km_driven: i64,
    pub financial: FinancialSummary,
    pub efficiency: EfficiencySummary,
}
