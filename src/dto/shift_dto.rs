use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::daily_record::DailyRecordWithVehicle;
use crate::services::metrics;

/// Request para iniciar um plantão. A data NÃO é aceita do cliente:
/// é carimbada pelo relógio do servidor.
#[derive(Debug, Deserialize, Validate)]
pub struct StartShiftRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 0))]
    pub start_km: i32,
}

/// Request para encerrar o plantão aberto
#[derive(Debug, Deserialize, Validate)]
pub struct EndShiftRequest {
    #[validate(range(min = 0))]
    pub end_km: i32,
}

/// Request de edição de um registro diário. Totais não são aceitos aqui:
/// são de escrita exclusiva do motor de recálculo.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateShiftRequest {
    pub vehicle_id: Option<Uuid>,

    pub date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub start_km: Option<i32>,

    #[validate(range(min = 0))]
    pub end_km: Option<i32>,
}

/// Response de plantão com os indicadores derivados
#[derive(Debug, Serialize)]
pub struct ShiftResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_model: String,
    pub vehicle_plate: String,
    pub date: NaiveDate,
    pub start_km: i32,
    pub end_km: Option<i32>,
    pub is_active: bool,
    pub total_income: Decimal,
    pub total_cost: Decimal,
    pub km_driven: i32,
    pub profit: Decimal,
    pub income_per_km: Decimal,
    pub cost_per_km: Decimal,
    pub profit_per_km: Decimal,
}

impl From<DailyRecordWithVehicle> for ShiftResponse {
    fn from(record: DailyRecordWithVehicle) -> Self {
        let km = metrics::km_driven(record.start_km, record.end_km);
        let profit = metrics::profit(record.total_income, record.total_cost);

        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            vehicle_model: record.vehicle_model,
            vehicle_plate: record.vehicle_plate,
            date: record.date,
            start_km: record.start_km,
            end_km: record.end_km,
            is_active: record.end_km.is_none(),
            total_income: record.total_income,
            total_cost: record.total_cost,
            km_driven: km,
            profit,
            income_per_km: metrics::per_km(record.total_income, km as i64),
            cost_per_km: metrics::per_km(record.total_cost, km as i64),
            profit_per_km: metrics::per_km(profit, km as i64),
        }
    }
}

/// Resumo do plantão aberto, exibido no painel
#[derive(Debug, Serialize)]
pub struct ActiveShiftResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub start_km: i32,
    pub start_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn record(start_km: i32, end_km: Option<i32>) -> DailyRecordWithVehicle {
        DailyRecordWithVehicle {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            vehicle_model: "Onix".to_string(),
            vehicle_plate: "ABC1D23".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            start_km,
            end_km,
            total_income: Decimal::from_str("150.00").unwrap(),
            total_cost: Decimal::from_str("40.00").unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_shift_response_open() {
        let resp = ShiftResponse::from(record(1000, None));
        assert!(resp.is_active);
        assert_eq!(resp.km_driven, 0);
        assert_eq!(resp.cost_per_km, Decimal::ZERO);
        assert_eq!(resp.profit, Decimal::from_str("110.00").unwrap());
    }

    #[test]
    fn test_shift_response_closed() {
        let resp = ShiftResponse::from(record(1000, Some(1120)));
        assert!(!resp.is_active);
        assert_eq!(resp.km_driven, 120);
        assert_eq!(resp.profit, Decimal::from_str("110.00").unwrap());
    }

    #[test]
    fn test_shift_response_zero_distance_closed() {
        // end_km == start_km fecha o plantão com 0 km e sem divisão por zero
        let resp = ShiftResponse::from(record(1000, Some(1000)));
        assert!(!resp.is_active);
        assert_eq!(resp.km_driven, 0);
        assert_eq!(resp.income_per_km, Decimal::ZERO);
        assert_eq!(resp.cost_per_km, Decimal::ZERO);
    }
}
