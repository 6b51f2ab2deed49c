//! Métricas derivadas
//!
//! Propriedades calculadas de plantões e veículos, consolidadas em funções
//! puras sobre os campos persistidos. Os repositórios buscam os agregados;
//! aqui não existe acesso a storage.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::vehicle::VehicleOdometerInputs;

/// KM percorridos no plantão; 0 enquanto aberto ou se os dados regredirem
pub fn km_driven(start_km: i32, end_km: Option<i32>) -> i32 {
    match end_km {
        Some(end) => (end - start_km).max(0),
        None => 0,
    }
}

/// Lucro do plantão
pub fn profit(total_income: Decimal, total_cost: Decimal) -> Decimal {
    total_income - total_cost
}

/// Valor por km; 0 quando não houve deslocamento (sem divisão por zero)
pub fn per_km(value: Decimal, km: i64) -> Decimal {
    if km > 0 {
        value / Decimal::from(km)
    } else {
        Decimal::ZERO
    }
}

/// Odômetro corrente do veículo: o maior valor conhecido entre o KM de
/// cadastro, os KMs de abertura/fechamento de plantões e os KMs informados
/// em transações.
pub fn current_odometer(initial_km: i32, inputs: VehicleOdometerInputs) -> i32 {
    initial_km
        .max(inputs.max_end_km.unwrap_or(0))
        .max(inputs.max_start_km.unwrap_or(0))
        .max(inputs.max_actual_km.unwrap_or(0))
}

/// Abastecimento de tanque cheio usado no cálculo de consumo
#[derive(Debug, Clone)]
pub struct FuelFill {
    pub actual_km: i32,
    pub liters: Decimal,
}

/// Média de consumo (km/l) entre os dois abastecimentos de tanque cheio
/// mais recentes: km rodados entre eles divididos pelos litros do mais
/// recente. `fills` vem ordenado do mais recente para o mais antigo.
pub fn fuel_average(fills: &[FuelFill]) -> Option<f64> {
    if fills.len() < 2 {
        return None;
    }

    let last = &fills[0];
    let prev = &fills[1];

    let km = last.actual_km - prev.actual_km;
    let liters = last.liters.to_f64().unwrap_or(0.0);

    if km <= 0 || liters <= 0.0 {
        return Some(0.0);
    }

    Some(km as f64 / liters)
}

/// Situação da próxima manutenção programada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MaintenanceStatus {
    Overdue { km_over: i32 },
    DueSoon { km_left: i32 },
    Ok { km_left: i32 },
}

/// Faixa em km abaixo da qual a manutenção é considerada próxima
pub const DUE_SOON_THRESHOLD_KM: i32 = 1000;

/// Classifica a próxima manutenção a partir do next_due_km mais recente
/// e do odômetro corrente. None quando nenhuma transação registrou
/// vencimento.
pub fn maintenance_status(next_due_km: Option<i32>, current_odometer: i32) -> Option<MaintenanceStatus> {
    let due = next_due_km?;
    let remaining = due - current_odometer;

    Some(if remaining <= 0 {
        MaintenanceStatus::Overdue { km_over: -remaining }
    } else if remaining < DUE_SOON_THRESHOLD_KM {
        MaintenanceStatus::DueSoon { km_left: remaining }
    } else {
        MaintenanceStatus::Ok { km_left: remaining }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_km_driven_open_shift_is_zero() {
        assert_eq!(km_driven(1000, None), 0);
    }

    #[test]
    fn test_km_driven_equal_start_end() {
        // Encerrar com end_km == start_km é válido e percorre 0 km
        assert_eq!(km_driven(1000, Some(1000)), 0);
    }

    #[test]
    fn test_km_driven_never_negative() {
        assert_eq!(km_driven(1000, Some(900)), 0);
        assert_eq!(km_driven(1000, Some(1120)), 120);
    }

    #[test]
    fn test_profit() {
        assert_eq!(profit(dec("150.00"), dec("40.00")), dec("110.00"));
        assert_eq!(profit(dec("0"), dec("25.50")), dec("-25.50"));
    }

    #[test]
    fn test_per_km_zero_distance() {
        // Sem deslocamento o custo por km é 0, nunca divisão por zero
        assert_eq!(per_km(dec("40.00"), 0), Decimal::ZERO);
        assert_eq!(per_km(dec("40.00"), -5), Decimal::ZERO);
    }

    #[test]
    fn test_per_km() {
        assert_eq!(per_km(dec("120.00"), 120), dec("1"));
    }

    #[test]
    fn test_current_odometer_takes_max() {
        let inputs = VehicleOdometerInputs {
            max_end_km: Some(1120),
            max_start_km: Some(1000),
            max_actual_km: Some(1080),
        };
        assert_eq!(current_odometer(500, inputs), 1120);
        assert_eq!(current_odometer(99999, inputs), 99999);
    }

    #[test]
    fn test_current_odometer_no_history() {
        assert_eq!(current_odometer(500, VehicleOdometerInputs::default()), 500);
    }

    #[test]
    fn test_fuel_average_needs_two_fills() {
        assert_eq!(fuel_average(&[]), None);
        assert_eq!(
            fuel_average(&[FuelFill { actual_km: 1000, liters: dec("40") }]),
            None
        );
    }

    #[test]
    fn test_fuel_average() {
        let fills = vec![
            FuelFill { actual_km: 1400, liters: dec("40") },
            FuelFill { actual_km: 1000, liters: dec("38") },
        ];
        // 400 km / 40 litros do abastecimento mais recente
        assert_eq!(fuel_average(&fills), Some(10.0));
    }

    #[test]
    fn test_fuel_average_regressed_km() {
        let fills = vec![
            FuelFill { actual_km: 1000, liters: dec("40") },
            FuelFill { actual_km: 1400, liters: dec("38") },
        ];
        assert_eq!(fuel_average(&fills), Some(0.0));
    }

    #[test]
    fn test_maintenance_status_none_without_due() {
        assert_eq!(maintenance_status(None, 5000), None);
    }

    #[test]
    fn test_maintenance_status_buckets() {
        assert_eq!(
            maintenance_status(Some(4800), 5000),
            Some(MaintenanceStatus::Overdue { km_over: 200 })
        );
        assert_eq!(
            maintenance_status(Some(5000), 5000),
            Some(MaintenanceStatus::Overdue { km_over: 0 })
        );
        assert_eq!(
            maintenance_status(Some(5999), 5000),
            Some(MaintenanceStatus::DueSoon { km_left: 999 })
        );
        assert_eq!(
            maintenance_status(Some(6000), 5000),
            Some(MaintenanceStatus::Ok { km_left: 1000 })
        );
    }
}
