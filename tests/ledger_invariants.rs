//! Propriedades do ledger: invariantes de totais, espelhamento de
//! manutenção e métricas derivadas de um plantão completo.

use std::str::FromStr;

use rust_decimal::Decimal;

use driver_finance::services::ledger::{mirror_odometer, should_mirror};
use driver_finance::services::metrics;
use driver_finance::services::recompute::split_totals;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Conjunto de transações de um plantão, como o motor de recálculo as vê
/// depois do GROUP BY por tipo.
fn grouped(income: &[&str], cost: &[&str]) -> Vec<(String, Decimal)> {
    let mut rows = Vec::new();
    if !income.is_empty() {
        let total = income.iter().map(|s| dec(s)).sum::<Decimal>();
        rows.push(("INCOME".to_string(), total));
    }
    if !cost.is_empty() {
        let total = cost.iter().map(|s| dec(s)).sum::<Decimal>();
        rows.push(("COST".to_string(), total));
    }
    rows
}

#[test]
fn totals_equal_sum_of_transactions() {
    let rows = grouped(&["150.00", "32.50"], &["40.00", "12.00"]);
    let (income, cost) = split_totals(&rows);

    assert_eq!(income, dec("182.50"));
    assert_eq!(cost, dec("52.00"));
}

#[test]
fn deleting_last_transaction_drives_totals_to_zero() {
    // Após remover a última transação o GROUP BY não devolve linhas:
    // os totais voltam a 0, nunca a nulo.
    let (income, cost) = split_totals(&[]);

    assert_eq!(income, Decimal::ZERO);
    assert_eq!(cost, Decimal::ZERO);
}

#[test]
fn recompute_is_idempotent() {
    let rows = grouped(&["99.90"], &["12.34"]);

    let first = split_totals(&rows);
    let second = split_totals(&rows);

    assert_eq!(first, second);
}

#[test]
fn shift_with_only_income_has_zero_cost() {
    let rows = grouped(&["75.00"], &[]);
    let (income, cost) = split_totals(&rows);

    assert_eq!(income, dec("75.00"));
    assert_eq!(cost, Decimal::ZERO);
}

#[test]
fn open_close_lifecycle_metrics() {
    // Plantão aberto com start_km=1000; receita 150,00; custo 40,00
    // (combustível); encerrado com end_km=1120.
    let rows = grouped(&["150.00"], &["40.00"]);
    let (income, cost) = split_totals(&rows);

    let km = metrics::km_driven(1000, Some(1120));
    let profit = metrics::profit(income, cost);

    assert_eq!(income, dec("150.00"));
    assert_eq!(cost, dec("40.00"));
    assert_eq!(km, 120);
    assert_eq!(profit, dec("110.00"));

    // Categoria de combustível não é de manutenção: sem espelho
    assert!(!should_mirror("COST", false));
}

#[test]
fn closing_with_equal_km_yields_zero_metrics() {
    let km = metrics::km_driven(1000, Some(1000));

    assert_eq!(km, 0);
    assert_eq!(metrics::per_km(dec("40.00"), km as i64), Decimal::ZERO);
    assert_eq!(metrics::profit(dec("150.00"), dec("40.00")), dec("110.00"));
}

#[test]
fn maintenance_cost_creates_mirror() {
    // Custo de 300,00 em categoria de manutenção, actual_km=1080,
    // next_due_km=6080, lançado no plantão aberto (end_km ainda nulo).
    assert!(should_mirror("COST", true));
    assert_eq!(mirror_odometer(Some(1080), None, 1000), 1080);

    // Receita em categoria de manutenção não espelha
    assert!(!should_mirror("INCOME", true));
}

#[test]
fn mirror_odometer_falls_back_to_shift_readings() {
    // Sem KM na transação: usa o fechamento, senão a abertura
    assert_eq!(mirror_odometer(None, Some(1120), 1000), 1120);
    assert_eq!(mirror_odometer(None, None, 1000), 1000);
}
