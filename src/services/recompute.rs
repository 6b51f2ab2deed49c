//! Motor de recálculo de totais
//!
//! Mantém a invariante: total_income/total_cost do plantão são sempre a
//! soma das transações filhas, re-somadas do zero a cada mutação (nunca
//! acumuladas incrementalmente, para que erros parciais não deixem drift).
//! Roda dentro da mesma transação de storage da mutação que o disparou.

use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Separa as somas agrupadas por tipo em (receita, custo).
/// Grupo ausente vale 0.
pub fn split_totals(rows: &[(String, Decimal)]) -> (Decimal, Decimal) {
    let mut total_income = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    for (kind, total) in rows {
        match kind.as_str() {
            "INCOME" => total_income = *total,
            "COST" => total_cost = *total,
            _ => {}
        }
    }

    (total_income, total_cost)
}

/// Re-soma todas as transações do plantão e grava os totais de volta.
/// Deve ser chamado com a conexão da transação de storage em andamento;
/// qualquer falha aborta a mutação inteira.
pub async fn recalculate_record_totals(
    conn: &mut PgConnection,
    record_id: Uuid,
) -> Result<(Decimal, Decimal), AppError> {
    let rows: Vec<(String, Decimal)> = sqlx::query_as(
        r#"
        SELECT type, COALESCE(SUM(amount), 0) AS total
        FROM transactions
        WHERE record_id = $1
        GROUP BY type
        "#,
    )
    .bind(record_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| AppError::Integrity(format!("Erro re-somando transações: {}", e)))?;

    let (total_income, total_cost) = split_totals(&rows);

    sqlx::query(
        r#"
        UPDATE daily_records
        SET total_income = $2, total_cost = $3, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(record_id)
    .bind(total_income)
    .bind(total_cost)
    .execute(&mut *conn)
    .await
    .map_err(|e| AppError::Integrity(format!("Erro gravando totais do plantão: {}", e)))?;

    Ok((total_income, total_cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_split_totals_empty_set_is_zero() {
        // Plantão sem transações volta a (0, 0), nunca null
        assert_eq!(split_totals(&[]), (Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn test_split_totals_both_groups() {
        let rows = vec![
            ("INCOME".to_string(), dec("150.00")),
            ("COST".to_string(), dec("40.00")),
        ];
        assert_eq!(split_totals(&rows), (dec("150.00"), dec("40.00")));
    }

    #[test]
    fn test_split_totals_missing_group() {
        let rows = vec![("COST".to_string(), dec("40.00"))];
        assert_eq!(split_totals(&rows), (Decimal::ZERO, dec("40.00")));
    }

    #[test]
    fn test_split_totals_idempotent() {
        // Rodar duas vezes sobre o mesmo conjunto produz o mesmo resultado
        let rows = vec![
            ("INCOME".to_string(), dec("99.90")),
            ("COST".to_string(), dec("12.34")),
        ];
        assert_eq!(split_totals(&rows), split_totals(&rows));
    }
}
