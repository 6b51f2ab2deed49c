//! Ledger de transações
//!
//! Concentra o ciclo de vida de uma transação: cada create/update/delete
//! roda em UMA transação de storage junto com o recálculo dos totais do
//! plantão e a manutenção do espelho. Ou tudo é confirmado, ou nada é:
//! o chamador nunca observa totais defasados após o retorno.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::transaction_dto::{CreateTransactionRequest, UpdateTransactionRequest};
use crate::models::category::Category;
use crate::models::daily_record::DailyRecord;
use crate::models::transaction::{Transaction, TransactionType};
use crate::services::recompute;
use crate::utils::errors::AppError;
use crate::utils::messages;

/// Uma transação de custo em categoria de manutenção gera espelho
pub fn should_mirror(transaction_type: &str, category_is_maintenance: bool) -> bool {
    transaction_type == TransactionType::Cost.as_str() && category_is_maintenance
}

/// Odômetro do espelho: KM informado na transação, senão o fechamento do
/// plantão, senão a abertura.
pub fn mirror_odometer(actual_km: Option<i32>, end_km: Option<i32>, start_km: i32) -> i32 {
    actual_km.or(end_km).unwrap_or(start_km)
}

pub struct LedgerService {
    pool: PgPool,
}

impl LedgerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lança uma transação e recalcula os totais do plantão na mesma
    /// unidade atômica. Custos em categoria de manutenção espelham um
    /// registro de Maintenance vinculado.
    pub async fn create_transaction(
        &self,
        user_id: Uuid,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        let record = self.find_record(user_id, request.record_id).await?;
        let category = self.find_category(user_id, request.category_id).await?;

        if category.r#type != request.r#type.as_str() {
            // Divergência tolerada (comportamento preservado da origem)
            tracing::warn!(
                transaction_type = request.r#type.as_str(),
                category_type = %category.r#type,
                category = %category.name,
                "Tipo da transação diverge do tipo da categoria"
            );
        }

        let mut tx = self.pool.begin().await?;

        let transaction: Transaction = sqlx::query_as(
            r#"
            INSERT INTO transactions
                (id, record_id, category_id, type, amount, description,
                 liters, is_full_tank, actual_km, next_due_km, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.id)
        .bind(category.id)
        .bind(request.r#type.as_str())
        .bind(request.amount)
        .bind(&request.description)
        .bind(request.liters)
        .bind(request.is_full_tank)
        .bind(request.actual_km)
        .bind(request.next_due_km)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        recompute::recalculate_record_totals(&mut tx, record.id).await?;

        if should_mirror(&transaction.r#type, category.is_maintenance) {
            Self::insert_mirror(&mut tx, &record, &transaction).await?;
        }

        tx.commit().await?;

        Ok(transaction)
    }

    /// Atualiza uma transação; os totais são re-somados e as mudanças
    /// propagam para o espelho quando ele existir (sentido único:
    /// transação -> espelho).
    pub async fn update_transaction(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
        request: UpdateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        let existing = self.find_transaction(user_id, transaction_id).await?;
        let record = self.find_record(user_id, existing.record_id).await?;

        let category_id = request.category_id.unwrap_or(existing.category_id);
        // Valida a posse da categoria mesmo quando não mudou
        let _category = self.find_category(user_id, category_id).await?;

        let amount = request.amount.unwrap_or(existing.amount);
        let description = request.description.or(existing.description);
        let liters = request.liters.or(existing.liters);
        let is_full_tank = request.is_full_tank.unwrap_or(existing.is_full_tank);
        let actual_km = request.actual_km.or(existing.actual_km);
        let next_due_km = request.next_due_km.or(existing.next_due_km);

        let mut tx = self.pool.begin().await?;

        let transaction: Transaction = sqlx::query_as(
            r#"
            UPDATE transactions
            SET category_id = $2, amount = $3, description = $4, liters = $5,
                is_full_tank = $6, actual_km = $7, next_due_km = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(existing.id)
        .bind(category_id)
        .bind(amount)
        .bind(&description)
        .bind(liters)
        .bind(is_full_tank)
        .bind(actual_km)
        .bind(next_due_km)
        .fetch_one(&mut *tx)
        .await?;

        recompute::recalculate_record_totals(&mut tx, record.id).await?;

        Self::sync_mirror(&mut tx, &record, &transaction).await?;

        tx.commit().await?;

        Ok(transaction)
    }

    /// Remove uma transação, re-soma os totais e apaga o espelho vinculado
    /// na mesma unidade atômica.
    pub async fn delete_transaction(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<(), AppError> {
        let existing = self.find_transaction(user_id, transaction_id).await?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM maintenances WHERE transaction_id = $1")
            .bind(existing.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(existing.id)
            .execute(&mut *tx)
            .await?;

        recompute::recalculate_record_totals(&mut tx, existing.record_id).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_record(&self, user_id: Uuid, record_id: Uuid) -> Result<DailyRecord, AppError> {
        sqlx::query_as::<_, DailyRecord>(
            "SELECT * FROM daily_records WHERE id = $1 AND user_id = $2",
        )
        .bind(record_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(messages::SHIFT_NOT_FOUND.to_string()))
    }

    async fn find_category(&self, user_id: Uuid, category_id: Uuid) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1 AND user_id = $2")
            .bind(category_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::CATEGORY_NOT_FOUND.to_string()))
    }

    async fn find_transaction(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT t.*
            FROM transactions t
            JOIN daily_records r ON r.id = t.record_id
            WHERE t.id = $1 AND r.user_id = $2
            "#,
        )
        .bind(transaction_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(messages::TRANSACTION_NOT_FOUND.to_string()))
    }

    async fn insert_mirror(
        conn: &mut PgConnection,
        record: &DailyRecord,
        transaction: &Transaction,
    ) -> Result<(), AppError> {
        let odometer = mirror_odometer(transaction.actual_km, record.end_km, record.start_km);

        sqlx::query(
            r#"
            INSERT INTO maintenances
                (id, user_id, vehicle_id, date, odometer, cost, type,
                 description, next_due_km, transaction_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'OTHER', $7, $8, $9, $10, $10)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.user_id)
        .bind(record.vehicle_id)
        .bind(record.date)
        .bind(odometer)
        .bind(transaction.amount)
        .bind(transaction.description.clone().unwrap_or_default())
        .bind(transaction.next_due_km)
        .bind(transaction.id)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::Integrity(format!("Erro criando espelho de manutenção: {}", e)))?;

        Ok(())
    }

    /// Propaga custo/descrição/odômetro/next_due_km para o espelho, se
    /// a transação tiver um.
    async fn sync_mirror(
        conn: &mut PgConnection,
        record: &DailyRecord,
        transaction: &Transaction,
    ) -> Result<(), AppError> {
        let odometer = mirror_odometer(transaction.actual_km, record.end_km, record.start_km);

        sqlx::query(
            r#"
            UPDATE maintenances
            SET cost = $2, description = $3, odometer = $4, next_due_km = $5, updated_at = NOW()
            WHERE transaction_id = $1
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.amount)
        .bind(transaction.description.clone().unwrap_or_default())
        .bind(odometer)
        .bind(transaction.next_due_km)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::Integrity(format!("Erro sincronizando espelho: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_mirror_only_maintenance_cost() {
        assert!(should_mirror("COST", true));
        assert!(!should_mirror("COST", false));
        assert!(!should_mirror("INCOME", true));
        assert!(!should_mirror("INCOME", false));
    }

    #[test]
    fn test_mirror_odometer_prefers_actual_km() {
        assert_eq!(mirror_odometer(Some(1080), Some(1120), 1000), 1080);
    }

    #[test]
    fn test_mirror_odometer_falls_back_to_end_km() {
        assert_eq!(mirror_odometer(None, Some(1120), 1000), 1120);
    }

    #[test]
    fn test_mirror_odometer_falls_back_to_start_km() {
        // Plantão ainda aberto e sem KM na transação: usa a abertura
        assert_eq!(mirror_odometer(None, None, 1000), 1000);
    }
}
