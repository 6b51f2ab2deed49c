use sqlx::PgPool;
use uuid::Uuid;

use crate::models::transaction::TransactionWithCategory;
use crate::utils::errors::AppError;

const SELECT_WITH_CATEGORY: &str = r#"
    SELECT t.id, t.record_id, t.category_id,
           c.name AS category_name, c.color AS category_color,
           t.type, t.amount, t.description, t.liters, t.is_full_tank,
           t.actual_km, t.next_due_km, t.created_at
    FROM transactions t
    JOIN categories c ON c.id = t.category_id
    JOIN daily_records r ON r.id = t.record_id
"#;

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_with_category(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<TransactionWithCategory>, AppError> {
        let sql = format!("{} WHERE t.id = $1 AND r.user_id = $2", SELECT_WITH_CATEGORY);

        let transaction = sqlx::query_as::<_, TransactionWithCategory>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(transaction)
    }

    /// Transações do plantão, mais recentes primeiro
    pub async fn list_by_record(
        &self,
        user_id: Uuid,
        record_id: Uuid,
    ) -> Result<Vec<TransactionWithCategory>, AppError> {
        let sql = format!(
            "{} WHERE t.record_id = $1 AND r.user_id = $2 ORDER BY t.created_at DESC",
            SELECT_WITH_CATEGORY
        );

        let transactions = sqlx::query_as::<_, TransactionWithCategory>(&sql)
            .bind(record_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(transactions)
    }
}
