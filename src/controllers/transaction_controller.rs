use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::transaction_dto::{
    CreateTransactionRequest, TransactionResponse, UpdateTransactionRequest,
};
use crate::models::user::User;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::services::ledger::LedgerService;
use crate::utils::errors::AppError;
use crate::utils::messages;

pub struct TransactionController {
    ledger: LedgerService,
    repository: TransactionRepository,
}

impl TransactionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            ledger: LedgerService::new(pool.clone()),
            repository: TransactionRepository::new(pool),
        }
    }

    /// Lança a transação; o retorno já reflete os totais recalculados do
    /// plantão (a mutação e o recálculo são uma unidade atômica).
    pub async fn create(
        &self,
        user: &User,
        request: CreateTransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        request.validate()?;

        let transaction = self.ledger.create_transaction(user.id, request).await?;

        self.response(user, transaction.id).await
    }

    pub async fn update(
        &self,
        user: &User,
        id: Uuid,
        request: UpdateTransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        request.validate()?;

        let transaction = self.ledger.update_transaction(user.id, id, request).await?;

        self.response(user, transaction.id).await
    }

    pub async fn delete(&self, user: &User, id: Uuid) -> Result<(), AppError> {
        self.ledger.delete_transaction(user.id, id).await
    }

    pub async fn list_by_record(
        &self,
        user: &User,
        record_id: Uuid,
    ) -> Result<Vec<TransactionResponse>, AppError> {
        let transactions = self.repository.list_by_record(user.id, record_id).await?;
        Ok(transactions.into_iter().map(Into::into).collect())
    }

    async fn response(&self, user: &User, id: Uuid) -> Result<TransactionResponse, AppError> {
        let transaction = self
            .repository
            .find_with_category(user.id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::TRANSACTION_NOT_FOUND.to_string()))?;

        Ok(transaction.into())
    }
}
