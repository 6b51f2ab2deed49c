//! Shared application state
//!
//! Estado compartilhado da aplicação, passado através do router do Axum.
//! O relógio é injetado aqui para que "hoje" seja controlável em testes.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(pool: PgPool, config: EnvironmentConfig, clock: Arc<dyn Clock>) -> Self {
        Self { pool, config, clock }
    }
}
