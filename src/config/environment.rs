//! Configuração de variáveis de ambiente
//!
//! Este módulo concentra a configuração do ambiente, incluindo os knobs
//! do ledger: o teto de plausibilidade de distância por plantão e a janela
//! de histórico do plano Grátis.

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    /// Distância máxima plausível de um plantão, em km
    pub max_shift_distance_km: i32,
    /// Janela móvel de histórico visível no plano Grátis, em dias
    pub free_history_days: i64,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            max_shift_distance_km: env::var("MAX_SHIFT_DISTANCE_KM")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .expect("MAX_SHIFT_DISTANCE_KM must be a valid number"),
            free_history_days: env::var("FREE_HISTORY_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("FREE_HISTORY_DAYS must be a valid number"),
        }
    }

    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obter o endereço do servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
