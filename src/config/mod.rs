//! Configuração do sistema

pub mod environment;

pub use environment::EnvironmentConfig;
