//! Middleware do sistema

pub mod auth;
pub mod cors;
