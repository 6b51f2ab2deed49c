//! Controllers da API
//!
//! Regras de negócio por recurso, orquestrando repositórios e serviços.
//! A política de plano é consultada explicitamente em cada borda.

pub mod auth_controller;
pub mod category_controller;
pub mod maintenance_controller;
pub mod report_controller;
pub mod shift_controller;
pub mod transaction_controller;
pub mod vehicle_controller;
