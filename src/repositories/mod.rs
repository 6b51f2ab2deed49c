//! Repositórios de acesso a dados
//!
//! Toda query filtra pelo dono: não existe compartilhamento entre usuários.

pub mod category_repository;
pub mod daily_record_repository;
pub mod maintenance_repository;
pub mod report_repository;
pub mod transaction_repository;
pub mod user_repository;
pub mod vehicle_repository;
