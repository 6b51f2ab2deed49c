//! Serviços de domínio
//!
//! Lógica de negócio pura (métricas derivadas, política de plano) e os
//! motores que precisam de atomicidade de storage (ledger + recálculo).

pub mod clock;
pub mod ledger;
pub mod metrics;
pub mod plan;
pub mod recompute;
