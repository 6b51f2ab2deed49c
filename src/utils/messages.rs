//! Catálogo de mensagens visíveis ao usuário (pt-BR)
//!
//! Centralizado em um único módulo para permitir localização sem tocar
//! na lógica de negócio.

// Plantão
pub const SHIFT_ALREADY_OPEN: &str =
    "Você já tem um plantão em aberto! Encerre-o antes de iniciar outro.";
pub const SHIFT_ALREADY_TODAY: &str = "Você já abriu um plantão hoje! Verifique seu histórico.";
pub const SHIFT_NO_ACTIVE: &str = "Nenhum plantão ativo encontrado";
pub const SHIFT_NOT_FOUND: &str = "Registro diário não encontrado";
pub const SHIFT_END_BEFORE_START: &str = "O KM final não pode ser menor que o inicial";
pub const SHIFT_DISTANCE_IMPLAUSIBLE: &str =
    "Distância percorrida acima do limite plausível para um plantão";
pub const SHIFT_STARTED: &str = "Jornada iniciada! Bom trabalho.";
pub const SHIFT_ENDED: &str = "Plantão encerrado com sucesso. Bom descanso!";
pub const SHIFT_UPDATED: &str = "Registro atualizado!";
pub const SHIFT_DELETED: &str = "Registro removido.";

// Transações
pub const TRANSACTION_NOT_FOUND: &str = "Transação não encontrada";
pub const TRANSACTION_SAVED: &str = "Transação registrada!";
pub const TRANSACTION_UPDATED: &str = "Transação atualizada e totais recalculados!";
pub const TRANSACTION_DELETED: &str = "Transação removida.";

// Categorias
pub const CATEGORY_NOT_FOUND: &str = "Categoria não encontrada";
pub const CATEGORY_CREATED: &str = "Categoria criada com sucesso!";
pub const CATEGORY_UPDATED: &str = "Categoria atualizada!";
pub const CATEGORY_DELETED: &str = "Categoria removida.";
pub const CATEGORY_IN_USE: &str =
    "Categoria em uso por transações existentes e não pode ser removida";

// Veículos
pub const VEHICLE_NOT_FOUND: &str = "Veículo não encontrado";
pub const VEHICLE_CREATED: &str = "Veículo cadastrado com sucesso!";
pub const VEHICLE_UPDATED: &str = "Dados do veículo atualizados!";
pub const VEHICLE_DELETED: &str = "Veículo removido com sucesso.";
pub const VEHICLE_IN_USE: &str =
    "Veículo possui plantões registrados e não pode ser removido";
pub const VEHICLE_INACTIVE: &str = "Veículo inativo não pode ser usado em um plantão";
pub const VEHICLE_LIMIT_REACHED: &str =
    "🔒 Limite atingido! No plano Grátis você pode ter apenas 1 veículo ativo.";
pub const VEHICLE_SLOT_FROZEN: &str =
    "No plano Grátis o veículo ativo é fixo. Exclua o atual ou assine o PRO para trocar.";

// Manutenções
pub const MAINTENANCE_NOT_FOUND: &str = "Manutenção não encontrada";
pub const MAINTENANCE_CREATED: &str = "Manutenção registrada com sucesso!";
pub const MAINTENANCE_UPDATED: &str = "Manutenção atualizada!";
pub const MAINTENANCE_DELETED: &str = "Manutenção removida.";

// Plano / relatórios
pub const PRO_ONLY: &str = "Recurso exclusivo PRO";

// Autenticação
pub const AUTH_INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos";
pub const AUTH_USER_EXISTS: &str = "Usuário ou e-mail já cadastrado";
pub const AUTH_TOKEN_REQUIRED: &str = "Token de autorização requerido";
pub const AUTH_TOKEN_INVALID: &str = "Token inválido";
pub const AUTH_USER_NOT_FOUND: &str = "Usuário não encontrado";
