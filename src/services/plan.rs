//! Política de plano (Grátis vs PRO)
//!
//! Funções puras de (usuário, data, contagens) -> permitido/negado,
//! avaliadas explicitamente em cada borda. is_pro é sensível à data e por
//! isso é derivado a cada verificação, nunca cacheado.

use chrono::NaiveDate;

use crate::models::user::User;

/// Limite de veículos do plano Grátis
pub const FREE_VEHICLE_LIMIT: i64 = 1;

/// Deriva o status PRO: superusuário, assinatura não expirada ou flag
/// manual legado.
pub fn is_pro(user: &User, today: NaiveDate) -> bool {
    user.is_superuser
        || user.is_pro_legacy
        || user.pro_expiry_date.map(|d| d >= today).unwrap_or(false)
}

/// Criação de veículo: Grátis limita a 1 veículo cadastrado
pub fn can_create_vehicle(pro: bool, vehicle_count: i64) -> bool {
    pro || vehicle_count < FREE_VEHICLE_LIMIT
}

/// Troca de status ativo do veículo ("slot congelado"): no Grátis o usuário
/// não pode desativar o único veículo ativo nem ativar um segundo enquanto
/// outro está ativo.
pub fn can_toggle_vehicle(pro: bool, currently_active: bool, active_count: i64) -> bool {
    if pro {
        return true;
    }
    if currently_active {
        // desativar: só se sobrar outro ativo
        active_count > 1
    } else {
        // ativar: só se nenhum outro está ativo
        active_count == 0
    }
}

/// Janela de histórico de plantões em dias; None = ilimitado (PRO)
pub fn history_window_days(pro: bool, free_days: i64) -> Option<i64> {
    if pro {
        None
    } else {
        Some(free_days)
    }
}

/// Relatórios e exportação são exclusivos PRO
pub fn can_access_reports(pro: bool) -> bool {
    pro
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "motorista".to_string(),
            email: "motorista@example.com".to_string(),
            password_hash: String::new(),
            first_name: None,
            is_superuser: false,
            is_pro_legacy: false,
            pro_expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_is_pro_free_by_default() {
        assert!(!is_pro(&user(), today()));
    }

    #[test]
    fn test_is_pro_superuser() {
        let mut u = user();
        u.is_superuser = true;
        assert!(is_pro(&u, today()));
    }

    #[test]
    fn test_is_pro_legacy_flag() {
        let mut u = user();
        u.is_pro_legacy = true;
        assert!(is_pro(&u, today()));
    }

    #[test]
    fn test_is_pro_expiry_is_date_sensitive() {
        let mut u = user();
        u.pro_expiry_date = NaiveDate::from_ymd_opt(2025, 6, 15);
        // expira exatamente hoje: ainda PRO
        assert!(is_pro(&u, today()));
        // avaliado de novo no dia seguinte: voltou a ser Grátis
        assert!(!is_pro(&u, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()));
    }

    #[test]
    fn test_can_create_vehicle() {
        assert!(can_create_vehicle(false, 0));
        assert!(!can_create_vehicle(false, 1));
        assert!(!can_create_vehicle(false, 3));
        assert!(can_create_vehicle(true, 3));
    }

    #[test]
    fn test_frozen_slot_deactivate() {
        // único veículo ativo não pode ser desativado no Grátis
        assert!(!can_toggle_vehicle(false, true, 1));
        assert!(can_toggle_vehicle(true, true, 1));
    }

    #[test]
    fn test_frozen_slot_activate_second() {
        // ativar um segundo veículo enquanto um já está ativo
        assert!(!can_toggle_vehicle(false, false, 1));
        assert!(can_toggle_vehicle(false, false, 0));
        assert!(can_toggle_vehicle(true, false, 1));
    }

    #[test]
    fn test_history_window() {
        assert_eq!(history_window_days(false, 30), Some(30));
        assert_eq!(history_window_days(true, 30), None);
    }

    #[test]
    fn test_reports_pro_only() {
        assert!(!can_access_reports(false));
        assert!(can_access_reports(true));
    }
}
