//! Política de plano: derivação de is_pro, limite de veículos, slot
//! congelado e janela de histórico.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use driver_finance::models::user::User;
use driver_finance::services::plan;

fn free_user() -> User {
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
fn free_user_cannot_create_second_vehicle() {
    let user = free_user();
    let pro = plan::is_pro(&user, today());

    assert!(plan::can_create_vehicle(pro, 0));
    assert!(!plan::can_create_vehicle(pro, 1));
}

#[test]
fn upgraded_user_can_create_second_vehicle() {
    // O mesmo usuário, após assinar o PRO, passa na verificação
    let mut user = free_user();
    user.pro_expiry_date = NaiveDate::from_ymd_opt(2026, 1, 1);

    let pro = plan::is_pro(&user, today());
    assert!(plan::can_create_vehicle(pro, 1));
}

#[test]
fn expired_subscription_reverts_to_free() {
    let mut user = free_user();
    user.pro_expiry_date = NaiveDate::from_ymd_opt(2025, 6, 14);

    // A derivação é sensível à data: ontem expirou, hoje já nega
    assert!(!plan::is_pro(&user, today()));
    assert!(!plan::can_create_vehicle(false, 1));
}

#[test]
fn superuser_and_legacy_flag_are_pro() {
    let mut superuser = free_user();
    superuser.is_superuser = true;
    assert!(plan::is_pro(&superuser, today()));

    let mut legacy = free_user();
    legacy.is_pro_legacy = true;
    assert!(plan::is_pro(&legacy, today()));
}

#[test]
fn frozen_slot_blocks_swapping_active_vehicle() {
    // Grátis: não desativa o único ativo nem ativa um segundo
    assert!(!plan::can_toggle_vehicle(false, true, 1));
    assert!(!plan::can_toggle_vehicle(false, false, 1));

    // Com nenhum ativo, ativar o primeiro é permitido
    assert!(plan::can_toggle_vehicle(false, false, 0));

    // PRO troca livremente
    assert!(plan::can_toggle_vehicle(true, true, 1));
    assert!(plan::can_toggle_vehicle(true, false, 1));
}

#[test]
fn free_history_is_limited_to_rolling_window() {
    assert_eq!(plan::history_window_days(false, 30), Some(30));
    assert_eq!(plan::history_window_days(true, 30), None);
}

#[test]
fn reports_are_pro_only() {
    let user = free_user();
    assert!(!plan::can_access_reports(plan::is_pro(&user, today())));

    let mut pro_user = free_user();
    pro_user.is_pro_legacy = true;
    assert!(plan::can_access_reports(plan::is_pro(&pro_user, today())));
}
