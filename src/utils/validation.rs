//! Utilidades de validação
//!
//! Funções helper de validação compartilhadas pelos DTOs.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que um valor monetário é positivo (> 0)
pub fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut error = ValidationError::new("invalid_amount");
        error.message = Some("O valor deve ser maior que zero".into());
        return Err(error);
    }
    Ok(())
}

/// Validar cor em formato hexadecimal "#rrggbb"
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        let mut error = ValidationError::new("invalid_color");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que uma quilometragem não é negativa
pub fn validate_km(value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("invalid_km");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(&Decimal::from_str("0.01").unwrap()).is_ok());
        assert!(validate_positive_amount(&Decimal::ZERO).is_err());
        assert!(validate_positive_amount(&Decimal::from_str("-5.00").unwrap()).is_err());
    }

    #[test]
    fn test_hex_color() {
        assert!(validate_hex_color("#ef4444").is_ok());
        assert!(validate_hex_color("#ABCDEF").is_ok());
        assert!(validate_hex_color("ef4444").is_err());
        assert!(validate_hex_color("#ef444").is_err());
        assert!(validate_hex_color("#gg4444").is_err());
    }

    #[test]
    fn test_km() {
        assert!(validate_km(0).is_ok());
        assert!(validate_km(123456).is_ok());
        assert!(validate_km(-1).is_err());
    }
}
