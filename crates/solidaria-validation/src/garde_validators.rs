//! Custom garde validators for the Solidariedade document checks
//!
//! This module wraps the pure functions so the same checks plug into
//! `#[derive(garde::Validate)]` structs. The error messages are the
//! Portuguese copy the site shows next to the fields.

use chrono::NaiveDate;

use crate::cpf::{is_valid_cpf, strip_cpf};
use crate::date::{is_adult_on, parse_birth_date};

/// Validator: structurally valid CPF
///
/// Accepts the formatted (`000.000.000-00`) or bare 11-digit form.
///
/// # Example
///
/// ```ignore
/// use garde::Validate;
///
/// #[derive(Validate)]
/// struct Cadastro {
///     #[garde(custom(cpf))]
///     cpf: String,
/// }
/// ```
pub fn cpf(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if is_valid_cpf(&strip_cpf(value)) {
        Ok(())
    } else {
        Err(garde::Error::new("CPF inválido"))
    }
}

/// Validator: birth date of someone at least 18 years old
///
/// The context carries the reference day, keeping derive-based validation as
/// deterministic as the plain functions.
pub fn adult_birth_date(value: &str, today: &NaiveDate) -> Result<(), garde::Error> {
    match parse_birth_date(value) {
        Some(birth) if is_adult_on(birth, *today) => Ok(()),
        _ => Err(garde::Error::new("Você deve ter no mínimo 18 anos")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_validator() {
        assert!(cpf("529.982.247-25", &()).is_ok());
        assert!(cpf("52998224725", &()).is_ok());
        assert!(cpf("529.982.247-24", &()).is_err());
        assert!(cpf("", &()).is_err());
    }

    #[test]
    fn test_adult_birth_date_validator() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(adult_birth_date("1990-03-10", &today).is_ok());
        assert!(adult_birth_date("2010-03-10", &today).is_err());
        assert!(adult_birth_date("not-a-date", &today).is_err());
    }
}
