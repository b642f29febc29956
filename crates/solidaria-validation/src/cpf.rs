//! CPF check-digit validation
//!
//! A CPF (Cadastro de Pessoas Físicas) is the 11-digit Brazilian individual
//! taxpayer number. The last two digits are check digits derived from the
//! first nine by a weighted sum modulo 11, so most transcription errors are
//! detectable without calling any registry.

use alloc::string::String;

/// Strips formatting from a CPF, keeping only ASCII digits
///
/// `"529.982.247-25"` becomes `"52998224725"`. Callers are expected to strip
/// before handing the value to [`is_valid_cpf`].
pub fn strip_cpf(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates an unformatted 11-digit CPF
///
/// Checks for:
/// - Exactly 11 ASCII digits
/// - Not one of the repeated sequences ("00000000000" through "99999999999"),
///   which satisfy the checksum but are never issued
/// - Both check digits matching the weighted-sum computation
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != 11 || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut digits = [0u32; 11];
    for (i, b) in cpf.bytes().enumerate() {
        digits[i] = u32::from(b - b'0');
    }

    // Repeated sequences pass the arithmetic but are not assignable
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
}

/// Check digit over the leading digits of a CPF
///
/// Weights start at `len + 1` and fall to 2; the digit is `(sum * 10) % 11`,
/// with a remainder of 10 mapped to 0.
fn check_digit(digits: &[u32]) -> u32 {
    let len = digits.len() as u32;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (len + 1 - i as u32))
        .sum();

    let rem = (sum * 10) % 11;
    if rem >= 10 {
        0
    } else {
        rem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cpf("11144477735"));
    }

    #[test]
    fn test_repeated_sequences_rejected() {
        assert!(!is_valid_cpf("00000000000"));
        assert!(!is_valid_cpf("11111111111"));
        assert!(!is_valid_cpf("99999999999"));
    }

    #[test]
    fn test_wrong_check_digits_rejected() {
        // Last digit flipped
        assert!(!is_valid_cpf("52998224724"));
        // First check digit flipped
        assert!(!is_valid_cpf("52998224715"));
        // Two payload digits swapped
        assert!(!is_valid_cpf("25998224725"));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247255"));
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(!is_valid_cpf("5299822472a"));
        // Formatted input must be stripped first
        assert!(!is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn test_strip_cpf() {
        assert_eq!(strip_cpf("529.982.247-25"), "52998224725");
        assert_eq!(strip_cpf("5 2 9"), "529");
        assert_eq!(strip_cpf("abc"), "");
        assert!(is_valid_cpf(&strip_cpf("529.982.247-25")));
    }
}
