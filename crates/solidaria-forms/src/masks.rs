// File: src/masks.rs
// Purpose: Progressive input masks for the Brazilian document fields

/// Keeps only ASCII digits, capped at `max`
fn digits(value: &str, max: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Formats a CPF as `000.000.000-00` while it is being typed
///
/// Each separator appears once the group before it is complete, so a
/// partially typed value never ends in punctuation. Anything beyond eleven
/// digits is dropped.
pub fn mask_cpf(value: &str) -> String {
    let d = digits(value, 11);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Formats a phone number as `(11) 99999-9999` while it is being typed
///
/// The area code closes after two digits; past seven digits the value is
/// split five-then-rest, the mobile grouping the form's placeholder shows.
pub fn mask_telefone(value: &str) -> String {
    let d = digits(value, 11);
    match d.len() {
        0 => d,
        1..=2 => format!("({d}"),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Formats a CEP as `00000-000` while it is being typed
pub fn mask_cep(value: &str) -> String {
    let d = digits(value, 8);
    if d.len() > 5 {
        format!("{}-{}", &d[..5], &d[5..])
    } else {
        d
    }
}
