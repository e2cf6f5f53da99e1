// Phone numbers and CNPJ tax ids.
//
// Both are stored digit-only and punctuated only for display. Both fields are
// optional on the forms, so an empty value validates. Formatting punctuates
// only a complete number and hands anything else back untouched.
use shared::utils::digits_only;

/// 10 digits for landlines, 11 for mobiles (area code included).
pub const PHONE_LENGTHS: [usize; 2] = [10, 11];
pub const CNPJ_LENGTH: usize = 14;

/// Strips every non-digit character.
pub fn clean_number(text: &str) -> String {
    digits_only(text)
}

pub fn validate_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    PHONE_LENGTHS.contains(&clean_number(phone).len())
}

/// `(DD) DDDDD-DDDD` or `(DD) DDDD-DDDD`.
pub fn format_phone(phone: &str) -> String {
    let digits = clean_number(phone);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

pub fn validate_cnpj(cnpj: &str) -> bool {
    if cnpj.is_empty() {
        return true;
    }
    clean_number(cnpj).len() == CNPJ_LENGTH
}

/// `DD.DDD.DDD/DDDD-DD`.
pub fn format_cnpj(cnpj: &str) -> String {
    let digits = clean_number(cnpj);
    if digits.len() != CNPJ_LENGTH {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}
