use std::sync::LazyLock;

use regex::Regex;

// Syntactic check only; nothing is resolved.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

/// `local@domain.tld`. Empty is valid, the field is optional.
pub fn validate_email(email: &str) -> bool {
    email.is_empty() || EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email(""));
        assert!(validate_email("contato@empresa.com.br"));
        assert!(validate_email("first.last+tag@mail-server.io"));
    }

    #[test]
    fn test_validate_email_rejects() {
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("user@domain"));
        assert!(!validate_email("user@domain.c"));
        assert!(!validate_email("user name@domain.com"));
        assert!(!validate_email("usuário@domain.com"));
    }
}
