use super::FormError;
use crate::format::{validate_cnpj, validate_email, validate_phone};

/// Name is mandatory; phone, email and CNPJ are checked only when filled in.
pub fn validate_customer_form(name: &str, phone: &str, email: &str, cnpj: &str) -> Result<(), FormError> {
    let result = if name.trim().is_empty() {
        Err(FormError::NameRequired)
    } else if !phone.is_empty() && !validate_phone(phone) {
        Err(FormError::InvalidPhone)
    } else if !email.is_empty() && !validate_email(email) {
        Err(FormError::InvalidEmail)
    } else if !cnpj.is_empty() && !validate_cnpj(cnpj) {
        Err(FormError::InvalidCnpj)
    } else {
        Ok(())
    };

    if let Err(e) = &result {
        tracing::debug!(rule = ?e, "Customer form rejected");
    }
    result
}
