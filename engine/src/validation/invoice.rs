// Invoice form: required fields, date, number, value shape, value > 0.
use rust_decimal::Decimal;

use super::{validate_invoice_number, FormError};
use crate::format::{try_parse_currency, validate_currency, validate_date};

pub fn validate_invoice_form(
    date: &str,
    number: &str,
    customer: &str,
    value: &str,
) -> Result<(), FormError> {
    let result = check_invoice(date, number, customer, value);
    if let Err(e) = &result {
        tracing::debug!(rule = ?e, "Invoice form rejected");
    }
    result
}

fn check_invoice(date: &str, number: &str, customer: &str, value: &str) -> Result<(), FormError> {
    // Raw emptiness; a lone space counts as filled in and fails a later rule instead.
    if [date, number, customer, value].iter().any(|field| field.is_empty()) {
        return Err(FormError::MissingRequiredFields);
    }
    if !validate_date(date) {
        return Err(FormError::InvalidDate);
    }
    if !validate_invoice_number(number) {
        return Err(FormError::InvalidInvoiceNumber);
    }
    if !validate_currency(value) {
        return Err(FormError::InvalidValueFormat);
    }
    // Well-shaped but too large to hold is a format problem, not a zero.
    match try_parse_currency(value) {
        Ok(amount) if amount > Decimal::ZERO => Ok(()),
        Ok(_) => Err(FormError::ValueNotPositive),
        Err(_) => Err(FormError::InvalidValueFormat),
    }
}
