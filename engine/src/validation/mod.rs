// Form validation: fixed-order rule pipelines that stop at the first failure.
//
// Each rule has one [`FormError`] variant. The English text is its `Display`;
// [`FormError::message`] renders the text for the configured UI language.

pub mod customer;
pub mod invoice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use customer::validate_customer_form;
pub use invoice::validate_invoice_form;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("the {field} field is required")]
    Required { field: String },

    #[error("fill in all required fields")]
    MissingRequiredFields,

    #[error("invalid date, use DD/MM/YYYY")]
    InvalidDate,

    #[error("invoice number must contain only digits")]
    InvalidInvoiceNumber,

    #[error("invalid value format")]
    InvalidValueFormat,

    #[error("value must be greater than zero")]
    ValueNotPositive,

    #[error("Name is required")]
    NameRequired,

    #[error("invalid phone, use (00) 00000-0000 or (00) 0000-0000")]
    InvalidPhone,

    #[error("invalid email")]
    InvalidEmail,

    #[error("CNPJ must have 14 digits")]
    InvalidCnpj,
}

impl FormError {
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::En => self.to_string(),
            Language::PtBr => match self {
                FormError::Required { field } => format!("O campo {field} é obrigatório!"),
                FormError::MissingRequiredFields => "Preencha todos os campos obrigatórios!".to_string(),
                FormError::InvalidDate => "Data inválida! Use o formato DD/MM/AAAA.".to_string(),
                FormError::InvalidInvoiceNumber => "Número da nota deve conter apenas dígitos!".to_string(),
                FormError::InvalidValueFormat => {
                    "Valor inválido! Use formato como 1234,56 ou 1.234,56.".to_string()
                }
                FormError::ValueNotPositive => "Valor deve ser maior que zero!".to_string(),
                FormError::NameRequired => "O campo Nome é obrigatório!".to_string(),
                FormError::InvalidPhone => {
                    "Telefone inválido! Use (00) 00000-0000 ou (00) 0000-0000".to_string()
                }
                FormError::InvalidEmail => "Email inválido!".to_string(),
                FormError::InvalidCnpj => "CNPJ inválido! Deve ter 14 dígitos.".to_string(),
            },
        }
    }
}

/// What the form controller shows: pass/fail plus the first failure's message
/// (empty on success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn from_result(result: &Result<(), FormError>, language: Language) -> Self {
        match result {
            Ok(()) => Self { valid: true, message: String::new() },
            Err(e) => Self { valid: false, message: e.message(language) },
        }
    }
}

impl From<ValidationOutcome> for (bool, String) {
    fn from(outcome: ValidationOutcome) -> Self {
        (outcome.valid, outcome.message)
    }
}

/// Non-empty and ASCII digits only.
pub fn validate_invoice_number(number: &str) -> bool {
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

/// Rejects empty or whitespace-only values.
pub fn validate_required_field(value: &str, field_name: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Required { field: field_name.to_string() });
    }
    Ok(())
}
