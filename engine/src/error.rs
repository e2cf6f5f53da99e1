use thiserror::Error;

use crate::validation::FormError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    // Raised only by the fallible parsers; the display-facing parsers degrade to zero instead.
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid date '{value}' at line {line}, expected DD/MM/YYYY")]
    InvalidDate { value: String, line: usize },

    #[error("Invoice number '{0}' already exists")]
    DuplicateInvoiceNumber(String),

    #[error("Customer '{0}' already exists")]
    DuplicateCustomer(String),

    #[error("Invoice {0} not found")]
    InvoiceNotFound(u64),

    #[error("Customer {0} not found")]
    CustomerNotFound(u64),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] FormError),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_wraps_with_english_message() {
        let err: EngineError = FormError::ValueNotPositive.into();
        assert_eq!(err.to_string(), "Validation failed: value must be greater than zero");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
