// The boundary between what the form widgets hold and what the store keeps.
//
// A form is a bag of raw strings exactly as typed. Converting it into a
// record validates first, then normalizes: ISO date, 2dp amount, digit-only
// phone and CNPJ. Rows go the other way, turning stored records into the
// strings shown in the tables.

use serde::{Deserialize, Serialize};
use shared::models::{Customer, Invoice, NewCustomer, NewInvoice};

use crate::config::theme::ThemePalette;
use crate::format::{
    clean_number, display_date, format_amount, format_cnpj, format_phone, parse_currency,
    parse_display_date, CURRENCY_SYMBOL,
};
use crate::validation::{validate_customer_form, validate_invoice_form, FormError, ValidationOutcome};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceForm {
    pub date: String,
    pub number: String,
    pub customer: String,
    pub value: String,
    pub phone: String,
    pub email: String,
    pub cnpj: String,
    pub address: String,
}

impl InvoiceForm {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_invoice_form(&self.date, &self.number, &self.customer, &self.value)
    }

    pub fn to_new_invoice(&self) -> Result<NewInvoice, FormError> {
        self.validate()?;
        // validate() has already accepted the date
        let issue_date = parse_display_date(&self.date).ok_or(FormError::InvalidDate)?;
        Ok(NewInvoice {
            issue_date,
            number: self.number.clone(),
            customer: self.customer.trim().to_string(),
            value: parse_currency(self.value.as_str()),
            phone: clean_number(&self.phone),
            email: self.email.trim().to_string(),
            cnpj: clean_number(&self.cnpj),
            address: self.address.trim().to_string(),
        })
    }

    /// Loads a stored invoice back into the edit form, in display forms.
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            date: display_date(invoice.issue_date),
            number: invoice.number.clone(),
            customer: invoice.customer.clone(),
            value: format_amount(invoice.value),
            phone: format_phone(&invoice.phone),
            email: invoice.email.clone(),
            cnpj: format_cnpj(&invoice.cnpj),
            address: invoice.address.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub cnpj: String,
    pub address: String,
}

impl CustomerForm {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_customer_form(&self.name, &self.phone, &self.email, &self.cnpj)
    }

    pub fn to_new_customer(&self) -> Result<NewCustomer, FormError> {
        self.validate()?;
        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            phone: clean_number(&self.phone),
            email: self.email.trim().to_string(),
            cnpj: clean_number(&self.cnpj),
            address: self.address.trim().to_string(),
        })
    }
}

/// One line of the invoice table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub id: u64,
    pub date: String,
    pub number: String,
    pub customer: String,
    pub value: String,
    pub phone: String,
    pub email: String,
    pub cnpj: String,
    pub address: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            date: display_date(invoice.issue_date),
            number: invoice.number.clone(),
            customer: invoice.customer.clone(),
            value: format!("{} {}", CURRENCY_SYMBOL, format_amount(invoice.value)),
            phone: format_phone(&invoice.phone),
            email: invoice.email.clone(),
            cnpj: format_cnpj(&invoice.cnpj),
            address: invoice.address.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub cnpj: String,
    pub address: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            phone: format_phone(&customer.phone),
            email: customer.email.clone(),
            cnpj: format_cnpj(&customer.cnpj),
            address: customer.address.clone(),
        }
    }
}

/// Palette colour for a validation message: `success` or `danger`.
pub fn feedback_color<'p>(outcome: &ValidationOutcome, palette: &'p ThemePalette) -> &'p str {
    if outcome.valid {
        palette.color("success")
    } else {
        palette.color("danger")
    }
}
