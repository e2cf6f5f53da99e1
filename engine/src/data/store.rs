// In-memory invoice and customer stores.
// They only ever see canonical values: NaiveDate, 2dp Decimal, digit-only identifiers.
use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{Customer, Invoice, NewCustomer, NewInvoice};

use crate::error::{EngineError, EngineResult};
use crate::forms::InvoiceRow;

pub struct InvoiceStore {
    invoices: BTreeMap<u64, Invoice>,
    next_id: u64,
}

impl InvoiceStore {
    pub fn new() -> Self {
        InvoiceStore {
            invoices: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn number_taken(&self, number: &str, except: Option<u64>) -> bool {
        self.invoices
            .values()
            .any(|i| i.number == number && Some(i.id) != except)
    }

    /// Invoice numbers are unique.
    pub fn insert(&mut self, invoice: NewInvoice) -> EngineResult<u64> {
        if self.number_taken(&invoice.number, None) {
            tracing::warn!(number = %invoice.number, "Rejected duplicate invoice number");
            return Err(EngineError::DuplicateInvoiceNumber(invoice.number));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.invoices.insert(id, invoice.with_id(id));
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&Invoice> {
        self.invoices.get(&id)
    }

    pub fn update(&mut self, id: u64, invoice: NewInvoice) -> EngineResult<()> {
        if !self.invoices.contains_key(&id) {
            return Err(EngineError::InvoiceNotFound(id));
        }
        if self.number_taken(&invoice.number, Some(id)) {
            return Err(EngineError::DuplicateInvoiceNumber(invoice.number));
        }
        self.invoices.insert(id, invoice.with_id(id));
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> EngineResult<Invoice> {
        self.invoices.remove(&id).ok_or(EngineError::InvoiceNotFound(id))
    }

    /// Newest first; same-day invoices keep insertion order.
    pub fn all(&self) -> Vec<Invoice> {
        let mut invoices: Vec<Invoice> = self.invoices.values().cloned().collect();
        invoices.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        invoices
    }

    /// Issue date within `[start, end]`, newest first.
    pub fn by_period(&self, start: NaiveDate, end: NaiveDate) -> Vec<Invoice> {
        self.all()
            .into_iter()
            .filter(|i| i.issue_date >= start && i.issue_date <= end)
            .collect()
    }

    /// Case-insensitive substring match over every column, newest first.
    /// The value matches in its table form and as a plain `1234.56` or `1234,56`.
    pub fn search(&self, term: &str) -> Vec<Invoice> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.all();
        }
        self.all()
            .into_iter()
            .filter(|invoice| {
                let row = InvoiceRow::from(invoice);
                let plain_value = format!("{:.2}", invoice.value);
                let comma_value = plain_value.replace('.', ",");
                [
                    &row.date,
                    &row.number,
                    &row.customer,
                    &row.value,
                    &plain_value,
                    &comma_value,
                    &invoice.phone,
                    &invoice.email,
                    &invoice.cnpj,
                    &invoice.address,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn count(&self) -> usize {
        self.invoices.len()
    }

    pub fn total_value(&self) -> Decimal {
        self.invoices.values().map(|i| i.value).sum()
    }
}

impl Default for InvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CustomerStore {
    customers: BTreeMap<u64, Customer>,
    next_id: u64,
}

impl CustomerStore {
    pub fn new() -> Self {
        CustomerStore {
            customers: BTreeMap::new(),
            next_id: 1,
        }
    }

    // Uniqueness covers deactivated rows too, so a name cannot come back as a second record.
    fn name_taken(&self, name: &str, except: Option<u64>) -> bool {
        let name = name.trim();
        self.customers
            .values()
            .any(|c| c.name.trim().eq_ignore_ascii_case(name) && Some(c.id) != except)
    }

    /// Customer names are unique, ignoring case.
    pub fn insert(&mut self, customer: NewCustomer) -> EngineResult<u64> {
        if self.name_taken(&customer.name, None) {
            tracing::warn!(name = %customer.name, "Rejected duplicate customer");
            return Err(EngineError::DuplicateCustomer(customer.name));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.customers.insert(id, customer.with_id(id));
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Replaces the editable fields; the active flag is left as it was.
    pub fn update(&mut self, id: u64, customer: NewCustomer) -> EngineResult<()> {
        if !self.customers.contains_key(&id) {
            return Err(EngineError::CustomerNotFound(id));
        }
        if self.name_taken(&customer.name, Some(id)) {
            tracing::warn!(name = %customer.name, "Rejected duplicate customer");
            return Err(EngineError::DuplicateCustomer(customer.name));
        }
        if let Some(existing) = self.customers.get_mut(&id) {
            let active = existing.active;
            *existing = customer.with_id(id);
            existing.active = active;
        }
        Ok(())
    }

    /// Active customer with this name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Customer> {
        let name = name.trim();
        self.customers
            .values()
            .find(|c| c.active && c.name.trim().eq_ignore_ascii_case(name))
    }

    /// Active customers in name order.
    pub fn all(&self) -> Vec<Customer> {
        let mut customers: Vec<Customer> = self.customers.values().filter(|c| c.active).cloned().collect();
        customers.sort_by_key(|c| c.name.to_lowercase());
        customers
    }

    /// Active customers whose name, phone, email, CNPJ or address contains `term`.
    pub fn search(&self, term: &str) -> Vec<Customer> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.all();
        }
        self.all()
            .into_iter()
            .filter(|c| {
                [&c.name, &c.phone, &c.email, &c.cnpj, &c.address]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Number of active customers.
    pub fn count(&self) -> usize {
        self.customers.values().filter(|c| c.active).count()
    }

    pub fn deactivate(&mut self, id: u64) -> EngineResult<()> {
        let customer = self.customers.get_mut(&id).ok_or(EngineError::CustomerNotFound(id))?;
        customer.active = false;
        Ok(())
    }

    /// Soft-deletes every customer and returns how many were still active.
    pub fn deactivate_all(&mut self) -> usize {
        let mut changed = 0;
        for customer in self.customers.values_mut().filter(|c| c.active) {
            customer.active = false;
            changed += 1;
        }
        tracing::info!(count = changed, "Deactivated all customers");
        changed
    }
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new()
    }
}
