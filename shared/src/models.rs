use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Invoice as held by the store. `issue_date` is rendered as YYYY-MM-DD when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u64,
    pub issue_date: NaiveDate,
    pub number: String,
    pub customer: String,
    pub value: Decimal,
    pub phone: String,
    pub email: String,
    pub cnpj: String,
    pub address: String,
}

// An invoice that has passed form validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub issue_date: NaiveDate,
    pub number: String,
    pub customer: String,
    pub value: Decimal,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub address: String,
}

impl NewInvoice {
    pub fn with_id(self, id: u64) -> Invoice {
        Invoice {
            id,
            issue_date: self.issue_date,
            number: self.number,
            customer: self.customer,
            value: self.value,
            phone: self.phone,
            email: self.email,
            cnpj: self.cnpj,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub cnpj: String,
    pub address: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub address: String,
}

impl NewCustomer {
    pub fn with_id(self, id: u64) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            cnpj: self.cnpj,
            address: self.address,
            active: true,
        }
    }
}
