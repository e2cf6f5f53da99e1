// Engine library root
// Value normalization and validation for the invoice/customer forms, plus the
// collaborators that consume canonical values (stores, CSV import/export).

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod forms;
pub mod pt_br;
pub mod validation;

pub use error::{EngineError, EngineResult};
