// Persistence-side collaborators: the canonical record stores and CSV import/export.
pub mod csv_export;
pub mod store;
