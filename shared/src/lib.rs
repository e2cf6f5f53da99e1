pub mod models;
pub mod utils;

// Canonical records shared by the engine's store, forms and CSV code.
// Values here are always normalized: ISO dates, 2dp decimals, digit-only identifiers.
