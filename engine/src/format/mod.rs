// Conversions between what the user types and the canonical values the store keeps.
//
// Display convention is pt-BR throughout: `.` groups thousands, `,` separates decimals,
// dates are DD/MM/YYYY. Canonical values are 2dp `Decimal`s and ISO dates.
pub mod currency;
pub mod date;
pub mod email;
pub mod identifiers;

pub use currency::{
    apply_final_value_format, format_amount, format_currency, format_typing_value,
    parse_currency, try_parse_currency, validate_currency, AmountInput, CURRENCY_SYMBOL,
};
pub use date::{
    date_sort_key, display_date, format_display_date, format_sql_date, parse_canonical_date,
    parse_display_date, validate_date,
};
pub use email::validate_email;
pub use identifiers::{clean_number, format_cnpj, format_phone, validate_cnpj, validate_phone};
