// Monetary amounts: free text in, 2dp `Decimal` or pt-BR display string out.
//
// Users type amounts in whatever shape comes to mind (`1234`, `1234,56`,
// `1.234,56`, `R$ 1.234`, even `1234.56`). The parser decides, from the
// separators present, which one is the decimal separator:
//
// - both `,` and `.`: dots group thousands, the last comma is the decimal point
// - only `,`: the last comma is the decimal point, earlier ones group thousands
// - only `.`: several dots, or a single dot followed by exactly three digits,
//   group thousands; any other single dot is the decimal point
// - none: integer amount
//
// The display-facing functions never fail. Unparseable input renders as zero.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use shared::utils::{group_thousands, keep_amount_chars};

use crate::error::{EngineError, EngineResult};

pub const CURRENCY_SYMBOL: &str = "R$";

// 1234 | 1234,56 | 1.234,56 | 1.234 (digits are ASCII only).
static CURRENCY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}(?:\.?[0-9]{3})*(?:,[0-9]{1,2})?$").expect("currency shape regex is valid")
});

/// Anything the currency functions accept: raw field text or an already-numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
    Text(&'a str),
    Float(f64),
    Integer(i64),
    Decimal(Decimal),
    Missing,
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(s: &'a str) -> Self {
        AmountInput::Text(s)
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(s: &'a String) -> Self {
        AmountInput::Text(s.as_str())
    }
}

impl<'a> From<Option<&'a str>> for AmountInput<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(AmountInput::Missing, AmountInput::Text)
    }
}

impl From<f64> for AmountInput<'_> {
    fn from(v: f64) -> Self {
        AmountInput::Float(v)
    }
}

impl From<i64> for AmountInput<'_> {
    fn from(v: i64) -> Self {
        AmountInput::Integer(v)
    }
}

impl From<i32> for AmountInput<'_> {
    fn from(v: i32) -> Self {
        AmountInput::Integer(i64::from(v))
    }
}

impl From<Decimal> for AmountInput<'_> {
    fn from(v: Decimal) -> Self {
        AmountInput::Decimal(v)
    }
}

fn zero() -> Decimal {
    Decimal::new(0, 2)
}

// Banker's rounding, then pad so the value always carries exactly two fractional digits.
fn to_cents(value: Decimal) -> Decimal {
    let mut cents = value.round_dp(2);
    cents.rescale(2);
    cents
}

fn non_negative(value: Decimal, raw: impl ToString) -> EngineResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidAmount(raw.to_string()));
    }
    Ok(to_cents(value))
}

/// Splits cleaned text (digits, `,` and `.` only) into integer and fractional digit runs.
fn split_separators(cleaned: &str) -> (String, String) {
    let has_comma = cleaned.contains(',');
    let has_dot = cleaned.contains('.');

    if has_comma {
        // Any dot next to a comma is a thousands separator; so is every comma but the last.
        let without_dots = if has_dot { cleaned.replace('.', "") } else { cleaned.to_string() };
        return match without_dots.rsplit_once(',') {
            Some((int_part, frac_part)) => (int_part.replace(',', ""), frac_part.to_string()),
            None => (without_dots, String::new()),
        };
    }

    if has_dot {
        if cleaned.matches('.').count() > 1 {
            return (cleaned.replace('.', ""), String::new());
        }
        if let Some((int_part, frac_part)) = cleaned.split_once('.') {
            if frac_part.len() == 3 {
                return (format!("{int_part}{frac_part}"), String::new());
            }
            return (int_part.to_string(), frac_part.to_string());
        }
    }

    (cleaned.to_string(), String::new())
}

fn parse_text(raw: &str) -> EngineResult<Decimal> {
    let cleaned = keep_amount_chars(raw.trim());
    if cleaned.is_empty() {
        return Ok(zero());
    }
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(EngineError::InvalidAmount(raw.to_string()));
    }

    let (int_part, frac_part) = split_separators(&cleaned);
    let int_part = if int_part.is_empty() { "0" } else { int_part.as_str() };
    let literal = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    let value = Decimal::from_str(&literal).map_err(|_| EngineError::InvalidAmount(raw.to_string()))?;
    Ok(to_cents(value))
}

/// Parses an amount, reporting input that cannot be turned into a number.
///
/// Empty text (or text with no amount characters at all, such as `"R$"`) is a
/// zero amount, not an error. Negative, NaN and infinite numeric inputs are errors.
pub fn try_parse_currency<'a>(input: impl Into<AmountInput<'a>>) -> EngineResult<Decimal> {
    match input.into() {
        AmountInput::Text(raw) => parse_text(raw),
        AmountInput::Float(v) => match Decimal::from_f64(v) {
            Some(value) => non_negative(value, v),
            None => Err(EngineError::InvalidAmount(v.to_string())),
        },
        AmountInput::Integer(v) => non_negative(Decimal::from(v), v),
        AmountInput::Decimal(v) => non_negative(v, v),
        AmountInput::Missing => Ok(zero()),
    }
}

/// Canonical 2dp amount for any input; malformed input is `0.00`.
pub fn parse_currency<'a>(input: impl Into<AmountInput<'a>>) -> Decimal {
    try_parse_currency(input).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Amount not parseable, using zero");
        zero()
    })
}

/// Renders an amount as `1.234.567,89`.
pub fn format_amount(amount: Decimal) -> String {
    let cents = to_cents(amount);
    let sign = if cents < Decimal::ZERO { "-" } else { "" };
    let plain = cents.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    // Group the en way (1,234,567.89) and swap both separators in one pass,
    // so a swapped comma is never swapped back.
    let en_style = format!("{}.{}", group_thousands(int_part, ','), frac_part);
    let swapped: String = en_style
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect();
    format!("{sign}{swapped}")
}

/// `R$ 1.234,56` with the symbol, `1.234,56` without. Malformed input renders as zero.
pub fn format_currency<'a>(input: impl Into<AmountInput<'a>>, with_symbol: bool) -> String {
    let formatted = format_amount(parse_currency(input));
    if with_symbol {
        format!("{CURRENCY_SYMBOL} {formatted}")
    } else {
        formatted
    }
}

/// Keystroke formatter. Regroups the integer part while no comma has been
/// typed yet; once the decimal part has started the text is only cleaned, so
/// the cursor stays where the user left it.
pub fn format_typing_value(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let cleaned = keep_amount_chars(value);
    if cleaned.contains(',') {
        return cleaned;
    }

    let without_dots = cleaned.replace('.', "");
    if without_dots.is_empty() {
        return cleaned;
    }
    // Past the Decimal range the blur formatter could not keep the value, so stop grouping.
    match Decimal::from_str(&without_dots) {
        Ok(number) => group_thousands(&number.to_string(), '.'),
        Err(_) => cleaned,
    }
}

/// Blur/submit formatter: the two-decimal display form with no symbol.
/// This is the form that re-parses to the same canonical amount.
pub fn apply_final_value_format(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format_currency(value, false)
}

/// Cheap shape check used by the invoice form, independent of the parser.
pub fn validate_currency(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let stripped: String = value
        .trim()
        .chars()
        .filter(|c| *c != 'R' && *c != '$' && !c.is_whitespace())
        .collect();
    CURRENCY_SHAPE.is_match(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_separator_disambiguation() {
        assert_eq!(parse_currency("1.234,56"), dec!(1234.56));
        assert_eq!(parse_currency("1234,56"), dec!(1234.56));
        assert_eq!(parse_currency("1234.56"), dec!(1234.56));
        assert_eq!(parse_currency("1.234"), dec!(1234.00));
        assert_eq!(parse_currency("1234"), dec!(1234.00));
    }

    #[test]
    fn test_parse_only_dots() {
        assert_eq!(parse_currency("1.234.567"), dec!(1234567));
        assert_eq!(parse_currency("12.5"), dec!(12.50));
        assert_eq!(parse_currency("12.50"), dec!(12.50));
        assert_eq!(parse_currency("12."), dec!(12));
        // Four trailing digits cannot be a thousands group.
        assert_eq!(parse_currency("1.2345"), dec!(1.23));
    }

    #[test]
    fn test_parse_strips_symbols_and_text() {
        assert_eq!(parse_currency("R$ 1.234,56"), dec!(1234.56));
        assert_eq!(parse_currency("  R$ 10,5 "), dec!(10.50));
        assert_eq!(parse_currency("-15,00"), dec!(15.00));
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse_currency(""), dec!(0.00));
        assert_eq!(parse_currency("abc"), dec!(0.00));
        assert_eq!(parse_currency("R$"), dec!(0.00));
        assert_eq!(parse_currency(None::<&str>), dec!(0.00));
        assert_eq!(parse_currency("..."), dec!(0.00));
        assert_eq!(parse_currency(","), dec!(0.00));
    }

    #[test]
    fn test_parse_always_two_fractional_digits() {
        assert_eq!(parse_currency("1234").scale(), 2);
        assert_eq!(parse_currency("").scale(), 2);
        assert_eq!(parse_currency("0,5").to_string(), "0.50");
        assert_eq!(parse_currency("1,999").to_string(), "2.00");
    }

    #[test]
    fn test_parse_multiple_commas_uses_last_as_decimal() {
        assert_eq!(parse_currency("1,234,56"), dec!(1234.56));
        assert_eq!(parse_currency("1.234,567,89"), dec!(1234567.89));
        // Brazilian reading wins when both appear, even in en order.
        assert_eq!(parse_currency("1,234.56"), dec!(1.23));
    }

    #[test]
    fn test_parse_numeric_inputs() {
        assert_eq!(parse_currency(9.99_f64), dec!(9.99));
        assert_eq!(parse_currency(1000_i64), dec!(1000.00));
        assert_eq!(parse_currency(dec!(1.005)), dec!(1.00));
        assert_eq!(parse_currency(dec!(1.015)), dec!(1.02));
        assert_eq!(parse_currency(-5.0_f64), dec!(0.00));
        assert_eq!(parse_currency(f64::NAN), dec!(0.00));
        assert_eq!(parse_currency(f64::INFINITY), dec!(0.00));
    }

    #[test]
    fn test_try_parse_reports_garbage() {
        assert!(try_parse_currency("...").is_err());
        assert!(try_parse_currency(-1_i64).is_err());
        assert_eq!(try_parse_currency("").unwrap(), dec!(0.00));
        assert_eq!(try_parse_currency("R$").unwrap(), dec!(0.00));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("1234,56", true), "R$ 1.234,56");
        assert_eq!(format_currency("1234,56", false), "1.234,56");
        assert_eq!(format_currency(1234567.891_f64, false), "1.234.567,89");
        assert_eq!(format_currency("0", false), "0,00");
        assert_eq!(format_currency("999", false), "999,00");
        assert_eq!(format_currency("1.000", true), "R$ 1.000,00");
    }

    #[test]
    fn test_format_currency_malformed() {
        assert_eq!(format_currency("abc", true), "R$ 0,00");
        assert_eq!(format_currency("", false), "0,00");
        assert_eq!(format_currency(None::<&str>, true), "R$ 0,00");
    }

    #[test]
    fn test_format_amount_multi_group() {
        assert_eq!(format_amount(dec!(1234567.89)), "1.234.567,89");
        assert_eq!(format_amount(dec!(1000000)), "1.000.000,00");
        assert_eq!(format_amount(dec!(0.01)), "0,01");
    }

    #[test]
    fn test_format_typing_value() {
        assert_eq!(format_typing_value(""), "");
        assert_eq!(format_typing_value("1"), "1");
        assert_eq!(format_typing_value("1234"), "1.234");
        assert_eq!(format_typing_value("1.2345"), "12.345");
        assert_eq!(format_typing_value("R$ 1234567"), "1.234.567");
        assert_eq!(format_typing_value("0012"), "12");
    }

    #[test]
    fn test_format_typing_value_leaves_decimal_entry_alone() {
        assert_eq!(format_typing_value("1.234,"), "1.234,");
        assert_eq!(format_typing_value("1234,5"), "1234,5");
        assert_eq!(format_typing_value("abc12,3x"), "12,3");
    }

    #[test]
    fn test_format_typing_value_unparseable_returns_cleaned() {
        assert_eq!(format_typing_value("..."), "...");
        assert_eq!(format_typing_value("abc"), "");
        let huge = "9".repeat(45);
        assert_eq!(format_typing_value(&huge), huge);
    }

    #[test]
    fn test_format_typing_value_stops_grouping_where_final_format_would_fail() {
        let ones = "1".repeat(30);
        assert_eq!(format_typing_value(&ones), ones);
        assert_eq!(apply_final_value_format(&ones), "0,00");

        let fits = "1".repeat(26);
        let grouped = format_typing_value(&fits);
        assert_eq!(grouped.len(), 26 + 8);
        assert_eq!(parse_currency(grouped.as_str()).to_string(), format!("{fits}.00"));
    }

    #[test]
    fn test_apply_final_value_format() {
        assert_eq!(apply_final_value_format(""), "");
        assert_eq!(apply_final_value_format("1.234"), "1.234,00");
        assert_eq!(apply_final_value_format("1234,5"), "1.234,50");
        assert_eq!(apply_final_value_format("xyz"), "0,00");
    }

    #[test]
    fn test_validate_currency_shapes() {
        assert!(validate_currency("1234"));
        assert!(validate_currency("1234,56"));
        assert!(validate_currency("1.234,56"));
        assert!(validate_currency("1.234"));
        assert!(validate_currency("R$ 1.234,5"));
        assert!(validate_currency("0,00"));
    }

    #[test]
    fn test_validate_currency_rejects() {
        assert!(!validate_currency(""));
        assert!(!validate_currency("abc"));
        assert!(!validate_currency("1234.56"));
        assert!(!validate_currency("1.23,45"));
        assert!(!validate_currency("12,345"));
        assert!(!validate_currency(",50"));
    }
}
