// String-cleaning helpers used by the engine's formatters and validators.
// Kept free of any locale decisions: callers pick the separators.

/// Keeps ASCII digits, `,` and `.`; everything else (currency symbols,
/// spaces, letters, signs) is dropped.
pub fn keep_amount_chars(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect()
}

/// Keeps ASCII digits only.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Inserts `sep` between every group of three digits, counting from the right.
/// Expects a plain run of digits, e.g. `"1234567"` -> `"1.234.567"` with `'.'`.
pub fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
