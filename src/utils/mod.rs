//! Currency formatting helpers
//!
//! Centralizes how decimal amounts are displayed so the sentence, the
//! schedule table and any future output agree on precision and separators.

use rust_decimal::Decimal;

use crate::calculator::round_to_two;

/// Format a value as dollars with thousands separators: "$1,234.56".
///
/// Values are rounded to cents first, half away from zero.
///
/// # Examples
/// ```
/// use compound_interest::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
/// assert_eq!(format_currency(dec!(-500)), "$-500.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_currency_aligned(value, 0)
}

/// Same as [`format_currency`], right-aligned to `width`.
///
/// # Examples
/// ```
/// use compound_interest::utils::format_currency_aligned;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency_aligned(dec!(100), 10), "   $100.00");
/// ```
pub fn format_currency_aligned(value: Decimal, width: usize) -> String {
    let rounded = round_to_two(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let formatted = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut with_separators = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            with_separators.push(',');
        }
        with_separators.push(*c);
    }

    let result = format!("${}{}.{}", sign, with_separators, decimal_part);
    format!("{:>width$}", result, width = width)
}
