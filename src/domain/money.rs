//! Monetary amounts and their display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Currency suffix used on every rendered amount.
pub const CURRENCY: &str = "kr";

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with two decimals and `,` thousands separators, e.g. `12,345.60`.
#[must_use]
pub fn format_amount(value: Amount) -> String {
    let rounded = round(value, 2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Amount with the currency suffix: `1,234.50 kr`.
#[must_use]
pub fn format_currency(value: Amount) -> String {
    format!("{} {CURRENCY}", format_amount(value))
}

/// Signed amount with the currency suffix and no grouping: `+5.00 kr`, `-5.00 kr`.
#[must_use]
pub fn format_signed_currency(value: Amount) -> String {
    let rounded = round(value, 2);
    if rounded.is_zero() {
        return format!("+0.00 {CURRENCY}");
    }
    format!("{rounded:+.2} {CURRENCY}")
}

/// Plain two-decimal rendering used for stakes and odds.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", round(value, 2))
}

/// One-decimal percentage, or `n/a` when the ratio is undefined.
#[must_use]
pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{:.1}%", round(v, 1)),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_groups_thousands() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(999.5)), "999.50");
        assert_eq!(format_amount(dec!(1000)), "1,000.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(-12345.6)), "-12,345.60");
    }

    #[test]
    fn amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.125)), "0.13");
        assert_eq!(format_amount(dec!(-0.125)), "-0.13");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn signed_currency_keeps_sign() {
        assert_eq!(format_signed_currency(dec!(-5.0)), "-5.00 kr");
        assert_eq!(format_signed_currency(dec!(12.5)), "+12.50 kr");
        assert_eq!(format_signed_currency(dec!(0)), "+0.00 kr");
        assert_eq!(format_signed_currency(dec!(1500)), "+1500.00 kr");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(Some(dec!(10))), "10.0%");
        assert_eq!(format_percent(Some(dec!(-2.25))), "-2.3%");
        assert_eq!(format_percent(None), "n/a");
    }
}
