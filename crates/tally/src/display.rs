//! Default presentation formatting for amounts and dates.
//!
//! The core hands raw numeric and timestamp values to these seams; nothing
//! below the presentation layer performs locale formatting.

use chrono::{DateTime, Utc};
use numfmt::{Formatter, Precision};

use tally_core::format::{CurrencyFormatter, DateFormatter};

/// Formats signed amounts as `-$1,234.50`-style strings and instants as
/// short calendar dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormatter;

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let symbol = currency_symbol(currency);
        // Zero is hardcoded because numfmt renders it as a bare "0".
        if amount == 0.0 {
            return format!("{symbol}0.00");
        }

        let prefix = if amount < 0.0 {
            format!("-{symbol}")
        } else {
            symbol.to_string()
        };
        let formatter = Formatter::currency(&prefix)
            .unwrap()
            .precision(Precision::Decimals(2));
        let mut formatted = formatter.fmt_string(amount.abs());

        // numfmt omits the last trailing zero ("12.30" renders as "12.3").
        if formatted.as_bytes()[formatted.len() - 3] != b'.' {
            formatted = format!("{formatted}0");
        }
        formatted
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, instant: DateTime<Utc>) -> String {
        instant.format("%b %-d, %Y").to_string()
    }
}

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        "JPY" => "\u{a5}",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_signed_amounts_with_grouping() {
        let formatter = LocaleFormatter;
        assert_eq!(formatter.format_amount(1234.5, "USD"), "$1,234.50");
        assert_eq!(formatter.format_amount(-1200.0, "USD"), "-$1,200.00");
    }

    #[test]
    fn zero_renders_with_two_decimals() {
        let formatter = LocaleFormatter;
        assert_eq!(formatter.format_amount(0.0, "USD"), "$0.00");
    }

    #[test]
    fn unknown_currency_codes_fall_back_to_the_code() {
        let formatter = LocaleFormatter;
        assert!(formatter.format_amount(5.0, "CHF").starts_with("CHF"));
    }

    #[test]
    fn dates_render_without_time_of_day() {
        let formatter = LocaleFormatter;
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 0).unwrap();
        assert_eq!(formatter.format_date(instant), "Jun 1, 2024");
    }
}
