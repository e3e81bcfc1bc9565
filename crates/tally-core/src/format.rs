use chrono::{DateTime, Utc};

/// Formats signed currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats creation instants as calendar dates (no time of day) for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, instant: DateTime<Utc>) -> String;
}
