pub mod format;

pub use format::{format_currency, format_currency_short, format_percent};
