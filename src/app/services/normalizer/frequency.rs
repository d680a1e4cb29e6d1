//! Frequency normalization
//!
//! Every frequency is canonicalized to MHz. Decimal notation ("118.1",
//! "118,10", "127.150") and the compact six-digit form ("127150") are MHz;
//! bare three- or four-digit integers are beacon kHz ("375" becomes 0.375).
//! Values are rounded to three decimals.

use std::sync::LazyLock;

use regex::Regex;

use super::{Normalized, fold_tokens};
use crate::app::models::report::ValidationWarning;
use crate::constants::rules;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}$").expect("valid frequency regex"));

static KILOHERTZ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("valid kHz frequency regex"));

static FIXED_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid fixed-width frequency regex"));

/// Normalize one frequency token
pub fn normalize_frequency(raw: &str) -> Normalized<f64> {
    let token = raw.trim().replace(',', ".");

    let parsed = if FIXED_WIDTH.is_match(&token) || KILOHERTZ.is_match(&token) {
        token.parse::<f64>().ok().map(|value| value / 1000.0)
    } else if DECIMAL.is_match(&token) {
        token.parse::<f64>().ok()
    } else {
        None
    };

    match parsed {
        Some(value) => Normalized::ok((value * 1000.0).round() / 1000.0),
        None => Normalized::failed(
            ValidationWarning::warning(
                "frequencies",
                rules::FREQUENCY_FORMAT,
                "Frequency token skipped; expected a number such as '127.150' or '375'",
            )
            .with_value(raw.trim()),
        ),
    }
}

/// Normalize a list of frequency tokens, skipping non-numeric ones
pub fn normalize_frequency_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
) -> Normalized<Vec<f64>> {
    fold_tokens(tokens, normalize_frequency)
}
