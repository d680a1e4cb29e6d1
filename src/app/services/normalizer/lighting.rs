//! Lighting code normalization
//!
//! Lighting tokens have the shape `L<number><optional letter>` with an optional
//! approach angle in parentheses, e.g. "L12", "L17A", "L17A(3.00)". The number
//! loses leading zeros and the angle is printed with two decimals.

use std::sync::LazyLock;

use regex::Regex;

use super::measures::parse_decimal;
use super::{Normalized, fold_tokens};
use crate::app::models::report::ValidationWarning;
use crate::constants::rules;

static LIGHTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^L(?P<num>\d{1,3})(?P<letter>[A-Z])?(?:\(\s*(?P<angle>\d{1,2}(?:[.,]\d+)?)\s*\))?$")
        .expect("valid lighting regex")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]+").expect("valid separator regex"));

/// Normalize one lighting token
///
/// A non-conforming token is kept verbatim alongside a WARNING so the list it
/// belongs to never loses information.
pub fn normalize_lighting_code(raw: &str) -> Normalized<String> {
    let verbatim = raw.trim();
    let token = verbatim.to_uppercase();

    let canonical = LIGHTING.captures(&token).and_then(|captures| {
        let number: u32 = captures["num"].parse().ok()?;
        let letter = captures.name("letter").map(|l| l.as_str()).unwrap_or("");
        match captures.name("angle") {
            Some(angle) => {
                let angle = parse_decimal(angle.as_str())?;
                Some(format!("L{}{}({:.2})", number, letter, angle))
            }
            None => Some(format!("L{}{}", number, letter)),
        }
    });

    match canonical {
        Some(code) => Normalized::ok(code),
        None => Normalized::flagged(
            verbatim.to_string(),
            ValidationWarning::warning(
                "lighting",
                rules::LIGHTING_FORMAT,
                "Lighting codes look like 'L<number>[letter][(angle)]', e.g. 'L17A(3.00)'",
            )
            .with_value(verbatim),
        ),
    }
}

/// Normalize already-split lighting tokens
pub fn normalize_lighting_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
) -> Normalized<Vec<String>> {
    fold_tokens(
        tokens.into_iter().filter(|token| !token.trim().is_empty()),
        normalize_lighting_code,
    )
}

/// Normalize a separated lighting list such as "L12, L14 L17A(3.00)"
pub fn normalize_lighting_list(raw: &str) -> Normalized<Vec<String>> {
    normalize_lighting_tokens(SEPARATORS.split(raw.trim()))
}
