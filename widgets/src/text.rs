//! Textarea character counters and the footer copyright year.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use crate::consts::FOOTER_YEAR_PLACEHOLDER;

/// Characters left before `max_length`, counted in UTF-16 code units the way
/// the browser measures `maxlength`. Negative for pre-filled overlong values.
#[must_use]
pub fn remaining_chars(max_length: i32, value: &str) -> i64 {
    let used = i64::try_from(value.encode_utf16().count()).unwrap_or(i64::MAX);
    i64::from(max_length).saturating_sub(used)
}

#[must_use]
pub fn counter_label(remaining: i64) -> String {
    format!("{remaining} caracteres restantes")
}

/// Replace the first placeholder year in the footer markup with `year`.
///
/// Returns `None` when there is nothing to replace.
#[must_use]
pub fn stamp_year(markup: &str, year: u32) -> Option<String> {
    markup
        .contains(FOOTER_YEAR_PLACEHOLDER)
        .then(|| markup.replacen(FOOTER_YEAR_PLACEHOLDER, &year.to_string(), 1))
}
