//! WhatsApp deep link.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use crate::consts::WHATSAPP_BASE_URL;

/// Build `https://wa.me/{digits}?text={greeting}`.
///
/// wa.me expects the number in international form without `+`, spaces or
/// dashes, so everything but ASCII digits is dropped.
#[must_use]
pub fn whatsapp_url(phone: &str, greeting: &str) -> String {
    let digits = phone.chars().filter(char::is_ascii_digit).collect::<String>();
    format!("{WHATSAPP_BASE_URL}{digits}?text={}", urlencoding::encode(greeting))
}
