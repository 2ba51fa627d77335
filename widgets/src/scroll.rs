//! Smooth-scroll targets and scroll-reveal checks.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{REVEAL_OFFSET_PX, SCROLL_TARGET_GAP_PX};

/// Selector for an in-page link's target, if the href is a usable fragment.
///
/// A bare `#` (commonly used as a placeholder href) has no target.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document offset to scroll to so the target clears the fixed header.
#[must_use]
pub fn target_top(element_offset_top: f64, header_height: f64) -> f64 {
    (element_offset_top - header_height - SCROLL_TARGET_GAP_PX).max(0.0)
}

/// Whether a `.scroll-reveal` element has risen far enough into view.
#[must_use]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET_PX
}
