//! Header reaction to page scroll.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::{HEADER_HIDE_PX, HEADER_SCROLLED_PX};

/// Header presentation for one scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderFrame {
    /// Whether the `scrolled` class applies.
    pub scrolled: bool,
    /// Whether the header slides out of view.
    pub hidden: bool,
}

impl HeaderFrame {
    #[must_use]
    pub fn transform(self) -> &'static str {
        if self.hidden { "translateY(-100%)" } else { "translateY(0)" }
    }
}

/// Remembers the previous scroll offset to tell direction.
#[derive(Debug, Default)]
pub struct HeaderScroll {
    last_top: f64,
}

impl HeaderScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, top: f64) -> HeaderFrame {
        let frame = HeaderFrame {
            scrolled: top > HEADER_SCROLLED_PX,
            hidden: top > self.last_top && top > HEADER_HIDE_PX,
        };
        self.last_top = top;
        frame
    }
}
