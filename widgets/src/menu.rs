//! Mobile navigation menu.
//!
//! Every close path (nav link, outside click, resize past the breakpoint)
//! goes through [`MenuCore::close`], which reports whether anything changed so
//! the host can skip redundant DOM writes.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::MOBILE_BREAKPOINT_PX;

/// Inline style for one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const BAR_REST: BarStyle = BarStyle { transform: "none", opacity: "1" };

const BARS_OPEN: [BarStyle; 3] = [
    BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
    BarStyle { transform: "none", opacity: "0" },
    BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
];

/// Style for bar `index` (0-based). Bars past the third stay at rest.
#[must_use]
pub fn bar_style(open: bool, index: usize) -> BarStyle {
    if open {
        BARS_OPEN.get(index).copied().unwrap_or(BAR_REST)
    } else {
        BAR_REST
    }
}

#[derive(Debug)]
pub struct MenuCore {
    open: bool,
    breakpoint_px: f64,
}

impl Default for MenuCore {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX)
    }
}

impl MenuCore {
    #[must_use]
    pub fn new(breakpoint_px: f64) -> Self {
        Self { open: false, breakpoint_px }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A document click closes the menu unless it landed on the toggle or the
    /// menu itself.
    pub fn on_document_click(&mut self, inside_toggle: bool, inside_menu: bool) -> bool {
        if inside_toggle || inside_menu {
            return false;
        }
        self.close()
    }

    /// Widening the viewport past the breakpoint closes the menu.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > self.breakpoint_px {
            return self.close();
        }
        false
    }
}
