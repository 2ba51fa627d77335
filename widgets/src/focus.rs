//! Keyboard focus trap for an open dialog.
//!
//! The trap only intervenes at the edges of the focusable set (and when focus
//! has wandered outside it). Moves between interior elements are left to the
//! browser's default tab order.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

/// Direction of a Tab key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    #[must_use]
    pub fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// Boundaries of the focusable descendants, captured when the dialog opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusTrap {
    len: usize,
}

impl FocusTrap {
    /// Returns `None` when there is nothing to trap focus on.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn first(self) -> usize {
        0
    }

    #[must_use]
    pub fn last(self) -> usize {
        self.len - 1
    }

    /// Decide where a Tab press should land.
    ///
    /// `active` is the index of the focused element within the focusable set,
    /// or `None` when focus is elsewhere. Returns `Some(index)` when the host
    /// must cancel the default move and focus that element instead.
    #[must_use]
    pub fn redirect(self, active: Option<usize>, direction: TabDirection) -> Option<usize> {
        match (active, direction) {
            (None, TabDirection::Forward) => Some(self.first()),
            (None, TabDirection::Backward) => Some(self.last()),
            (Some(i), TabDirection::Forward) if i >= self.last() => Some(self.first()),
            (Some(0), TabDirection::Backward) => Some(self.last()),
            (Some(i), TabDirection::Backward) if i >= self.len => Some(self.last()),
            _ => None,
        }
    }
}
