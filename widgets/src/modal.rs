//! Video modal: open/close state, scroll lock, autoplay and focus trap.
//!
//! Every way of closing the modal (close control, overlay click, Escape)
//! funnels into [`ModalCore::close`], so the end state is the same whichever
//! trigger fired. Opening and closing are idempotent; the scroll lock is set
//! and cleared in the same calls that flip the open flag.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::AUTOPLAY_PARAM;
use crate::focus::{FocusTrap, TabDirection};

/// What closed the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Overlay,
    Escape,
}

/// Document changes for the host to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Add the `active` class to the panel.
    Show,
    /// Remove the `active` class from the panel.
    Hide,
    /// `body.style.overflow = "hidden"`.
    LockScroll,
    /// Clear `body.style.overflow`.
    UnlockScroll,
    /// Replace the embedded video's `src`.
    SetVideoSrc(String),
    /// Focus the focusable descendant at this index.
    Focus(usize),
}

/// Result of a keydown inside the document while the modal may be open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub actions: Vec<Action>,
}

#[derive(Debug, Default)]
pub struct ModalCore {
    open: bool,
    scroll_locked: bool,
    autoplay: bool,
    trap: Option<FocusTrap>,
}

impl ModalCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    #[must_use]
    pub fn trap(&self) -> Option<FocusTrap> {
        self.trap
    }

    /// Open the modal.
    ///
    /// `focusable_count` is the size of the focusable set inside the panel and
    /// `video_src` the current source of the embedded video, if there is one.
    pub fn open(&mut self, focusable_count: usize, video_src: Option<&str>) -> Vec<Action> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        self.scroll_locked = true;
        self.trap = FocusTrap::new(focusable_count);

        let mut actions = vec![Action::Show, Action::LockScroll];
        if let Some(src) = video_src {
            self.autoplay = true;
            actions.push(Action::SetVideoSrc(with_autoplay(src)));
        }
        actions
    }

    /// Close the modal, undoing everything [`ModalCore::open`] did.
    pub fn close(&mut self, video_src: Option<&str>) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.scroll_locked = false;
        self.autoplay = false;
        self.trap = None;

        let mut actions = vec![Action::Hide, Action::UnlockScroll];
        if let Some(src) = video_src {
            actions.push(Action::SetVideoSrc(without_autoplay(src)));
        }
        actions
    }

    pub fn close_via(&mut self, trigger: CloseTrigger, video_src: Option<&str>) -> Vec<Action> {
        log::debug!("modal close requested by {trigger:?}");
        self.close(video_src)
    }

    /// Handle a keydown. `active` is the index of the focused element within
    /// the focusable set, `None` if focus is elsewhere.
    pub fn on_key_down(&mut self, key: &str, shift: bool, active: Option<usize>, video_src: Option<&str>) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::default();
        }
        match key {
            "Escape" => KeyOutcome { prevent_default: true, actions: self.close_via(CloseTrigger::Escape, video_src) },
            "Tab" => {
                let target = self
                    .trap
                    .and_then(|trap| trap.redirect(active, TabDirection::from_shift(shift)));
                match target {
                    Some(index) => KeyOutcome { prevent_default: true, actions: vec![Action::Focus(index)] },
                    None => KeyOutcome::default(),
                }
            }
            _ => KeyOutcome::default(),
        }
    }
}

/// Add the autoplay request to a video URL, once.
#[must_use]
pub fn with_autoplay(src: &str) -> String {
    let (head, fragment) = split_fragment(src);
    let (base, query) = split_query(head);
    if let Some(query) = query {
        if query.split('&').any(|p| p == AUTOPLAY_PARAM) {
            return src.to_owned();
        }
        let joiner = if query.is_empty() || query.ends_with('&') { "" } else { "&" };
        return format!("{base}?{query}{joiner}{AUTOPLAY_PARAM}{fragment}");
    }
    format!("{base}?{AUTOPLAY_PARAM}{fragment}")
}

/// Remove the autoplay request from a video URL, keeping other parameters.
#[must_use]
pub fn without_autoplay(src: &str) -> String {
    let (head, fragment) = split_fragment(src);
    let (base, query) = split_query(head);
    let Some(query) = query else {
        return src.to_owned();
    };
    let kept = query
        .split('&')
        .filter(|p| !p.is_empty() && *p != AUTOPLAY_PARAM)
        .collect::<Vec<_>>();
    if kept.is_empty() {
        format!("{base}{fragment}")
    } else {
        format!("{base}?{}{fragment}", kept.join("&"))
    }
}

fn split_fragment(src: &str) -> (&str, &str) {
    match src.find('#') {
        Some(i) => src.split_at(i),
        None => (src, ""),
    }
}

fn split_query(src: &str) -> (&str, Option<&str>) {
    match src.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (src, None),
    }
}
