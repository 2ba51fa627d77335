//! Notification center: transient banners with entry/exit timing.
//!
//! Each banner walks a one-way phase machine:
//!
//! ```text
//! Entering -(enter delay)-> Visible -(dismiss)-> Exiting -(exit)-> Removed
//! ```
//!
//! Dismissal comes from two independent sources, the close control and the
//! auto-dismiss timer, and neither cancels the other. Every transition is
//! therefore guarded on the current phase, so a late timer for a banner that
//! already moved on (or is gone) produces no actions. `Removed` is a sink.
//!
//! The center never touches the document. It returns [`Action`]s which the host
//! applies, including [`Action::Schedule`] requests that the host turns into
//! real timers and feeds back through [`NotificationCenter::fire`].

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::consts::{
    COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS, NOTIFY_AUTO_DISMISS_MS, NOTIFY_ENTER_DELAY_MS, NOTIFY_EXIT_MS,
};

/// Errors produced when creating a notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// The message was empty or whitespace only.
    #[error("notification message is empty")]
    EmptyMessage,
}

/// Visual severity of a banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Lowercase name used in class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Banner background color.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => COLOR_SUCCESS,
            Self::Error => COLOR_ERROR,
            Self::Info => COLOR_INFO,
        }
    }

    /// Class attribute for the banner root.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Inline style for the banner root, starting off-screen to the right.
    #[must_use]
    pub fn banner_style(self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); \
             z-index: 10000; transform: translateX(100%); transition: transform 0.3s ease; max-width: 400px;",
            self.background()
        )
    }
}

/// Identifier of a banner, unique within its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Lifecycle phase of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting for the entry delay.
    Entering,
    /// On screen.
    Visible,
    /// Sliding out; removal is pending.
    Exiting,
    /// Detached from the document. Terminal.
    Removed,
}

/// Timers a banner can ask the host to arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Slide the banner into view.
    Reveal,
    /// Dismiss the banner if the user has not.
    AutoDismiss,
    /// Detach the banner once the exit transition has run.
    Remove,
}

/// Document changes and timer requests for the host to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Create the banner element (off-screen) and attach it to the body.
    Mount { id: NotificationId, message: String, severity: Severity },
    /// Call back into [`NotificationCenter::fire`] after `after_ms`.
    Schedule { id: NotificationId, timer: Timer, after_ms: u32 },
    /// Transition the banner on screen.
    SlideIn(NotificationId),
    /// Transition the banner off screen.
    SlideOut(NotificationId),
    /// Detach the banner element.
    Unmount(NotificationId),
}

/// Timing windows, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifyTiming {
    pub enter_delay_ms: u32,
    pub auto_dismiss_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotifyTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: NOTIFY_ENTER_DELAY_MS,
            auto_dismiss_ms: NOTIFY_AUTO_DISMISS_MS,
            exit_ms: NOTIFY_EXIT_MS,
        }
    }
}

/// A live banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// Owns every banner that has not yet been removed.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    timing: NotifyTiming,
    next_id: u64,
    live: BTreeMap<NotificationId, Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timing: NotifyTiming) -> Self {
        Self { timing, next_id: 0, live: BTreeMap::new() }
    }

    #[must_use]
    pub fn timing(&self) -> NotifyTiming {
        self.timing
    }

    /// Create a banner and return its id with the actions that realize it.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::EmptyMessage`] if `message` is blank.
    pub fn notify(&mut self, message: &str, severity: Severity) -> Result<(NotificationId, Vec<Action>), NotifyError> {
        if message.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            Notification { id, message: message.to_owned(), severity, phase: Phase::Entering },
        );

        let actions = vec![
            Action::Mount { id, message: message.to_owned(), severity },
            Action::Schedule { id, timer: Timer::Reveal, after_ms: self.timing.enter_delay_ms },
            Action::Schedule { id, timer: Timer::AutoDismiss, after_ms: self.timing.auto_dismiss_ms },
        ];
        Ok((id, actions))
    }

    /// Manual dismissal from the banner's close control.
    ///
    /// Leaves any pending auto-dismiss timer armed; it becomes a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> Vec<Action> {
        self.begin_exit(id)
    }

    /// Handle an expired timer previously requested via [`Action::Schedule`].
    pub fn fire(&mut self, id: NotificationId, timer: Timer) -> Vec<Action> {
        match timer {
            Timer::Reveal => self.reveal(id),
            Timer::AutoDismiss => self.begin_exit(id),
            Timer::Remove => self.remove(id),
        }
    }

    /// Current phase; ids that are unknown or already gone report `Removed`.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.live.get(&id).map_or(Phase::Removed, |n| n.phase)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.get(&id)
    }

    /// Banners not yet removed, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.values()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn reveal(&mut self, id: NotificationId) -> Vec<Action> {
        match self.live.get_mut(&id) {
            Some(n) if n.phase == Phase::Entering => {
                n.phase = Phase::Visible;
                vec![Action::SlideIn(id)]
            }
            _ => Vec::new(),
        }
    }

    fn begin_exit(&mut self, id: NotificationId) -> Vec<Action> {
        match self.live.get_mut(&id) {
            Some(n) if matches!(n.phase, Phase::Entering | Phase::Visible) => {
                n.phase = Phase::Exiting;
                vec![
                    Action::SlideOut(id),
                    Action::Schedule { id, timer: Timer::Remove, after_ms: self.timing.exit_ms },
                ]
            }
            _ => {
                log::debug!("notification {} already leaving; dismiss ignored", id.0);
                Vec::new()
            }
        }
    }

    fn remove(&mut self, id: NotificationId) -> Vec<Action> {
        match self.live.get(&id) {
            Some(n) if n.phase == Phase::Exiting => {
                self.live.remove(&id);
                vec![Action::Unmount(id)]
            }
            _ => Vec::new(),
        }
    }
}
