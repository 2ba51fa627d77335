//! Interaction cores for the El Molino institutional site.
//!
//! This crate holds every piece of page behavior that can be expressed without
//! a browser: the notification lifecycle, the video modal and its focus trap,
//! header and menu state, form validation, and the small pure helpers around
//! scrolling, theming and links. Operations return action values; the
//! WebAssembly host (`molino-site`) applies them to the document and arms the
//! timers they ask for.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`notify`] | Notification center and its guarded phase machine |
//! | [`modal`] | Video modal open/close state, autoplay source rewriting |
//! | [`focus`] | Tab / Shift+Tab focus trap |
//! | [`header`] | Header `scrolled` / hide-on-scroll-down state |
//! | [`menu`] | Mobile navigation menu and hamburger bar styles |
//! | [`scroll`] | Smooth-scroll targets, reveal and viewport checks |
//! | [`form`] | Required-field validation and submit outcome |
//! | [`theme`] | Light/dark preference |
//! | [`link`] | WhatsApp deep link |
//! | [`text`] | Character counter and footer year helpers |
//! | [`config`] | Runtime configuration |
//! | [`consts`] | Shared constants (timings, thresholds, colors) |

pub mod config;
pub mod consts;
pub mod focus;
pub mod form;
pub mod header;
pub mod link;
pub mod menu;
pub mod modal;
pub mod notify;
pub mod scroll;
pub mod text;
pub mod theme;

pub use config::{ConfigError, SiteConfig};
pub use notify::{NotificationCenter, NotifyError, Severity};
