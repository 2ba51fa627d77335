//! Page components: each wires one widget's DOM events to its core.
//!
//! DESIGN
//! ======
//! Components receive the shared [`PageContext`](crate::util::context::PageContext)
//! and return `Ok(())` without wiring anything when their markup is absent.

pub mod exports;
pub mod forms;
pub mod header;
pub mod nav_menu;
pub mod notifier;
pub mod page_text;
pub mod scrolling;
pub mod theme_toggle;
pub mod video_modal;
pub mod whatsapp;
