//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys glue (element capture, listeners, selector
//! queries, storage) from component logic so components read as wiring
//! between DOM events and the `widgets` cores.

pub mod context;
pub mod error;
pub mod events;
pub mod query;
pub mod theme;
