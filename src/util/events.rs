//! Event listener registration.
//!
//! Page-level listeners live as long as the page, so their closures are
//! leaked with `forget()`. Listeners on short-lived nodes (notification close
//! buttons) keep the returned [`Closure`] and drop it with the node.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::util::error::DomError;

pub type Listener = Closure<dyn FnMut(Event)>;

/// Attach `handler` and hand back the closure; the caller owns its lifetime.
pub fn attach(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<Listener, DomError> {
    let closure: Listener = Closure::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

/// Attach `handler` for the rest of the page's life.
pub fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    attach(target, kind, handler)?.forget();
    Ok(())
}
