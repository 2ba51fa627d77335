//! Functions published on `window` for inline page scripts.
//!
//! | Global | Effect |
//! |--------|--------|
//! | `showSuccessMessage(msg)` | success banner |
//! | `showErrorMessage(msg)` | error banner |
//! | `scrollToSection(selector)` | smooth scroll below the header |

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::components::notifier::Notifier;
use crate::components::scrolling::scroll_to_section;
use crate::util::context::PageContext;
use crate::util::error::DomError;

pub fn install(ctx: &Rc<PageContext>, notifier: &Rc<Notifier>) -> Result<(), DomError> {
    let n = Rc::clone(notifier);
    publish(ctx, "showSuccessMessage", move |arg: JsValue| {
        n.success(&arg.as_string().unwrap_or_default());
    })?;

    let n = Rc::clone(notifier);
    publish(ctx, "showErrorMessage", move |arg: JsValue| {
        n.error(&arg.as_string().unwrap_or_default());
    })?;

    let ctx_cb = Rc::clone(ctx);
    publish(ctx, "scrollToSection", move |arg: JsValue| {
        let Some(selector) = arg.as_string() else {
            log::warn!("scrollToSection expects a selector string");
            return;
        };
        if let Err(e) = scroll_to_section(&ctx_cb, &selector) {
            log::warn!("cannot scroll to {selector}: {e}");
        }
    })
}

fn publish(ctx: &PageContext, name: &str, f: impl Fn(JsValue) + 'static) -> Result<(), DomError> {
    let closure = Closure::<dyn Fn(JsValue)>::new(f);
    js_sys::Reflect::set(&ctx.window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}
