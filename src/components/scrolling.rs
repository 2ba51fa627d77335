//! In-page smooth scrolling and reveal-on-scroll animations.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};
use widgets::consts::{ANIMATE_SELECTOR, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD};
use widgets::scroll::{fragment_selector, should_reveal, target_top};

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;
use crate::util::query::select_all;

/// Smooth-scroll so the element matching `selector` sits below the header.
///
/// Returns `false` when nothing matches.
pub fn scroll_to_section(ctx: &PageContext, selector: &str) -> Result<bool, DomError> {
    let Some(target) = ctx
        .document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };
    let header_height = ctx.header.as_ref().map_or(0, HtmlElement::offset_height);
    let top = target_top(f64::from(target.offset_top()), f64::from(header_height));

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    ctx.window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

/// Intercept `a[href^="#"]` clicks and scroll smoothly instead of jumping.
pub fn setup_smooth_links(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    for link in select_all::<Element>(&ctx.document, r##"a[href^="#"]"##)? {
        let ctx = Rc::clone(ctx);
        let href = link.clone();
        listen(&link, "click", move |ev| {
            ev.prevent_default();
            let Some(raw) = href.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_selector(&raw) else {
                return;
            };
            if let Err(e) = scroll_to_section(&ctx, selector) {
                log::warn!("cannot scroll to {selector}: {e}");
            }
        })?;
    }
    Ok(())
}

/// Add `active` to `.scroll-reveal` elements once they rise into view.
pub fn setup_scroll_reveal(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    let ctx_cb = Rc::clone(ctx);
    listen(&ctx.window, "scroll", move |_| {
        if let Err(e) = reveal_visible(&ctx_cb) {
            log::warn!("scroll reveal failed: {e}");
        }
    })
}

fn reveal_visible(ctx: &PageContext) -> Result<(), DomError> {
    let viewport_height = ctx.window.inner_height()?.as_f64().unwrap_or(0.0);
    for el in select_all::<Element>(&ctx.document, ".scroll-reveal")? {
        if should_reveal(el.get_bounding_client_rect().top(), viewport_height) {
            el.class_list().add_1("active")?;
        }
    }
    Ok(())
}

/// Observe cards and add `animate-in` the first time each intersects.
pub fn setup_reveal_observer(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    let targets = select_all::<Element>(&ctx.document, ANIMATE_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(on_intersections);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    init.set_root_margin(OBSERVER_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    Ok(())
}

fn on_intersections(entries: Array, _observer: IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        if entry.is_intersecting() {
            if let Err(e) = entry.target().class_list().add_1("animate-in") {
                log::warn!("animate-in failed: {}", DomError::from(e));
            }
        }
    }
}
