//! # molino-site
//!
//! WebAssembly front end for the Instituto Tecnológico El Molino site. The
//! page markup is static; this crate attaches behavior to it once the DOM is
//! ready: header scroll effects, the mobile menu, the video modal, smooth
//! scrolling, reveal animations, form validation with notification banners,
//! the theme toggle and the WhatsApp button.
//!
//! State machines and pure logic live in the `widgets` crate; this crate
//! captures page elements into a [`util::context::PageContext`] and wires
//! DOM events to those cores via `web-sys`.

pub mod components;
pub mod util;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::components::notifier::Notifier;
use crate::components::{
    exports, forms, header, nav_menu, page_text, scrolling, theme_toggle, video_modal, whatsapp,
};
use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger not installed: {e}")));
    }

    if let Err(e) = boot() {
        log::error!("site startup failed: {e}");
    }
}

/// Run [`init`] now, or on `DOMContentLoaded` if the document is still parsing.
fn boot() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if state.as_string().as_deref() == Some("loading") {
        return listen(&document, "DOMContentLoaded", |_| {
            if let Err(e) = init() {
                log::error!("site startup failed: {e}");
            }
        });
    }
    init().map(|_| ())
}

/// Handles to the components other code may drive after startup.
pub struct Site {
    pub context: Rc<PageContext>,
    pub notifier: Rc<Notifier>,
    pub video_modal: Option<Rc<video_modal::VideoModal>>,
}

/// Capture the page and wire every component.
///
/// A component that fails to wire is logged and skipped; only a missing
/// window, document or body is fatal.
pub fn init() -> Result<Site, DomError> {
    let ctx = Rc::new(PageContext::capture()?);
    let notifier = Notifier::new(Rc::clone(&ctx));

    let video_modal = video_modal::setup(&ctx).unwrap_or_else(|e| {
        log::warn!("video modal setup failed: {e}");
        None
    });

    let steps = [
        ("header", header::setup(&ctx)),
        ("mobile menu", nav_menu::setup(&ctx)),
        ("whatsapp", whatsapp::setup(&ctx)),
        ("smooth scrolling", scrolling::setup_smooth_links(&ctx)),
        ("reveal observer", scrolling::setup_reveal_observer(&ctx)),
        ("scroll reveal", scrolling::setup_scroll_reveal(&ctx)),
        ("forms", forms::setup(&ctx, &notifier)),
        ("theme", theme_toggle::setup(&ctx)),
        ("footer year", page_text::update_footer_year(&ctx)),
        ("character counters", page_text::setup_char_counters(&ctx)),
        ("window exports", exports::install(&ctx, &notifier)),
    ];
    for (name, result) in steps {
        if let Err(e) = result {
            log::warn!("{name} setup failed: {e}");
        }
    }

    log::info!("✅ Script cargado correctamente");
    log::info!("🚀 Instituto Tecnológico El Molino - Página web optimizada");
    Ok(Site { context: ctx, notifier, video_modal })
}
