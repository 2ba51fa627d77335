//! Page elements captured once at startup.
//!
//! Components receive an `Rc<PageContext>` instead of looking elements up on
//! their own, so every widget sees the same snapshot of the markup and tests
//! can build a context over fixture markup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use widgets::SiteConfig;

use crate::util::error::DomError;

pub const HEADER_ID: &str = "header";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const VIDEO_BUTTON_ID: &str = "video-btn";
pub const VIDEO_MODAL_ID: &str = "video-modal";
pub const MODAL_OVERLAY_ID: &str = "modal-overlay";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const WHATSAPP_BUTTON_ID: &str = "whatsapp-btn";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const CONFIG_BLOCK_ID: &str = "site-config";

pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: SiteConfig,

    pub header: Option<HtmlElement>,
    pub nav_menu: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub video_button: Option<Element>,
    pub video_modal: Option<Element>,
    pub modal_overlay: Option<Element>,
    pub modal_close: Option<Element>,
    pub whatsapp_button: Option<Element>,
    pub theme_toggle: Option<Element>,
}

impl PageContext {
    /// Capture the current document.
    ///
    /// Only the window, document and body are required; every widget element
    /// is optional and its absence disables that widget.
    pub fn capture() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;

        let config_raw = document
            .get_element_by_id(CONFIG_BLOCK_ID)
            .and_then(|el| el.text_content());
        let config = SiteConfig::load_or_default(config_raw.as_deref());

        let by_id = |id: &str| document.get_element_by_id(id);
        let header = by_id(HEADER_ID).and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let nav_menu = by_id(NAV_MENU_ID);
        let nav_toggle = by_id(NAV_TOGGLE_ID);
        let video_button = by_id(VIDEO_BUTTON_ID);
        let video_modal = by_id(VIDEO_MODAL_ID);
        let modal_overlay = by_id(MODAL_OVERLAY_ID);
        let modal_close = by_id(MODAL_CLOSE_ID);
        let whatsapp_button = by_id(WHATSAPP_BUTTON_ID);
        let theme_toggle = by_id(THEME_TOGGLE_ID);

        Ok(Self {
            window,
            document,
            body,
            config,
            header,
            nav_menu,
            nav_toggle,
            video_button,
            video_modal,
            modal_overlay,
            modal_close,
            whatsapp_button,
            theme_toggle,
        })
    }

    /// Create an element and view it as an `HtmlElement`.
    pub fn create_html(&self, tag: &'static str) -> Result<HtmlElement, DomError> {
        self.document
            .create_element(tag)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::NotHtmlElement(tag))
    }
}
