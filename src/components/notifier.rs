//! Notification banners rendered into `<body>`.
//!
//! ARCHITECTURE
//! ============
//! [`widgets::notify::NotificationCenter`] decides phases and timing; this
//! host builds the banner nodes, runs the requested timers with
//! `gloo_timers` and feeds expirations back into the center. The center is
//! only borrowed while it computes actions, never while they are applied, so
//! a timer or click that lands mid-update cannot double-borrow it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use widgets::consts::{BANNER_HIDDEN_TRANSFORM, BANNER_SHOWN_TRANSFORM};
use widgets::notify::{Action, NotificationCenter, NotificationId, Timer};
use widgets::Severity;

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::{Listener, attach};

struct Banner {
    element: HtmlElement,
    _on_close: Listener,
}

pub struct Notifier {
    ctx: Rc<PageContext>,
    center: RefCell<NotificationCenter>,
    banners: RefCell<HashMap<NotificationId, Banner>>,
}

impl Notifier {
    pub fn new(ctx: Rc<PageContext>) -> Rc<Self> {
        let center = NotificationCenter::new(ctx.config.notify);
        Rc::new(Self { ctx, center: RefCell::new(center), banners: RefCell::new(HashMap::new()) })
    }

    /// Show a banner. Blank messages are logged and dropped.
    pub fn notify(self: &Rc<Self>, message: &str, severity: Severity) -> Option<NotificationId> {
        let created = self.center.borrow_mut().notify(message, severity);
        match created {
            Ok((id, actions)) => {
                self.apply(actions);
                Some(id)
            }
            Err(e) => {
                log::warn!("notification not shown: {e}");
                None
            }
        }
    }

    pub fn success(self: &Rc<Self>, message: &str) -> Option<NotificationId> {
        self.notify(message, Severity::Success)
    }

    pub fn error(self: &Rc<Self>, message: &str) -> Option<NotificationId> {
        self.notify(message, Severity::Error)
    }

    /// Dismiss as if the banner's close control was clicked.
    pub fn dismiss(self: &Rc<Self>, id: NotificationId) {
        let actions = self.center.borrow_mut().dismiss(id);
        self.apply(actions);
    }

    /// Number of banners currently attached to the document.
    pub fn attached(&self) -> usize {
        self.banners.borrow().len()
    }

    fn fire(self: &Rc<Self>, id: NotificationId, timer: Timer) {
        let actions = self.center.borrow_mut().fire(id, timer);
        self.apply(actions);
    }

    fn apply(self: &Rc<Self>, actions: Vec<Action>) {
        for action in actions {
            if let Err(e) = self.apply_one(action) {
                log::warn!("notification update failed: {e}");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, action: Action) -> Result<(), DomError> {
        match action {
            Action::Mount { id, message, severity } => {
                let banner = self.build_banner(id, &message, severity)?;
                self.ctx.body.append_child(&banner.element)?;
                self.banners.borrow_mut().insert(id, banner);
            }
            Action::Schedule { id, timer, after_ms } => {
                let this = Rc::clone(self);
                Timeout::new(after_ms, move || this.fire(id, timer)).forget();
            }
            Action::SlideIn(id) => self.set_transform(id, BANNER_SHOWN_TRANSFORM)?,
            Action::SlideOut(id) => self.set_transform(id, BANNER_HIDDEN_TRANSFORM)?,
            Action::Unmount(id) => {
                let removed = self.banners.borrow_mut().remove(&id);
                if let Some(banner) = removed {
                    banner.element.remove();
                }
            }
        }
        Ok(())
    }

    fn set_transform(&self, id: NotificationId, transform: &str) -> Result<(), DomError> {
        if let Some(banner) = self.banners.borrow().get(&id) {
            banner.element.style().set_property("transform", transform)?;
        }
        Ok(())
    }

    fn build_banner(self: &Rc<Self>, id: NotificationId, message: &str, severity: Severity) -> Result<Banner, DomError> {
        let root = self.ctx.create_html("div")?;
        root.set_class_name(&severity.class_name());
        root.style().set_css_text(&severity.banner_style());
        root.set_attribute("role", if severity == Severity::Error { "alert" } else { "status" })?;

        let content = self.ctx.create_html("div")?;
        content.set_class_name("notification-content");

        let text = self.ctx.create_html("span")?;
        text.set_class_name("notification-message");
        text.set_text_content(Some(message));

        let close = self.ctx.create_html("button")?;
        close.set_class_name("notification-close");
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Cerrar")?;
        close.set_text_content(Some("\u{00d7}"));

        content.append_child(&text)?;
        content.append_child(&close)?;
        root.append_child(&content)?;

        let this = Rc::clone(self);
        let on_close = attach(&close, "click", move |_| this.dismiss(id))?;
        Ok(Banner { element: root, _on_close: on_close })
    }
}
