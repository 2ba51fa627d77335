//! Video modal wiring: trigger button, close control, overlay and keyboard.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};
use widgets::consts::FOCUSABLE_SELECTOR;
use widgets::modal::{Action, CloseTrigger, ModalCore};

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;
use crate::util::query::select_within;

pub struct VideoModal {
    ctx: Rc<PageContext>,
    panel: Element,
    core: RefCell<ModalCore>,
    focusables: RefCell<Vec<HtmlElement>>,
}

/// Wire the modal if its trigger, panel, overlay and close control all exist.
pub fn setup(ctx: &Rc<PageContext>) -> Result<Option<Rc<VideoModal>>, DomError> {
    let (Some(trigger), Some(panel), Some(overlay), Some(close)) =
        (&ctx.video_button, &ctx.video_modal, &ctx.modal_overlay, &ctx.modal_close)
    else {
        log::debug!("video modal markup not found; modal disabled");
        return Ok(None);
    };

    let modal = Rc::new(VideoModal {
        ctx: Rc::clone(ctx),
        panel: panel.clone(),
        core: RefCell::new(ModalCore::new()),
        focusables: RefCell::new(Vec::new()),
    });

    let m = Rc::clone(&modal);
    listen(trigger, "click", move |_| m.open())?;

    let m = Rc::clone(&modal);
    listen(close, "click", move |_| m.close(CloseTrigger::CloseButton))?;

    let m = Rc::clone(&modal);
    listen(overlay, "click", move |_| m.close(CloseTrigger::Overlay))?;

    let m = Rc::clone(&modal);
    listen(&ctx.document, "keydown", move |ev| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>() {
            m.on_key_down(key);
        }
    })?;

    Ok(Some(modal))
}

impl VideoModal {
    pub fn is_open(&self) -> bool {
        self.core.borrow().is_open()
    }

    pub fn open(&self) {
        let focusables = select_within::<HtmlElement>(&self.panel, FOCUSABLE_SELECTOR).unwrap_or_else(|e| {
            log::warn!("focus trap disabled: {e}");
            Vec::new()
        });
        let src = self.video_src();
        let actions = self.core.borrow_mut().open(focusables.len(), src.as_deref());
        *self.focusables.borrow_mut() = focusables;
        self.apply(actions);
    }

    pub fn close(&self, trigger: CloseTrigger) {
        let src = self.video_src();
        let actions = self.core.borrow_mut().close_via(trigger, src.as_deref());
        self.focusables.borrow_mut().clear();
        self.apply(actions);
    }

    fn on_key_down(&self, ev: &KeyboardEvent) {
        let active = self.active_index();
        let src = self.video_src();
        let outcome = self
            .core
            .borrow_mut()
            .on_key_down(&ev.key(), ev.shift_key(), active, src.as_deref());
        if outcome.prevent_default {
            ev.prevent_default();
        }
        if !self.is_open() {
            self.focusables.borrow_mut().clear();
        }
        self.apply(outcome.actions);
    }

    fn video(&self) -> Option<Element> {
        self.panel.query_selector("iframe").ok().flatten()
    }

    fn video_src(&self) -> Option<String> {
        self.video().and_then(|v| v.get_attribute("src"))
    }

    fn active_index(&self) -> Option<usize> {
        let active = self.ctx.document.active_element()?;
        let active: &Node = active.as_ref();
        self.focusables
            .borrow()
            .iter()
            .position(|el| el.is_same_node(Some(active)))
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            if let Err(e) = self.apply_one(action) {
                log::warn!("modal update failed: {e}");
            }
        }
    }

    fn apply_one(&self, action: Action) -> Result<(), DomError> {
        match action {
            Action::Show => self.panel.class_list().add_1("active")?,
            Action::Hide => self.panel.class_list().remove_1("active")?,
            Action::LockScroll => self.ctx.body.style().set_property("overflow", "hidden")?,
            Action::UnlockScroll => self.ctx.body.style().set_property("overflow", "")?,
            Action::SetVideoSrc(src) => {
                if let Some(video) = self.video() {
                    video.set_attribute("src", &src)?;
                }
            }
            Action::Focus(index) => {
                if let Some(el) = self.focusables.borrow().get(index) {
                    el.focus()?;
                }
            }
        }
        Ok(())
    }
}
