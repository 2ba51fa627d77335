//! Header scroll effects.

use std::cell::RefCell;
use std::rc::Rc;

use widgets::header::HeaderScroll;

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;

pub fn setup(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    let Some(header) = ctx.header.clone() else {
        log::debug!("no #header; scroll effects disabled");
        return Ok(());
    };

    let state = RefCell::new(HeaderScroll::new());
    let window = ctx.window.clone();
    listen(&ctx.window, "scroll", move |_| {
        let top = window.scroll_y().unwrap_or(0.0);
        let frame = state.borrow_mut().on_scroll(top);
        let applied = header
            .class_list()
            .toggle_with_force("scrolled", frame.scrolled)
            .and_then(|_| header.style().set_property("transform", frame.transform()));
        if let Err(e) = applied {
            log::warn!("header update failed: {}", DomError::from(e));
        }
    })
}
