//! Mobile navigation menu: hamburger toggle, link clicks, outside clicks and
//! resize.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};
use widgets::menu::{MenuCore, bar_style};

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;
use crate::util::query::select_within;

struct NavMenu {
    menu: Element,
    toggle: Element,
    core: RefCell<MenuCore>,
}

impl NavMenu {
    fn render(&self, open: bool) {
        if let Err(e) = self.try_render(open) {
            log::warn!("menu update failed: {e}");
        }
    }

    fn try_render(&self, open: bool) -> Result<(), DomError> {
        self.menu.class_list().toggle_with_force("active", open)?;
        self.toggle.class_list().toggle_with_force("active", open)?;
        for (i, bar) in select_within::<HtmlElement>(&self.toggle, ".bar")?.iter().enumerate() {
            let style = bar_style(open, i);
            bar.style().set_property("transform", style.transform)?;
            bar.style().set_property("opacity", style.opacity)?;
        }
        Ok(())
    }

    fn close(&self) {
        let changed = self.core.borrow_mut().close();
        if changed {
            self.render(false);
        }
    }
}

pub fn setup(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    let (Some(toggle), Some(menu)) = (&ctx.nav_toggle, &ctx.nav_menu) else {
        log::debug!("no #nav-toggle / #nav-menu; mobile menu disabled");
        return Ok(());
    };

    let nav = Rc::new(NavMenu {
        menu: menu.clone(),
        toggle: toggle.clone(),
        core: RefCell::new(MenuCore::new(ctx.config.mobile_breakpoint_px)),
    });

    let n = Rc::clone(&nav);
    listen(toggle, "click", move |_| {
        let open = n.core.borrow_mut().toggle();
        n.render(open);
    })?;

    for link in select_within::<Element>(menu, ".nav-link")? {
        let n = Rc::clone(&nav);
        listen(&link, "click", move |_| n.close())?;
    }

    let n = Rc::clone(&nav);
    listen(&ctx.document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside_toggle = n.toggle.contains(target.as_ref());
        let inside_menu = n.menu.contains(target.as_ref());
        let changed = n.core.borrow_mut().on_document_click(inside_toggle, inside_menu);
        if changed {
            n.render(false);
        }
    })?;

    let n = Rc::clone(&nav);
    let window = ctx.window.clone();
    listen(&ctx.window, "resize", move |_| {
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let changed = n.core.borrow_mut().on_resize(width);
        if changed {
            n.render(false);
        }
    })
}
