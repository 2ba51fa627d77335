//! Theme toggle button.

use std::rc::Rc;

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;
use crate::util::theme;

pub fn setup(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    let Some(button) = &ctx.theme_toggle else {
        return Ok(());
    };

    theme::apply(ctx, theme::read_preference(ctx))?;

    let ctx_cb = Rc::clone(ctx);
    let icon_host = button.clone();
    listen(button, "click", move |_| {
        let next = match theme::toggle(&ctx_cb, theme::current(&ctx_cb)) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("theme toggle failed: {e}");
                return;
            }
        };
        if let Ok(Some(icon)) = icon_host.query_selector("i") {
            icon.set_text_content(Some(next.icon()));
        }
    })
}
