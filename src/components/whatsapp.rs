//! WhatsApp contact button.

use std::rc::Rc;

use widgets::link::whatsapp_url;

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;

pub fn setup(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    let Some(button) = &ctx.whatsapp_button else {
        return Ok(());
    };

    let url = whatsapp_url(&ctx.config.whatsapp_phone, &ctx.config.whatsapp_greeting);
    let window = ctx.window.clone();
    listen(button, "click", move |_| {
        if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
            log::warn!("cannot open WhatsApp: {}", DomError::from(e));
        }
    })
}
