//! Form submit validation.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use widgets::form::{FormMessages, Validation};

use crate::components::notifier::Notifier;
use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;
use crate::util::query::{select_all, select_within};

pub fn setup(ctx: &Rc<PageContext>, notifier: &Rc<Notifier>) -> Result<(), DomError> {
    let messages = Rc::new(ctx.config.form_messages());
    for form in select_all::<Element>(&ctx.document, "form")? {
        let notifier = Rc::clone(notifier);
        let messages = Rc::clone(&messages);
        let target = form.clone();
        listen(&form, "submit", move |ev| {
            ev.prevent_default();
            log::debug!("form submitted: #{}", target.id());
            if let Err(e) = on_submit(&target, &messages, &notifier) {
                log::warn!("form validation failed: {e}");
            }
        })?;
    }
    Ok(())
}

/// Mark required fields and show exactly one outcome banner.
fn on_submit(form: &Element, messages: &FormMessages, notifier: &Rc<Notifier>) -> Result<(), DomError> {
    let fields = select_within::<Element>(form, "[required]")?;
    let validation = Validation::check(fields.iter().map(field_value));
    for (field, valid) in fields.iter().zip(validation.fields()) {
        field.class_list().toggle_with_force("error", !valid)?;
    }
    let (severity, message) = messages.outcome(&validation);
    notifier.notify(message, severity);
    Ok(())
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        field.text_content().unwrap_or_default()
    }
}
