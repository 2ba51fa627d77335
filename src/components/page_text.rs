//! Footer year and textarea character counters.

use std::rc::Rc;

use web_sys::{Element, HtmlTextAreaElement};
use widgets::text::{counter_label, remaining_chars, stamp_year};

use crate::util::context::PageContext;
use crate::util::error::DomError;
use crate::util::events::listen;
use crate::util::query::select_all;

const COUNTER_STYLE: &str = "font-size: 0.75rem; color: #6b7280; text-align: right; margin-top: 0.25rem;";

pub fn update_footer_year(ctx: &PageContext) -> Result<(), DomError> {
    let Some(footer) = ctx.document.query_selector(".footer-copyright")? else {
        return Ok(());
    };
    let year = js_sys::Date::new_0().get_full_year();
    if let Some(markup) = stamp_year(&footer.inner_html(), year) {
        footer.set_inner_html(&markup);
    }
    Ok(())
}

/// Give each `textarea[maxlength]` a live "remaining characters" line.
pub fn setup_char_counters(ctx: &Rc<PageContext>) -> Result<(), DomError> {
    for area in select_all::<HtmlTextAreaElement>(&ctx.document, "textarea[maxlength]")? {
        let Some(parent) = area.parent_node() else {
            continue;
        };
        let counter = ctx.create_html("div")?;
        counter.set_class_name("char-counter");
        counter.style().set_css_text(COUNTER_STYLE);
        parent.append_child(&counter)?;

        refresh(&area, &counter);
        let source = area.clone();
        listen(&area, "input", move |_| refresh(&source, &counter))?;
    }
    Ok(())
}

fn refresh(area: &HtmlTextAreaElement, counter: &Element) {
    let remaining = remaining_chars(area.max_length(), &area.value());
    counter.set_text_content(Some(&counter_label(remaining)));
}
