//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage can be disabled (private browsing,
//! sandboxed frames), in which case the theme still applies for the session.

use widgets::theme::Theme;

use crate::util::context::PageContext;
use crate::util::error::DomError;

const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the stored preference; light when absent or unreadable.
pub fn read_preference(ctx: &PageContext) -> Theme {
    let stored = ctx
        .window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(&ctx.config.theme_storage_key).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// The theme currently applied to `<html>`.
pub fn current(ctx: &PageContext) -> Theme {
    let attr = ctx
        .document
        .document_element()
        .and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
    Theme::from_stored(attr.as_deref())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(ctx: &PageContext, theme: Theme) -> Result<(), DomError> {
    if let Some(el) = ctx.document.document_element() {
        el.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    }
    Ok(())
}

/// Toggle the theme and persist the new preference.
pub fn toggle(ctx: &PageContext, current: Theme) -> Result<Theme, DomError> {
    let next = current.toggled();
    apply(ctx, next)?;
    match ctx.window.local_storage() {
        Ok(Some(storage)) => {
            if let Err(e) = storage.set_item(&ctx.config.theme_storage_key, next.as_str()) {
                log::warn!("theme preference not saved: {}", DomError::from(e));
            }
        }
        Ok(None) | Err(_) => log::debug!("localStorage unavailable; theme not persisted"),
    }
    Ok(next)
}
