//! Selector helpers that return typed element lists.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

use crate::util::error::DomError;

/// All matches of `selector` in the document that are of type `T`.
pub fn select_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, DomError> {
    Ok(collect(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector` that are of type `T`.
pub fn select_within<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, DomError> {
    Ok(collect(&root.query_selector_all(selector)?))
}

fn collect<T: JsCast>(nodes: &NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
