use super::*;

#[test]
fn missing_globals_have_readable_messages() {
    assert_eq!(DomError::NoWindow.to_string(), "no global window");
    assert_eq!(DomError::NoDocument.to_string(), "window has no document");
    assert_eq!(DomError::NoBody.to_string(), "document has no body");
}

#[test]
fn not_html_element_names_the_node() {
    assert_eq!(DomError::NotHtmlElement("banner").to_string(), "expected an HTML element for banner");
}

#[test]
fn js_error_carries_message() {
    let err = DomError::Js("SyntaxError: '#' is not a valid selector".into());
    assert!(err.to_string().starts_with("DOM call failed: SyntaxError"));
}
