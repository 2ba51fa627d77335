use super::*;
use crate::consts::{WHATSAPP_GREETING, WHATSAPP_PHONE};

#[test]
fn phone_is_reduced_to_digits() {
    let url = whatsapp_url("+54 9 11-1234-5678", "hi");
    assert_eq!(url, "https://wa.me/5491112345678?text=hi");
}

#[test]
fn greeting_is_percent_encoded() {
    let url = whatsapp_url("123", "Hola! ¿Qué tal?");
    assert_eq!(url, "https://wa.me/123?text=Hola%21%20%C2%BFQu%C3%A9%20tal%3F");
}

#[test]
fn default_link_targets_institute_number() {
    let url = whatsapp_url(WHATSAPP_PHONE, WHATSAPP_GREETING);
    assert!(url.starts_with("https://wa.me/5491112345678?text=Hola%21%20Me%20interesa"));
    assert!(!url.contains(' '));
}
