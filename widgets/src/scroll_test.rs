#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fragment_selector_accepts_ids() {
    assert_eq!(fragment_selector("#programas"), Some("#programas"));
}

#[test]
fn fragment_selector_rejects_bare_hash_and_urls() {
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector(""), None);
    assert_eq!(fragment_selector("/contacto#form"), None);
}

#[test]
fn target_top_subtracts_header_and_gap() {
    assert_eq!(target_top(1000.0, 80.0), 900.0);
}

#[test]
fn target_top_never_negative() {
    assert_eq!(target_top(50.0, 80.0), 0.0);
}

#[test]
fn reveal_threshold_is_150_above_bottom() {
    assert!(should_reveal(649.0, 800.0));
    assert!(!should_reveal(650.0, 800.0));
    assert!(!should_reveal(900.0, 800.0));
}
