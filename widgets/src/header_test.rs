use super::*;

#[test]
fn top_of_page_is_plain_and_visible() {
    let mut header = HeaderScroll::new();
    let frame = header.on_scroll(0.0);
    assert_eq!(frame, HeaderFrame { scrolled: false, hidden: false });
    assert_eq!(frame.transform(), "translateY(0)");
}

#[test]
fn scrolled_class_starts_past_100() {
    let mut header = HeaderScroll::new();
    assert!(!header.on_scroll(100.0).scrolled);
    assert!(header.on_scroll(101.0).scrolled);
}

#[test]
fn scrolling_down_past_200_hides() {
    let mut header = HeaderScroll::new();
    assert!(!header.on_scroll(150.0).hidden);
    assert!(!header.on_scroll(200.0).hidden);
    let frame = header.on_scroll(250.0);
    assert!(frame.hidden);
    assert_eq!(frame.transform(), "translateY(-100%)");
}

#[test]
fn scrolling_up_shows_again() {
    let mut header = HeaderScroll::new();
    header.on_scroll(400.0);
    assert!(header.on_scroll(500.0).hidden);
    let frame = header.on_scroll(480.0);
    assert!(!frame.hidden);
    assert!(frame.scrolled);
}

#[test]
fn same_offset_counts_as_not_down() {
    let mut header = HeaderScroll::new();
    header.on_scroll(300.0);
    assert!(!header.on_scroll(300.0).hidden);
}
