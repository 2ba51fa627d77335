use super::*;

const VIDEO: &str = "https://www.youtube.com/embed/abc123?rel=0";

/// Tracks the document side of the modal the way the host would.
#[derive(Default, Debug, PartialEq, Eq)]
struct FakePage {
    panel_active: bool,
    body_overflow_hidden: bool,
    video_src: String,
    focused: Option<usize>,
}

impl FakePage {
    fn with_video() -> Self {
        Self { video_src: VIDEO.to_owned(), ..Self::default() }
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Show => self.panel_active = true,
                Action::Hide => self.panel_active = false,
                Action::LockScroll => self.body_overflow_hidden = true,
                Action::UnlockScroll => self.body_overflow_hidden = false,
                Action::SetVideoSrc(src) => self.video_src = src,
                Action::Focus(i) => self.focused = Some(i),
            }
        }
    }
}

fn open_page(modal: &mut ModalCore, page: &mut FakePage) {
    let src = page.video_src.clone();
    page.apply(modal.open(3, Some(&src)));
}

// =============================================================
// open / close
// =============================================================

#[test]
fn default_is_closed() {
    let modal = ModalCore::new();
    assert!(!modal.is_open());
    assert!(!modal.scroll_locked());
    assert!(modal.trap().is_none());
}

#[test]
fn open_shows_locks_and_requests_autoplay() {
    let mut modal = ModalCore::new();
    let mut page = FakePage::with_video();
    open_page(&mut modal, &mut page);

    assert!(modal.is_open());
    assert!(modal.autoplay());
    assert!(page.panel_active);
    assert!(page.body_overflow_hidden);
    assert_eq!(page.video_src, format!("{VIDEO}&autoplay=1"));
    assert_eq!(modal.trap().map(FocusTrap::count), Some(3));
}

#[test]
fn open_without_video_does_not_touch_source() {
    let mut modal = ModalCore::new();
    let actions = modal.open(2, None);
    assert_eq!(actions, vec![Action::Show, Action::LockScroll]);
    assert!(!modal.autoplay());
}

#[test]
fn open_twice_is_noop() {
    let mut modal = ModalCore::new();
    let mut page = FakePage::with_video();
    open_page(&mut modal, &mut page);
    let src = page.video_src.clone();
    assert!(modal.open(3, Some(&src)).is_empty());
}

#[test]
fn close_when_closed_is_noop() {
    let mut modal = ModalCore::new();
    assert!(modal.close(Some(VIDEO)).is_empty());
}

#[test]
fn close_restores_everything() {
    let mut modal = ModalCore::new();
    let mut page = FakePage::with_video();
    open_page(&mut modal, &mut page);
    let src = page.video_src.clone();
    page.apply(modal.close(Some(&src)));

    assert!(!modal.is_open());
    assert!(!modal.autoplay());
    assert!(modal.trap().is_none());
    assert_eq!(page, FakePage::with_video());
}

#[test]
fn scroll_lock_tracks_open_state_over_any_sequence() {
    let mut modal = ModalCore::new();
    let ops = [true, true, false, true, false, false, true, false, true];
    for open in ops {
        if open {
            modal.open(1, None);
        } else {
            modal.close(None);
        }
        assert_eq!(modal.scroll_locked(), modal.is_open());
    }
}

// =============================================================
// Triggers
// =============================================================

#[test]
fn every_trigger_leaves_identical_end_state() {
    let mut end_states = Vec::new();
    for trigger in [CloseTrigger::CloseButton, CloseTrigger::Overlay, CloseTrigger::Escape] {
        let mut modal = ModalCore::new();
        let mut page = FakePage::with_video();
        open_page(&mut modal, &mut page);
        let src = page.video_src.clone();
        if trigger == CloseTrigger::Escape {
            let outcome = modal.on_key_down("Escape", false, None, Some(&src));
            assert!(outcome.prevent_default);
            page.apply(outcome.actions);
        } else {
            page.apply(modal.close_via(trigger, Some(&src)));
        }
        assert!(!modal.is_open());
        end_states.push(page);
    }
    assert_eq!(end_states[0], end_states[1]);
    assert_eq!(end_states[1], end_states[2]);
    assert!(!end_states[0].body_overflow_hidden);
    assert!(!end_states[0].video_src.contains("autoplay"));
}

#[test]
fn escape_while_closed_does_nothing() {
    let mut modal = ModalCore::new();
    let outcome = modal.on_key_down("Escape", false, None, Some(VIDEO));
    assert_eq!(outcome, KeyOutcome::default());
}

#[test]
fn other_keys_are_ignored() {
    let mut modal = ModalCore::new();
    modal.open(2, None);
    assert_eq!(modal.on_key_down("Enter", false, Some(0), None), KeyOutcome::default());
    assert!(modal.is_open());
}

// =============================================================
// Focus trap through the modal
// =============================================================

#[test]
fn tab_from_last_focuses_first() {
    let mut modal = ModalCore::new();
    modal.open(3, None);
    let outcome = modal.on_key_down("Tab", false, Some(2), None);
    assert!(outcome.prevent_default);
    assert_eq!(outcome.actions, vec![Action::Focus(0)]);
}

#[test]
fn shift_tab_from_first_focuses_last() {
    let mut modal = ModalCore::new();
    modal.open(3, None);
    let outcome = modal.on_key_down("Tab", true, Some(0), None);
    assert_eq!(outcome.actions, vec![Action::Focus(2)]);
}

#[test]
fn tab_in_middle_is_default_behavior() {
    let mut modal = ModalCore::new();
    modal.open(3, None);
    assert_eq!(modal.on_key_down("Tab", false, Some(1), None), KeyOutcome::default());
}

#[test]
fn tab_while_closed_is_not_trapped() {
    let mut modal = ModalCore::new();
    assert_eq!(modal.on_key_down("Tab", false, Some(2), None), KeyOutcome::default());
}

#[test]
fn tab_with_no_focusables_is_not_trapped() {
    let mut modal = ModalCore::new();
    modal.open(0, None);
    assert_eq!(modal.on_key_down("Tab", false, None, None), KeyOutcome::default());
}

// =============================================================
// Autoplay source rewriting
// =============================================================

#[test]
fn autoplay_appends_with_ampersand_when_query_exists() {
    assert_eq!(with_autoplay("https://v.example/e/1?rel=0"), "https://v.example/e/1?rel=0&autoplay=1");
}

#[test]
fn autoplay_starts_query_when_absent() {
    assert_eq!(with_autoplay("https://v.example/e/1"), "https://v.example/e/1?autoplay=1");
}

#[test]
fn autoplay_is_not_appended_twice() {
    let once = with_autoplay(VIDEO);
    assert_eq!(with_autoplay(&once), once);
}

#[test]
fn autoplay_goes_before_fragment() {
    assert_eq!(with_autoplay("https://v.example/e/1?a=1#t=5"), "https://v.example/e/1?a=1&autoplay=1#t=5");
}

#[test]
fn strip_autoplay_restores_plain_source() {
    for src in [VIDEO, "https://v.example/e/1", "https://v.example/e/1?a=1#t=5"] {
        assert_eq!(without_autoplay(&with_autoplay(src)), src);
    }
}

#[test]
fn strip_autoplay_keeps_params_after_it() {
    assert_eq!(without_autoplay("https://v.example/e/1?autoplay=1&rel=0"), "https://v.example/e/1?rel=0");
}

#[test]
fn strip_autoplay_without_query_is_identity() {
    assert_eq!(without_autoplay("https://v.example/e/1"), "https://v.example/e/1");
}
