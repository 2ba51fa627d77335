use super::*;

/// Apply one Tab press: the trap's redirect if any, else the browser's default
/// step (which only ever runs between interior elements here).
fn press(trap: FocusTrap, active: Option<usize>, direction: TabDirection) -> usize {
    if let Some(target) = trap.redirect(active, direction) {
        return target;
    }
    let i = active.unwrap();
    match direction {
        TabDirection::Forward => i + 1,
        TabDirection::Backward => i - 1,
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_set_has_no_trap() {
    assert!(FocusTrap::new(0).is_none());
}

#[test]
fn boundaries_match_set_size() {
    let trap = FocusTrap::new(4).unwrap();
    assert_eq!(trap.count(), 4);
    assert_eq!(trap.first(), 0);
    assert_eq!(trap.last(), 3);
}

#[test]
fn direction_from_shift() {
    assert_eq!(TabDirection::from_shift(false), TabDirection::Forward);
    assert_eq!(TabDirection::from_shift(true), TabDirection::Backward);
}

// =============================================================
// Wrapping
// =============================================================

#[test]
fn tab_from_last_wraps_to_first() {
    let trap = FocusTrap::new(3).unwrap();
    assert_eq!(trap.redirect(Some(2), TabDirection::Forward), Some(0));
}

#[test]
fn shift_tab_from_first_wraps_to_last() {
    let trap = FocusTrap::new(3).unwrap();
    assert_eq!(trap.redirect(Some(0), TabDirection::Backward), Some(2));
}

#[test]
fn interior_moves_are_left_to_browser() {
    let trap = FocusTrap::new(3).unwrap();
    assert_eq!(trap.redirect(Some(1), TabDirection::Forward), None);
    assert_eq!(trap.redirect(Some(1), TabDirection::Backward), None);
    assert_eq!(trap.redirect(Some(0), TabDirection::Forward), None);
    assert_eq!(trap.redirect(Some(2), TabDirection::Backward), None);
}

#[test]
fn focus_outside_set_is_pulled_back_in() {
    let trap = FocusTrap::new(3).unwrap();
    assert_eq!(trap.redirect(None, TabDirection::Forward), Some(0));
    assert_eq!(trap.redirect(None, TabDirection::Backward), Some(2));
}

#[test]
fn single_element_keeps_focus_both_ways() {
    let trap = FocusTrap::new(1).unwrap();
    assert_eq!(trap.redirect(Some(0), TabDirection::Forward), Some(0));
    assert_eq!(trap.redirect(Some(0), TabDirection::Backward), Some(0));
}

#[test]
fn cycling_never_leaves_the_set() {
    for n in 1..=6 {
        let trap = FocusTrap::new(n).unwrap();
        for direction in [TabDirection::Forward, TabDirection::Backward] {
            let mut active = None;
            let mut visited = vec![false; n];
            for _ in 0..(3 * n) {
                let next = press(trap, active, direction);
                assert!(next < n, "focus escaped: n={n} next={next}");
                visited[next] = true;
                active = Some(next);
            }
            assert!(visited.iter().all(|v| *v), "n={n} did not visit every element");
        }
    }
}

#[test]
fn mixed_directions_stay_inside() {
    let trap = FocusTrap::new(4).unwrap();
    let mut active = Some(0);
    let presses = [true, true, false, false, false, true, false, false, false, false];
    for shift in presses {
        let next = press(trap, active, TabDirection::from_shift(shift));
        assert!(next < 4);
        active = Some(next);
    }
}
