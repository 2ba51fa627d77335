use super::*;

#[test]
fn missing_preference_is_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn unknown_preference_is_light() {
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn stored_dark_round_trips() {
    let theme = Theme::from_stored(Some("dark"));
    assert_eq!(theme, Theme::Dark);
    assert_eq!(theme.as_str(), "dark");
}

#[test]
fn toggle_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn icon_matches_theme() {
    assert_eq!(Theme::Light.icon(), "🌙");
    assert_eq!(Theme::Dark.icon(), "☀️");
}
