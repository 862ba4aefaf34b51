use super::*;

#[test]
fn see_all_link_only_past_preview() {
    assert_eq!(see_all_label(0), None);
    assert_eq!(see_all_label(PROFILE_PREVIEW_OBJECTS), None);
    assert_eq!(see_all_label(7).as_deref(), Some("Ver os 7 objetos"));
}
