use super::*;

#[test]
fn idle_label_matches_storefront_copy() {
    assert_eq!(button_label(false), "ADD TO CART");
}

#[test]
fn added_label_confirms_add() {
    assert_eq!(button_label(true), "Added ✓");
}

#[test]
fn feedback_lasts_six_hundred_millis() {
    assert_eq!(ADDED_FEEDBACK_MS, 600);
}
