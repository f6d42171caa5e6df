#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn dismiss_delay_is_five_seconds() {
    assert_eq!(ALERT_DISMISS_DELAY, Duration::from_secs(5));
}

#[test]
fn selectors_match_served_markup() {
    assert_eq!(ALERT_SELECTOR, ".alert");
    assert_eq!(DATE_ATTRIBUTE, "data-date");
    assert_eq!(CONFIRM_ATTRIBUTE, "data-confirm");
}

#[test]
fn confirm_denies_without_a_browser() {
    assert!(!confirm("Отменить задачу?"));
}
