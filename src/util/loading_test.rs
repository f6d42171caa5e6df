use super::*;

use std::cell::RefCell;

struct FakeButton {
    markup: RefCell<String>,
    enabled: RefCell<bool>,
}

impl FakeButton {
    fn new(markup: &str) -> Self {
        Self { markup: RefCell::new(markup.to_owned()), enabled: RefCell::new(true) }
    }
}

impl ButtonLike for FakeButton {
    fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    fn set_markup(&self, markup: &str) {
        *self.markup.borrow_mut() = markup.to_owned();
    }

    fn set_enabled(&self, enabled: bool) {
        *self.enabled.borrow_mut() = enabled;
    }
}

#[test]
fn show_loading_disables_and_returns_prior_markup() {
    let button = FakeButton::new("Обновить");
    let saved = show_loading(&button);
    assert_eq!(saved, "Обновить");
    assert!(!*button.enabled.borrow());
    assert_eq!(*button.markup.borrow(), LOADING_MARKUP);
}

#[test]
fn hide_loading_restores_markup_and_enables() {
    let button = FakeButton::new("Обновить");
    let saved = show_loading(&button);
    hide_loading(&button, &saved);
    assert!(*button.enabled.borrow());
    assert_eq!(*button.markup.borrow(), "Обновить");
}

#[test]
fn toggle_roundtrip_is_identity_for_rich_markup() {
    let button = FakeButton::new("<b>Сохранить</b>");
    hide_loading(&button, &show_loading(&button));
    assert_eq!(*button.markup.borrow(), "<b>Сохранить</b>");
    assert!(*button.enabled.borrow());
}

#[test]
fn loading_markup_carries_spinner_and_label() {
    assert!(LOADING_MARKUP.contains("spinner"));
    assert!(LOADING_MARKUP.contains("Загрузка"));
}
