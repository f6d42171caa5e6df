//! Loading-state toggle for button-like controls.
//!
//! The caller owns the saved markup: `show_loading` returns the control's
//! prior contents and `hide_loading` takes it back. No state is retained
//! between calls.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Markup swapped in while a control is busy.
pub const LOADING_MARKUP: &str = r#"<span class="spinner" aria-hidden="true"></span> Загрузка..."#;

/// Minimal surface of a button-like control the toggle manipulates.
pub trait ButtonLike {
    fn markup(&self) -> String;
    fn set_markup(&self, markup: &str);
    fn set_enabled(&self, enabled: bool);
}

/// Disable `button` and swap in the loading indicator.
///
/// Returns the prior markup for later restoration via [`hide_loading`].
pub fn show_loading(button: &impl ButtonLike) -> String {
    let original = button.markup();
    button.set_enabled(false);
    button.set_markup(LOADING_MARKUP);
    original
}

/// Re-enable `button` and restore the markup saved by [`show_loading`].
pub fn hide_loading(button: &impl ButtonLike, original: &str) {
    button.set_enabled(true);
    button.set_markup(original);
}

#[cfg(feature = "hydrate")]
impl ButtonLike for web_sys::HtmlButtonElement {
    fn markup(&self) -> String {
        self.inner_html()
    }

    fn set_markup(&self, markup: &str) {
        self.set_inner_html(markup);
    }

    fn set_enabled(&self, enabled: bool) {
        self.set_disabled(!enabled);
    }
}
