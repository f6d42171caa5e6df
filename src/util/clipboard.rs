//! Best-effort clipboard copy.
//!
//! The write is asynchronous and cannot be cancelled once started; success
//! surfaces a blocking notice, failure is only logged.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Notice shown after a successful copy.
pub const COPY_SUCCESS_NOTICE: &str = "Скопировано в буфер обмена";

/// Copy `text` to the system clipboard. Browser-only; a no-op elsewhere.
pub fn copy_to_clipboard(text: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    let _ = window.alert_with_message(COPY_SUCCESS_NOTICE);
                }
                Err(err) => log::error!("clipboard copy failed: {err:?}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
