//! Button that copies a fixed payload to the clipboard.

use leptos::prelude::*;

use crate::util::clipboard::copy_to_clipboard;

/// Small utility button that copies `value` on click.
#[component]
pub fn CopyButton(
    /// Text placed on the clipboard.
    value: String,
    /// Visible label.
    #[prop(default = "Копировать")] label: &'static str,
) -> impl IntoView {
    let on_copy = move |_| copy_to_clipboard(value.clone());

    view! {
        <button class="btn btn--copy" on:click=on_copy title="Скопировать в буфер обмена">
            {label}
        </button>
    }
}
