//! Stacked flash-notice banners with fixed-delay auto-dismissal.
//!
//! Banners expire on the same 5-second schedule the page bindings apply
//! to server-rendered alerts, and can be dismissed early by hand.

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticesState};

/// Renders the shared notice stack from context.
#[component]
pub fn AlertStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    view! {
        <div class="alert-stack">
            <For
                each=move || notices.get().items
                key=|notice| notice.id.clone()
                children=move |notice| view! { <AlertBanner notice=notice/> }
            />
        </div>
    }
}

/// A single alert banner; schedules its own dismissal on mount.
#[component]
fn AlertBanner(notice: Notice) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    #[cfg(feature = "hydrate")]
    {
        let id = notice.id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::util::page::ALERT_DISMISS_DELAY).await;
            notices.update(|state| state.dismiss(&id));
        });
    }

    let dismiss_id = notice.id.clone();
    let on_dismiss = move |_| notices.update(|state| state.dismiss(&dismiss_id));

    view! {
        <div class=notice.kind.css_class() role="status">
            <span class="alert__message">{notice.message.clone()}</span>
            <button class="alert__close" on:click=on_dismiss aria-label="Закрыть">
                "✕"
            </button>
        </div>
    }
}
