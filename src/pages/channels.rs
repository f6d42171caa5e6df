//! Channels page listing configured Telegram channels.

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::net::api;
use crate::state::channels::ChannelsState;
use crate::state::notices::{NoticeKind, NoticesState};
use crate::util::channel::{channel_display_name, normalize_channel_id};

/// Channels page — read-only inventory with copyable ids.
#[component]
pub fn ChannelsPage() -> impl IntoView {
    let channels = expect_context::<RwSignal<ChannelsState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_channels(channels, notices));

    view! {
        <div class="channels-page">
            <header class="channels-page__header toolbar">
                <a href="/" class="toolbar__back" title="К панели управления">
                    "←"
                </a>
                <span class="toolbar__title">"Каналы"</span>
            </header>

            <Show
                when=move || !channels.get().loading
                fallback=move || view! { <p class="channels-page__loading">"Загрузка..."</p> }
            >
                <Show
                    when=move || !channels.get().items.is_empty()
                    fallback=move || view! { <p class="channels-page__empty">"Каналы не настроены."</p> }
                >
                    <ul class="channel-list">
                        {move || {
                            channels
                                .get()
                                .items
                                .iter()
                                .map(|channel| {
                                    let id = normalize_channel_id(&channel.channel_id)
                                        .unwrap_or_else(|| channel.channel_id.clone());
                                    view! {
                                        <li class="channel-list__item">
                                            <span class="channel-list__name">
                                                {channel_display_name(
                                                    &channel.channel_id,
                                                    channel.name.as_deref(),
                                                )}
                                            </span>
                                            <code class="channel-list__id">{id.clone()}</code>
                                            <span class="channel-list__specialty">
                                                {channel.specialty.clone().unwrap_or_default()}
                                            </span>
                                            <CopyButton value=id/>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn load_channels(channels: RwSignal<ChannelsState>, notices: RwSignal<NoticesState>) {
    channels.update(|state| state.loading = true);
    match api::list_channels().await {
        Ok(items) => channels.update(|state| {
            state.items = items;
            state.loading = false;
            state.error = None;
        }),
        Err(err) => {
            notices.update(|state| {
                state.push(NoticeKind::Error, format!("Ошибка загрузки каналов: {err}"));
            });
            channels.update(|state| {
                state.loading = false;
                state.error = Some(err);
            });
        }
    }
}
