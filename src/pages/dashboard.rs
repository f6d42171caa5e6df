//! Dashboard page with task statistics, recent tasks, and channel count.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It pulls stats, recent tasks, and the
//! channel inventory over REST on mount and renders them read-only;
//! load failures degrade into flash notices, never crashes.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::TaskStats;
use crate::state::channels::ChannelsState;
use crate::state::notices::{NoticeKind, NoticesState};
use crate::state::tasks::TasksState;
use crate::util::channel::channel_display_name;
use crate::util::datetime::format_date;
use crate::util::format::{format_number, truncate};

/// Tasks shown in the recent list.
const RECENT_TASK_LIMIT: u32 = 10;

/// Characters of post text shown per row.
const RECENT_TEXT_LIMIT: usize = 80;

/// Dashboard page — stats tiles, a recent-task table, and a refresh
/// control that stays disabled while a reload is in flight.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let channels = expect_context::<RwSignal<ChannelsState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_dashboard(tasks, channels, notices));

    let refresh_ref = NodeRef::<leptos::html::Button>::new();
    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let button = refresh_ref.get_untracked();
                let saved = button.as_ref().map(|b| crate::util::loading::show_loading(b));
                load_dashboard(tasks, channels, notices).await;
                if let (Some(button), Some(saved)) = (button.as_ref(), saved.as_ref()) {
                    crate::util::loading::hide_loading(button, saved);
                }
            });
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Панель управления"</span>
                <span class="toolbar__spacer"></span>
                <a href="/posts" class="toolbar__link">"Посты"</a>
                <a href="/channels" class="toolbar__link">"Каналы"</a>
                <button class="btn toolbar__refresh" node_ref=refresh_ref on:click=on_refresh>
                    "Обновить"
                </button>
            </header>

            <Show
                when=move || !tasks.get().loading
                fallback=move || view! { <p class="dashboard-page__loading">"Загрузка..."</p> }
            >
                <div class="dashboard-page__stats">
                    {move || {
                        let stats = tasks.get().stats.unwrap_or_default();
                        stat_tiles(&stats)
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stat-tile">
                                        <span class="stat-tile__value">{value}</span>
                                        <span class="stat-tile__label">{label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <h2 class="dashboard-page__subtitle">"Последние задачи"</h2>
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Текст"</th>
                            <th>"Канал"</th>
                            <th>"Публикация"</th>
                            <th>"Статус"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            tasks
                                .get()
                                .items
                                .iter()
                                .map(|task| {
                                    view! {
                                        <tr>
                                            <td class="task-table__text">
                                                {truncate(&task.text, RECENT_TEXT_LIMIT)}
                                            </td>
                                            <td class="task-table__channel">
                                                {channel_display_name(&task.channel_id, None)}
                                            </td>
                                            <td class="task-table__time">
                                                {format_date(&task.scheduled_time)}
                                            </td>
                                            <td class="task-table__status">{task.status.clone()}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>

                <p class="dashboard-page__channels">
                    {move || {
                        let count = channels.get().items.len().try_into().unwrap_or(i64::MAX);
                        format!("Каналов подключено: {}", format_number(count))
                    }}
                </p>
            </Show>
        </div>
    }
}

/// Stat tiles in display order, counters thousands-grouped.
fn stat_tiles(stats: &TaskStats) -> Vec<(&'static str, String)> {
    vec![
        ("Всего", format_number(stats.total)),
        ("Ожидают", format_number(stats.pending)),
        ("Запланированы", format_number(stats.scheduled)),
        ("Опубликованы", format_number(stats.completed)),
        ("Ошибки", format_number(stats.failed)),
        ("Успешность", format!("{:.1}%", stats.success_rate)),
    ]
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn load_dashboard(
    tasks: RwSignal<TasksState>,
    channels: RwSignal<ChannelsState>,
    notices: RwSignal<NoticesState>,
) {
    tasks.update(|state| state.loading = true);
    channels.update(|state| state.loading = true);

    let loaded = async {
        let stats = api::fetch_stats().await?;
        let recent = api::list_tasks(None, RECENT_TASK_LIMIT).await?;
        let channel_list = api::list_channels().await?;
        Ok::<_, String>((stats, recent, channel_list))
    }
    .await;

    match loaded {
        Ok((stats, recent, channel_list)) => {
            tasks.update(|state| {
                state.stats = Some(stats);
                state.items = recent;
                state.loading = false;
                state.error = None;
            });
            channels.update(|state| {
                state.items = channel_list;
                state.loading = false;
                state.error = None;
            });
        }
        Err(err) => {
            notices.update(|state| {
                state.push(NoticeKind::Error, format!("Ошибка загрузки данных: {err}"));
            });
            tasks.update(|state| {
                state.loading = false;
                state.error = Some(err.clone());
            });
            channels.update(|state| {
                state.loading = false;
                state.error = Some(err);
            });
        }
    }
}
