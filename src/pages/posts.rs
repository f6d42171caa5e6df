//! Posts page listing publish tasks with filtering, search, and cancel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status tabs refetch from the API; the search box narrows the loaded
//! list client-side through the debounced projection in `TasksState`.
//! Cancelling is a guarded destructive action behind a confirmation
//! dialog.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::search_box::SearchBox;
use crate::net::api;
use crate::net::types::TaskSummary;
use crate::state::notices::{NoticeKind, NoticesState};
use crate::state::tasks::{StatusFilter, TasksState};
use crate::util::channel::channel_display_name;
use crate::util::datetime::format_date;
use crate::util::format::truncate;
use crate::util::page;

/// Tasks fetched per listing request.
const POSTS_TASK_LIMIT: u32 = 100;

/// Characters of post text shown per row.
const POST_TEXT_LIMIT: usize = 100;

/// Posts page — filterable, searchable task table.
#[component]
pub fn PostsPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_posts(tasks, notices, tasks.get_untracked().status_filter));

    let on_filter = Callback::new(move |filter: StatusFilter| {
        tasks.update(|state| state.status_filter = filter);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_posts(tasks, notices, filter));
    });

    let on_search = Callback::new(move |term: String| {
        tasks.update(|state| state.search = term);
    });

    let on_cancel = Callback::new(move |task: TaskSummary| {
        if !page::confirm(&cancel_prompt(&task)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::cancel_task(&task.task_id).await {
                    Ok(()) => {
                        notices.update(|state| {
                            state.push(NoticeKind::Success, "Задача отменена");
                        });
                        load_posts(tasks, notices, tasks.get_untracked().status_filter).await;
                    }
                    Err(err) => notices.update(|state| {
                        state.push(NoticeKind::Error, format!("Ошибка отмены задачи: {err}"));
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task;
        }
    });

    view! {
        <div class="posts-page">
            <header class="posts-page__header toolbar">
                <a href="/" class="toolbar__back" title="К панели управления">
                    "←"
                </a>
                <span class="toolbar__title">"Посты"</span>
                <span class="toolbar__spacer"></span>
                <SearchBox on_search=on_search placeholder="Поиск по тексту или каналу..."/>
            </header>

            <div class="posts-page__filters">
                {StatusFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="btn posts-page__filter"
                                class:posts-page__filter--active=move || {
                                    tasks.get().status_filter == filter
                                }
                                on:click=move |_| on_filter.run(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !tasks.get().loading
                fallback=move || view! { <p class="posts-page__loading">"Загрузка..."</p> }
            >
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Текст"</th>
                            <th>"Канал"</th>
                            <th>"Публикация"</th>
                            <th>"Статус"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = tasks.get();
                            state
                                .visible_tasks()
                                .into_iter()
                                .map(|task| {
                                    let row_task = task.clone();
                                    view! {
                                        <tr>
                                            <td class="task-table__text">
                                                {truncate(&task.text, POST_TEXT_LIMIT)}
                                            </td>
                                            <td class="task-table__channel">
                                                {channel_display_name(&task.channel_id, None)}
                                            </td>
                                            <td class="task-table__time">
                                                {format_date(&task.scheduled_time)}
                                            </td>
                                            <td class="task-table__status">{task.status.clone()}</td>
                                            <td class="task-table__actions">
                                                <CopyButton value=task.task_id.clone() label="ID"/>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_cancel.run(row_task.clone())
                                                >
                                                    "Отменить"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// Confirmation prompt for cancelling a task.
fn cancel_prompt(task: &TaskSummary) -> String {
    format!("Отменить публикацию в {}?", channel_display_name(&task.channel_id, None))
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn load_posts(
    tasks: RwSignal<TasksState>,
    notices: RwSignal<NoticesState>,
    filter: StatusFilter,
) {
    tasks.update(|state| state.loading = true);
    match api::list_tasks(filter.as_query(), POSTS_TASK_LIMIT).await {
        Ok(items) => tasks.update(|state| {
            state.items = items;
            state.loading = false;
            state.error = None;
        }),
        Err(err) => {
            notices.update(|state| {
                state.push(NoticeKind::Error, format!("Ошибка загрузки постов: {err}"));
            });
            tasks.update(|state| {
                state.loading = false;
                state.error = Some(err);
            });
        }
    }
}
