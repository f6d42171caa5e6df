//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_stack::AlertStack;
use crate::pages::{channels::ChannelsPage, dashboard::DashboardPage, posts::PostsPage};
use crate::state::{channels::ChannelsState, notices::NoticesState, tasks::TasksState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, sets up client-side routing, and
/// wires the page-level DOM bindings on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let notices = RwSignal::new(NoticesState::default());
    let tasks = RwSignal::new(TasksState::default());
    let channels = RwSignal::new(ChannelsState::default());

    provide_context(notices);
    provide_context(tasks);
    provide_context(channels);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        crate::util::page::init_page();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medboard.css"/>
        <Title text="Медицинский SMM-бот"/>

        <AlertStack/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("posts") view=PostsPage/>
                <Route path=StaticSegment("channels") view=ChannelsPage/>
            </Routes>
        </Router>
    }
}
