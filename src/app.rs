use chrono::Utc;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::core::services::{ApiClient, Session};
use crate::features::notifications::{NoticeQueue, NoticeStack, Notifier};
use crate::pages::{Dashboard, Login, ProjectDetail};

#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Login,
    Dashboard,
    Project(String),
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    let session = RwSignal::new(Session::restore(Utc::now().timestamp()));
    let initial_view = if session.with_untracked(Session::is_authenticated) {
        AppView::Dashboard
    } else {
        AppView::Login
    };
    let (current_view, set_current_view) = signal(initial_view);
    let notifier = Notifier::new(RwSignal::new(NoticeQueue::default()), &config);

    log::info!("Managify UI talking to {}", config.api_base_url);

    provide_context(config);
    provide_context(session);
    provide_context(notifier);
    provide_context(set_current_view);

    view! {
        <main class="app">
            {move || {
                let signed_in = session.with(Session::is_authenticated);
                match current_view.get() {
                    _ if !signed_in => view! { <Login /> }.into_any(),
                    AppView::Login => view! { <Login /> }.into_any(),
                    AppView::Dashboard => view! { <Dashboard /> }.into_any(),
                    AppView::Project(project_id) => view! { <ProjectDetail project_id=project_id /> }.into_any(),
                }
            }}
            <NoticeStack />
        </main>
    }
}

// Client for the current session; reads the token without tracking it
pub fn use_api() -> ApiClient {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let token = use_context::<RwSignal<Session>>()
        .and_then(|s| s.with_untracked(|s| s.token().map(str::to_string)));
    ApiClient::new(config.api_base_url, token)
}

// Drop the session and go back to the login screen
pub fn sign_out(session: RwSignal<Session>, navigate: WriteSignal<AppView>) {
    session.set(Session::end());
    navigate.set(AppView::Login);
}
