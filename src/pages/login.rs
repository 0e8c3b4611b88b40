use chrono::Utc;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{use_api, AppView};
use crate::core::services::Session;
use crate::features::notifications::Notifier;

#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let session = use_context::<RwSignal<Session>>().expect("session context");
    let notifier = use_context::<Notifier>().expect("notifier context");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let api = StoredValue::new(use_api().with_token(None));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            notifier.error("Please enter your email and password");
            return;
        }

        set_submitting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(token) => {
                    let started = Session::begin(&token, Utc::now().timestamp());
                    if started.is_authenticated() {
                        log::info!("Signed in as {email}");
                        session.set(started);
                        set_password.set(String::new());
                        notifier.success("Login successful");
                        navigate.set(AppView::Dashboard);
                    } else {
                        log::warn!("Server issued an unusable token for {email}");
                        notifier.error("Login failed");
                    }
                }
                Err(err) => notifier.error(err.user_message("Login failed")),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=handle_submit>
                <h1>"Managify"</h1>
                <div class="form-group">
                    <label>"EMAIL"</label>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=move || email.get()
                    />
                </div>
                <div class="form-group">
                    <label>"PASSWORD"</label>
                    <input
                        type="password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=move || password.get()
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "SIGNING IN..." } else { "SIGN IN" }}
                </button>
            </form>
        </div>
    }
}
