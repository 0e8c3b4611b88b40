use leptos::prelude::*;

use super::notices::Notifier;

// Dismissable toast stack fed by the shared notice queue
#[component]
pub fn NoticeStack() -> impl IntoView {
    let queue = use_context::<Notifier>().expect("notifier context").queue();

    view! {
        <div class="notice-stack">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.kind.css_class())>
                            <span class="notice-text">{notice.text}</span>
                            <button
                                class="notice-close"
                                on:click=move |_| queue.update(|q| q.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
