use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{sign_out, use_api, AppView};
use crate::core::models::{PendingInvite, PlanType, UserOverview};
use crate::core::services::{ApiError, Session};
use crate::features::notifications::Notifier;

#[component]
pub fn Dashboard() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let session = use_context::<RwSignal<Session>>().expect("session context");
    let notifier = use_context::<Notifier>().expect("notifier context");

    let overview = RwSignal::new(None::<UserOverview>);
    let invites = RwSignal::new(Vec::<PendingInvite>::new());
    let user_id = session.with_untracked(|s| s.user_id().map(str::to_string).unwrap_or_default());
    let user_id = StoredValue::new(user_id);
    let api = StoredValue::new(use_api());

    let fail = move |err: ApiError, fallback: &str| {
        if err.is_unauthorized() {
            sign_out(session, navigate);
        }
        notifier.error(err.user_message(fallback));
    };

    let load_overview = move || {
        let api = api.get_value();
        let user_id = user_id.get_value();
        spawn_local(async move {
            match api.user_overview(&user_id).await {
                Ok(loaded) => {
                    log::info!("Loaded overview with {} project(s)", loaded.projects.len());
                    overview.set(Some(loaded));
                }
                Err(err) => fail(err, "Failed to load dashboard"),
            }
        });
    };

    let load_invites = move || {
        let api = api.get_value();
        let user_id = user_id.get_value();
        spawn_local(async move {
            match api.pending_invites(&user_id).await {
                Ok(loaded) => invites.set(loaded.into_iter().filter(PendingInvite::is_pending).collect()),
                Err(err) => fail(err, "Failed to load invites"),
            }
        });
    };

    load_overview();
    load_invites();

    let respond = move |invite_id: String, accept: bool| {
        let api = api.get_value();
        spawn_local(async move {
            match api.respond_invite(&invite_id, accept).await {
                Ok(()) => {
                    notifier.success(if accept { "Invite accepted" } else { "Invite declined" });
                    load_invites();
                    if accept {
                        load_overview();
                    }
                }
                Err(err) => fail(err, "Failed to respond to invite"),
            }
        });
    };

    let plan = move || overview.with(|o| o.as_ref().map(UserOverview::plan).unwrap_or_default());
    let display_name = move || {
        overview.with(|o| {
            o.as_ref()
                .map(|o| o.user.full_name.clone())
                .filter(|n| !n.is_empty())
                .or_else(|| session.with(|s| s.email().map(str::to_string)))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="projects-page dashboard-page">
            <header class="projects-header">
                <h1>{move || format!("Welcome, {}", display_name())}</h1>
                <button class="btn-secondary" on:click=move |_| {
                    sign_out(session, navigate);
                    notifier.info("Signed out");
                }>"LOG OUT"</button>
            </header>

            <section class="dashboard-section">
                <h2>"Projects"</h2>
                <Show
                    when=move || overview.with(Option::is_some)
                    fallback=|| view! { <p class="muted">"Loading..."</p> }
                >
                    <div class="projects-grid">
                        <For
                            each=move || overview.with(|o| o.as_ref().map(|o| o.projects.clone()).unwrap_or_default())
                            key=|project| project.id.clone()
                            children=move |project| {
                                let project_id = project.id.clone();
                                view! {
                                    <div class="project-card" on:click=move |_| navigate.set(AppView::Project(project_id.clone()))>
                                        <h3>{project.name.clone()}</h3>
                                        <p>{project.description.clone()}</p>
                                        <div class="project-stats">
                                            <span>{project.category.clone()}</span>
                                            <span>{if project.is_active() { "Active" } else { "Inactive" }}</span>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                    {move || {
                        let can_create = overview.with(|o| o.as_ref().is_some_and(UserOverview::can_create_project));
                        (!can_create).then(|| view! {
                            <p class="plan-limit">{format!("Your {} plan project limit has been reached", plan().as_str())}</p>
                        })
                    }}
                </Show>
            </section>

            <section class="dashboard-section">
                <h2>"Recent issues"</h2>
                <ul class="recent-issues">
                    {move || {
                        overview.with(|o| {
                            o.as_ref()
                                .map(|o| {
                                    o.recent_issues
                                        .iter()
                                        .map(|issue| view! {
                                            <li>
                                                <span class=format!("priority-badge priority-{}", issue.priority.tone())>{issue.priority.as_str()}</span>
                                                {issue.title.clone()}
                                            </li>
                                        })
                                        .collect_view()
                                })
                        })
                    }}
                </ul>
            </section>

            <section class="dashboard-section">
                <h2>"Invitations"</h2>
                <Show
                    when=move || invites.with(|i| !i.is_empty())
                    fallback=|| view! { <p class="muted">"No pending invitations"</p> }
                >
                    <ul class="invite-list">
                        <For
                            each=move || invites.get()
                            key=|invite| invite.id.clone()
                            children=move |invite| {
                                let accept_id = invite.id.clone();
                                let decline_id = invite.id.clone();
                                view! {
                                    <li class="invite-row">
                                        <span>{invite.summary()}</span>
                                        <button class="btn-primary" on:click=move |_| respond(accept_id.clone(), true)>"ACCEPT"</button>
                                        <button class="btn-secondary" on:click=move |_| respond(decline_id.clone(), false)>"DECLINE"</button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>

            <section class="dashboard-section">
                <h2>"Plans"</h2>
                <div class="plan-grid">
                    {PlanType::all()
                        .into_iter()
                        .map(|candidate| view! {
                            <div class="plan-card" class:current=move || plan() == candidate>
                                <h3>{candidate.as_str()}</h3>
                                <p class="plan-price">{candidate.price()}</p>
                                <ul>
                                    {candidate.features().iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
