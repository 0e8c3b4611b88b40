use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn MembersModal(board: BoardHook, dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let (email, set_email) = signal(String::new());

    let members = move || {
        board
            .detail
            .with(|d| d.as_ref().map(|d| d.members.clone()).unwrap_or_default())
    };

    let send_invite = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if board.invite_member(email.get_untracked()) {
            set_email.set(String::new());
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal members-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Members"</h2>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form class="modal-section" on:submit=send_invite>
                    <div class="form-group">
                        <label>"Invite by email"</label>
                        <input
                            type="email"
                            placeholder="teammate@example.com"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=move || email.get()
                        />
                    </div>
                    <button type="submit" class="btn-primary">"Send invite"</button>
                </form>
                <ul class="member-list">
                    <For
                        each=members
                        key=|member| member.id.clone()
                        children=move |member| {
                            let member_id = member.id.clone();
                            view! {
                                <li class="member-row">
                                    <span class="member-name">{member.display_name().to_string()}</span>
                                    <span class="member-email">{member.email.clone()}</span>
                                    <button class="action-btn delete-btn" title="Remove member" on:click=move |_| {
                                        board.remove_member(member_id.clone());
                                    }>"🞮"</button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </dialog>
    }
}
