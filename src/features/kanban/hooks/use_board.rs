use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{sign_out, use_api, AppView};
use crate::config::AppConfig;
use crate::core::models::{BoardState, DragEnd, Issue, NewIssue, ProjectDetail};
use crate::core::services::{ApiClient, ApiError, FetchCache, Session};
use crate::features::kanban::services::{
    apply_added_column, apply_column_load, apply_created_issue, apply_deleted_issue,
    apply_removed_column, board_for, load_columns, project_stats, sync_move,
    validate_column_name, validate_invite_email, validate_issue_title, DragOutcome,
    MoveSettlement, ProjectStats, ReorderCoordinator,
};
use crate::features::notifications::{NoticeQueue, Notifier};

/// Reactive state and actions for one project's board.
///
/// Everything is signal-backed, so the hook is `Copy` and can be handed to
/// each column and card.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub project_id: StoredValue<String>,
    pub detail: RwSignal<Option<ProjectDetail>>,
    pub board: RwSignal<BoardState>,
    pub cache: RwSignal<FetchCache>,
    pub loading: RwSignal<bool>,
    coordinator: StoredValue<ReorderCoordinator>,
    api: StoredValue<ApiClient>,
    notifier: Notifier,
    session: Option<RwSignal<Session>>,
    navigate: Option<WriteSignal<AppView>>,
}

pub fn use_board(project_id: String) -> BoardHook {
    let notifier = use_context::<Notifier>().unwrap_or_else(|| {
        Notifier::new(RwSignal::new(NoticeQueue::default()), &AppConfig::default())
    });

    let hook = BoardHook {
        project_id: StoredValue::new(project_id),
        detail: RwSignal::new(None),
        board: RwSignal::new(BoardState::default()),
        cache: RwSignal::new(FetchCache::default()),
        loading: RwSignal::new(true),
        coordinator: StoredValue::new(ReorderCoordinator::default()),
        api: StoredValue::new(use_api()),
        notifier,
        session: use_context::<RwSignal<Session>>(),
        navigate: use_context::<WriteSignal<AppView>>(),
    };

    hook.reload();

    // Fetch every column without a marker; failed loads wait for reload or invalidation
    Effect::new(move |_| {
        let Some(column_ids) = hook.detail.with(|d| d.as_ref().map(ProjectDetail::column_ids)) else {
            return;
        };
        let missing = hook
            .cache
            .with(|cache| column_ids.iter().any(|id| cache.needs_load(id)));
        if !missing {
            return;
        }
        let claimed = hook
            .cache
            .try_update(|cache| cache.claim_missing(column_ids.iter().map(String::as_str)))
            .unwrap_or_default();
        if claimed.is_empty() {
            return;
        }

        log::debug!("Loading {} status column(s)", claimed.len());
        let api = hook.api.get_value();
        spawn_local(async move {
            for (column_id, result) in load_columns(&api, claimed).await {
                if let Err(err) = &result {
                    hook.check_session(err);
                }
                hook.mutate(|board, cache, coordinator| {
                    apply_column_load(board, cache, coordinator, &column_id, result, Utc::now())
                });
            }
        });
    });

    hook
}

impl BoardHook {
    // Runs `f` with the board, fetch cache and coordinator borrowed together
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut BoardState, &mut FetchCache, &mut ReorderCoordinator) -> T,
    ) -> Option<T> {
        let Self { board, cache, coordinator, .. } = *self;
        board
            .try_update(|board| {
                cache.try_update(|cache| {
                    coordinator.try_update_value(|coordinator| f(board, cache, coordinator))
                })
            })
            .flatten()
            .flatten()
    }

    fn check_session(&self, err: &ApiError) {
        if !err.is_unauthorized() {
            return;
        }
        log::warn!("Session rejected by the server; signing out");
        if let (Some(session), Some(navigate)) = (self.session, self.navigate) {
            sign_out(session, navigate);
        }
    }

    fn report(&self, err: &ApiError, fallback: &str) {
        self.check_session(err);
        self.notifier.error(err.user_message(fallback));
    }

    /// Fetches the project and rebuilds an empty board from its columns.
    pub fn reload(&self) {
        let hook = *self;
        let project_id = hook.project_id.get_value();
        let api = hook.api.get_value();
        hook.loading.set(true);
        spawn_local(async move {
            match api.project_detail(&project_id).await {
                Ok(detail) => {
                    log::info!(
                        "Loaded project {} with {} column(s)",
                        detail.project.name,
                        detail.columns.len()
                    );
                    hook.mutate(|board, cache, coordinator| {
                        *board = board_for(&detail);
                        cache.invalidate_all();
                        coordinator.record_mutation();
                    });
                    hook.detail.set(Some(detail));
                }
                Err(err) => {
                    log::error!("Failed to load project {project_id}: {err}");
                    hook.report(&err, "Failed to load project");
                }
            }
            hook.loading.set(false);
        });
    }

    pub fn stats(&self) -> ProjectStats {
        self.detail.with(|detail| {
            detail
                .as_ref()
                .map(|d| self.board.with(|board| project_stats(d, board)))
                .unwrap_or_default()
        })
    }

    pub fn column_issues(&self, column_id: &str) -> Vec<Issue> {
        self.board.with(|board| board.column(column_id).to_vec())
    }

    /// Applies a drop locally, then syncs cross-column moves in the background.
    pub fn drag_end(&self, drag: DragEnd) {
        let hook = *self;
        let outcome = hook
            .mutate(|board, _, coordinator| coordinator.apply_drag(board, &drag))
            .unwrap_or(DragOutcome::Ignored);

        let pending = match outcome {
            DragOutcome::Ignored => return,
            DragOutcome::Reordered { column_id, seq } => {
                log::debug!("Reordered {column_id} locally (#{seq})");
                return;
            }
            DragOutcome::Moved(pending) => pending,
        };

        let api = hook.api.get_value();
        spawn_local(async move {
            let result = sync_move(&api, &pending).await;
            if let Err(err) = &result {
                hook.check_session(err);
            }
            let settlement = hook
                .mutate(|board, cache, coordinator| coordinator.settle(board, cache, pending, result));
            match settlement {
                Some(MoveSettlement::Confirmed) => hook.notifier.success("Issue moved successfully"),
                Some(other) => {
                    if let Some(message) = other.failure_message() {
                        hook.notifier.error(message);
                    }
                }
                None => {}
            }
        });
    }

    /// Returns `false` when the draft was rejected before any request.
    pub fn create_issue(&self, mut issue: NewIssue) -> bool {
        issue.title = match validate_issue_title(&issue.title) {
            Ok(title) => title,
            Err(message) => {
                self.notifier.error(message);
                return false;
            }
        };
        issue.project_id = self.project_id.get_value();
        let hook = *self;
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.create_issue(&issue).await {
                Ok(created) => {
                    hook.mutate(|board, _, coordinator| {
                        apply_created_issue(board, coordinator, &issue.status_id, created)
                    });
                    hook.notifier.success("Issue created successfully");
                }
                Err(err) => hook.report(&err, "Failed to create issue"),
            }
        });
        true
    }

    pub fn delete_issue(&self, issue_id: String) {
        let hook = *self;
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.delete_issue(&issue_id).await {
                Ok(()) => {
                    hook.mutate(|board, _, coordinator| {
                        apply_deleted_issue(board, coordinator, &issue_id)
                    });
                    hook.notifier.success("Issue deleted successfully");
                }
                Err(err) => hook.report(&err, "Failed to delete issue"),
            }
        });
    }

    /// Returns `false` when the name was rejected before any request.
    pub fn add_column(&self, name: String) -> bool {
        let checked = self.detail.with_untracked(|detail| match detail {
            Some(detail) => validate_column_name(detail, &name),
            None => Err("Project is still loading".to_string()),
        });
        let name = match checked {
            Ok(name) => name,
            Err(message) => {
                self.notifier.error(message);
                return false;
            }
        };

        let hook = *self;
        let project_id = hook.project_id.get_value();
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.create_status(&project_id, &name).await {
                Ok(column) => {
                    hook.detail.update(|detail| {
                        if let Some(detail) = detail {
                            hook.mutate(|board, cache, _| {
                                apply_added_column(detail, board, cache, column, Utc::now())
                            });
                        }
                    });
                    hook.notifier.success("Status column created");
                }
                Err(err) => hook.report(&err, "Failed to create status column"),
            }
        });
        true
    }

    pub fn delete_column(&self, column_id: String) {
        let hook = *self;
        let project_id = hook.project_id.get_value();
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.delete_status(&column_id, &project_id).await {
                Ok(()) => {
                    hook.detail.update(|detail| {
                        if let Some(detail) = detail {
                            hook.mutate(|board, cache, coordinator| {
                                apply_removed_column(detail, board, cache, coordinator, &column_id)
                            });
                        }
                    });
                    hook.notifier.success("Status column deleted");
                }
                Err(err) => hook.report(&err, "Failed to delete status column"),
            }
        });
    }

    /// Returns `false` when the address was rejected before any request.
    pub fn invite_member(&self, email: String) -> bool {
        let email = match validate_invite_email(&email) {
            Ok(email) => email,
            Err(message) => {
                self.notifier.error(message);
                return false;
            }
        };
        let hook = *self;
        let project_id = hook.project_id.get_value();
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.invite_member(&project_id, &email).await {
                Ok(()) => hook.notifier.success(format!("Invitation sent to {email}")),
                Err(err) => hook.report(&err, "Failed to send invitation"),
            }
        });
        true
    }

    pub fn remove_member(&self, member_id: String) {
        let hook = *self;
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.remove_member(&member_id).await {
                Ok(()) => {
                    hook.detail.update(|detail| {
                        if let Some(detail) = detail {
                            detail.remove_member(&member_id);
                        }
                    });
                    hook.notifier.success("Member removed");
                }
                Err(err) => hook.report(&err, "Failed to remove member"),
            }
        });
    }

    pub fn delete_project(&self) {
        let hook = *self;
        let project_id = hook.project_id.get_value();
        let api = hook.api.get_value();
        spawn_local(async move {
            match api.delete_project(&project_id).await {
                Ok(()) => {
                    hook.notifier.success("Project deleted");
                    if let Some(navigate) = hook.navigate {
                        navigate.set(AppView::Dashboard);
                    }
                }
                Err(err) => hook.report(&err, "Failed to delete project"),
            }
        });
    }
}
