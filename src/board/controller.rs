//! Activity Board Controller
//!
//! Owns the transport, the dialogs and the render surface, and exposes the
//! user actions as methods. Every action catches its own failures and turns
//! them into notices; nothing here returns an error to the host.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::api::{ActivityApi, ApiError};
use crate::catalog::ActivityCatalog;

use super::surface::{BoardSurface, Dialogs};
use super::view::{BoardView, CatalogView, FormMessage, MessageKind};

/// Default delay before the inline form message is hidden
pub const DEFAULT_MESSAGE_HIDE: Duration = Duration::from_millis(5000);

// ============ User-facing text ============

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const EMAIL_PROMPT: &str = "Enter your email:";
pub const SIGNUP_SUCCEEDED: &str = "Successfully signed up!";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_SUCCEEDED: &str = "Successfully unregistered";
pub const UNREGISTER_REJECTED: &str = "Failed to unregister";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const GENERIC_ERROR: &str = "An error occurred";

/// How a user action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request succeeded (and the catalog was refreshed, for mutations)
    Completed,
    /// The user cancelled or left a required field empty; nothing was sent
    Cancelled,
    /// The request failed and the user was told why
    Failed,
}

/// The activities page controller
pub struct ActivityBoard<A, D, S> {
    api: A,
    dialogs: D,
    surface: S,
    message_hide: Duration,
    catalog: RefCell<ActivityCatalog>,
    next_message_id: Cell<u64>,
}

impl<A, D, S> ActivityBoard<A, D, S>
where
    A: ActivityApi,
    D: Dialogs,
    S: BoardSurface,
{
    /// Create a board. Nothing is fetched until [`fetch_activities`](Self::fetch_activities).
    pub fn new(api: A, dialogs: D, surface: S) -> Self {
        Self {
            api,
            dialogs,
            surface,
            message_hide: DEFAULT_MESSAGE_HIDE,
            catalog: RefCell::new(ActivityCatalog::new()),
            next_message_id: Cell::new(0),
        }
    }

    /// Builder method: set how long inline form messages stay visible
    pub fn with_message_hide(mut self, delay: Duration) -> Self {
        self.message_hide = delay;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Catalog from the last successful fetch
    pub fn catalog(&self) -> ActivityCatalog {
        self.catalog.borrow().clone()
    }

    /// Fetch the catalog and rebuild the whole view from it
    pub async fn fetch_activities(&self) -> ActionOutcome {
        match self.api.list_activities().await {
            Ok(catalog) => {
                let view = CatalogView::from_catalog(&catalog);
                tracing::info!(activities = catalog.len(), "Loaded activities");

                *self.catalog.borrow_mut() = catalog;
                self.surface.render(BoardView::Catalog(view));
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.surface.render(BoardView::Failed(LOAD_FAILED.to_string()));
                ActionOutcome::Failed
            }
        }
    }

    /// Ask for an email and register it for `activity`
    pub async fn signup_for_activity(&self, activity: &str) -> ActionOutcome {
        let email = match self.dialogs.prompt(EMAIL_PROMPT).and_then(non_empty) {
            Some(email) => email,
            None => {
                tracing::debug!(activity, "Signup cancelled");
                return ActionOutcome::Cancelled;
            }
        };

        match self.api.signup(activity, &email).await {
            Ok(_) => {
                tracing::info!(activity, email = %email, "Signed up");
                self.dialogs.alert(SIGNUP_SUCCEEDED);
                self.fetch_activities().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log_failure("signup", activity, &email, &e);
                let text = match &e {
                    ApiError::Rejected { .. } => {
                        format!("Error: {}", e.detail().unwrap_or(GENERIC_ERROR))
                    }
                    _ => SIGNUP_FAILED.to_string(),
                };
                self.dialogs.alert(&text);
                ActionOutcome::Failed
            }
        }
    }

    /// Confirm, then remove `email` from `activity`
    pub async fn unregister_participant(&self, activity: &str, email: &str) -> ActionOutcome {
        let question = format!("Are you sure you want to unregister {email} from {activity}?");
        if !self.dialogs.confirm(&question) {
            tracing::debug!(activity, email, "Unregister declined");
            return ActionOutcome::Cancelled;
        }

        match self.api.unregister(activity, email).await {
            Ok(response) => {
                tracing::info!(activity, email, "Unregistered");
                let text = response
                    .message
                    .unwrap_or_else(|| UNREGISTER_SUCCEEDED.to_string());
                self.dialogs.alert(&text);
                self.fetch_activities().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log_failure("unregister", activity, email, &e);
                let text = match &e {
                    ApiError::Rejected { .. } => {
                        format!("Error: {}", e.detail().unwrap_or(UNREGISTER_REJECTED))
                    }
                    _ => UNREGISTER_FAILED.to_string(),
                };
                self.dialogs.alert(&text);
                ActionOutcome::Failed
            }
        }
    }

    /// Signup form submission: selected activity plus typed email
    pub async fn submit_signup_form(&self, activity: &str, email: &str) -> ActionOutcome {
        let (activity, email) = match (non_empty(activity), non_empty(email)) {
            (Some(activity), Some(email)) => (activity, email),
            _ => {
                tracing::debug!("Signup form incomplete");
                return ActionOutcome::Cancelled;
            }
        };

        match self.api.signup(&activity, &email).await {
            Ok(response) => {
                tracing::info!(activity = %activity, email = %email, "Signed up via form");
                let text = response
                    .message
                    .unwrap_or_else(|| SIGNUP_SUCCEEDED.to_string());
                self.show_message(MessageKind::Success, text);
                self.surface.reset_form();
                self.fetch_activities().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log_failure("signup", &activity, &email, &e);
                let text = match &e {
                    ApiError::Rejected { .. } => e.detail().unwrap_or(GENERIC_ERROR).to_string(),
                    _ => SIGNUP_FAILED.to_string(),
                };
                self.show_message(MessageKind::Error, text);
                ActionOutcome::Failed
            }
        }
    }

    fn show_message(&self, kind: MessageKind, text: String) {
        let id = self.next_message_id.get() + 1;
        self.next_message_id.set(id);
        self.surface
            .show_form_message(FormMessage { id, kind, text }, self.message_hide);
    }
}

fn non_empty(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn log_failure(action: &str, activity: &str, email: &str, err: &ApiError) {
    if err.is_rejected() {
        tracing::warn!(action, activity, email, error = %err, detail = ?err.detail(), "Request rejected");
    } else {
        tracing::error!(action, activity, email, error = %err, "Request failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::testing::{Call, FakeApi, RecordingSurface, ScriptedDialogs};
    use crate::board::view::RosterEntry;
    use crate::catalog::ActivityRecord;

    fn chess_catalog() -> ActivityCatalog {
        ActivityCatalog::new().with(
            ActivityRecord::new("Chess Club", "Learn strategies", "Fri 3pm", 10)
                .participant("a@x.com"),
        )
    }

    fn board(
        api: FakeApi,
        dialogs: ScriptedDialogs,
    ) -> ActivityBoard<FakeApi, ScriptedDialogs, RecordingSurface> {
        ActivityBoard::new(api, dialogs, RecordingSurface::default())
    }

    fn chess_card_emails(view: &BoardView) -> (String, Vec<String>) {
        let card = view.catalog().unwrap().card("Chess Club").unwrap();
        (
            card.capacity.clone(),
            card.emails().map(str::to_string).collect(),
        )
    }

    #[tokio::test]
    async fn test_fetch_renders_catalog() {
        let board = board(FakeApi::new(chess_catalog()), ScriptedDialogs::default());

        assert_eq!(board.fetch_activities().await, ActionOutcome::Completed);

        let view = board.surface().last_view().unwrap();
        let catalog = view.catalog().unwrap();
        assert_eq!(catalog.cards.len(), 1);
        assert_eq!(catalog.options, vec!["Chess Club"]);
        assert_eq!(chess_card_emails(&view), ("1/10".to_string(), vec!["a@x.com".to_string()]));
        assert_eq!(board.catalog(), chess_catalog());
    }

    #[tokio::test]
    async fn test_fetch_failure_replaces_everything_with_notice() {
        let api = FakeApi::new(chess_catalog());
        let board = board(api, ScriptedDialogs::default());
        board.fetch_activities().await;

        board.api().fail_next_with(ApiError::Network("connection reset".to_string()));
        assert_eq!(board.fetch_activities().await, ActionOutcome::Failed);

        assert_eq!(
            board.surface().last_view(),
            Some(BoardView::Failed(LOAD_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn test_fetch_parse_failure_shows_notice() {
        let api = FakeApi::new(chess_catalog());
        api.fail_next_with(ApiError::Parse("expected value at line 1".to_string()));
        let board = board(api, ScriptedDialogs::default());

        assert_eq!(board.fetch_activities().await, ActionOutcome::Failed);
        assert!(matches!(board.surface().last_view(), Some(BoardView::Failed(_))));
        assert!(board.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_signup_then_refresh() {
        let dialogs = ScriptedDialogs::default().answer_prompt(Some("b@x.com"));
        let board = board(FakeApi::new(chess_catalog()), dialogs);
        board.fetch_activities().await;

        assert_eq!(board.signup_for_activity("Chess Club").await, ActionOutcome::Completed);

        assert_eq!(
            board.api().calls(),
            vec![
                Call::List,
                Call::Signup("Chess Club".to_string(), "b@x.com".to_string()),
                Call::List,
            ]
        );
        assert_eq!(board.dialogs().prompts(), vec![EMAIL_PROMPT]);
        assert_eq!(board.dialogs().alerts(), vec![SIGNUP_SUCCEEDED]);

        let view = board.surface().last_view().unwrap();
        assert_eq!(
            chess_card_emails(&view),
            (
                "2/10".to_string(),
                vec!["a@x.com".to_string(), "b@x.com".to_string()]
            )
        );
    }

    #[tokio::test]
    async fn test_signup_cancelled_or_empty_sends_nothing() {
        for answer in [None, Some(""), Some("   ")] {
            let dialogs = ScriptedDialogs::default().answer_prompt(answer);
            let board = board(FakeApi::new(chess_catalog()), dialogs);

            assert_eq!(board.signup_for_activity("Chess Club").await, ActionOutcome::Cancelled);
            assert!(board.api().calls().is_empty());
            assert!(board.dialogs().alerts().is_empty());
            assert!(board.surface().views().is_empty());
        }
    }

    #[tokio::test]
    async fn test_signup_rejection_shows_detail_without_refresh() {
        let api = FakeApi::new(chess_catalog());
        let dialogs = ScriptedDialogs::default().answer_prompt(Some("b@x.com"));
        let board = board(api, dialogs);
        board.fetch_activities().await;
        let before = board.surface().last_view();

        board.api().fail_next_with(ApiError::Rejected {
            status: 400,
            detail: Some("Activity full".to_string()),
        });
        assert_eq!(board.signup_for_activity("Chess Club").await, ActionOutcome::Failed);

        assert_eq!(board.dialogs().alerts(), vec!["Error: Activity full"]);
        assert_eq!(board.api().list_count(), 1);
        assert_eq!(board.surface().views().len(), 1);
        assert_eq!(board.surface().last_view(), before);
    }

    #[tokio::test]
    async fn test_signup_rejection_without_detail_uses_fallback() {
        let api = FakeApi::new(chess_catalog());
        api.fail_next_with(ApiError::Rejected { status: 500, detail: None });
        let dialogs = ScriptedDialogs::default().answer_prompt(Some("b@x.com"));
        let board = board(api, dialogs);

        board.signup_for_activity("Chess Club").await;
        assert_eq!(board.dialogs().alerts(), vec![format!("Error: {GENERIC_ERROR}")]);
    }

    #[tokio::test]
    async fn test_signup_network_failure() {
        let api = FakeApi::new(chess_catalog());
        api.fail_next_with(ApiError::Network("timed out".to_string()));
        let dialogs = ScriptedDialogs::default().answer_prompt(Some("b@x.com"));
        let board = board(api, dialogs);

        assert_eq!(board.signup_for_activity("Chess Club").await, ActionOutcome::Failed);
        assert_eq!(board.dialogs().alerts(), vec![SIGNUP_FAILED]);
        assert_eq!(board.api().list_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_signup_surfaces_server_detail() {
        let dialogs = ScriptedDialogs::default().answer_prompt(Some("a@x.com"));
        let board = board(FakeApi::new(chess_catalog()), dialogs);

        assert_eq!(board.signup_for_activity("Chess Club").await, ActionOutcome::Failed);
        assert_eq!(
            board.dialogs().alerts(),
            vec!["Error: Student already signed up for this activity"]
        );
    }

    #[tokio::test]
    async fn test_unregister_after_confirmation() {
        let catalog = ActivityCatalog::new().with(
            ActivityRecord::new("Chess Club", "d", "Fri 3pm", 10)
                .participant("a@x.com")
                .participant("b@x.com"),
        );
        let dialogs = ScriptedDialogs::default().answer_confirm(true);
        let board = board(FakeApi::new(catalog), dialogs);

        let outcome = board.unregister_participant("Chess Club", "a@x.com").await;
        assert_eq!(outcome, ActionOutcome::Completed);

        assert_eq!(
            board.dialogs().confirms(),
            vec!["Are you sure you want to unregister a@x.com from Chess Club?"]
        );
        assert_eq!(board.dialogs().alerts(), vec!["Unregistered a@x.com from Chess Club"]);
        assert_eq!(board.api().list_count(), 1);

        let view = board.surface().last_view().unwrap();
        assert_eq!(chess_card_emails(&view), ("1/10".to_string(), vec!["b@x.com".to_string()]));
    }

    #[tokio::test]
    async fn test_unregister_declined_sends_nothing() {
        let dialogs = ScriptedDialogs::default().answer_confirm(false);
        let board = board(FakeApi::new(chess_catalog()), dialogs);

        let outcome = board.unregister_participant("Chess Club", "a@x.com").await;
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(board.api().calls().is_empty());
        assert!(board.dialogs().alerts().is_empty());
    }

    #[tokio::test]
    async fn test_unregister_success_without_message_uses_fallback() {
        let api = FakeApi::new(chess_catalog()).without_messages();
        let dialogs = ScriptedDialogs::default().answer_confirm(true);
        let board = board(api, dialogs);

        board.unregister_participant("Chess Club", "a@x.com").await;
        assert_eq!(board.dialogs().alerts(), vec![UNREGISTER_SUCCEEDED]);
    }

    #[tokio::test]
    async fn test_unregister_failures() {
        let dialogs = ScriptedDialogs::default().answer_confirm(true).answer_confirm(true).answer_confirm(true);
        let board = board(FakeApi::new(chess_catalog()), dialogs);

        // Not on the roster: the fake answers 404 with a detail.
        board.unregister_participant("Chess Club", "z@x.com").await;

        board.api().fail_next_with(ApiError::Rejected { status: 500, detail: None });
        board.unregister_participant("Chess Club", "a@x.com").await;

        board.api().fail_next_with(ApiError::Network("refused".to_string()));
        board.unregister_participant("Chess Club", "a@x.com").await;

        assert_eq!(
            board.dialogs().alerts(),
            vec![
                "Error: Participant not found".to_string(),
                format!("Error: {UNREGISTER_REJECTED}"),
                UNREGISTER_FAILED.to_string(),
            ]
        );
        assert_eq!(board.api().list_count(), 0);
    }

    #[tokio::test]
    async fn test_form_success_resets_and_refreshes() {
        let board = board(FakeApi::new(chess_catalog()), ScriptedDialogs::default())
            .with_message_hide(Duration::from_millis(4000));

        let outcome = board.submit_signup_form("Chess Club", "b@x.com").await;
        assert_eq!(outcome, ActionOutcome::Completed);

        let messages = board.surface().messages();
        assert_eq!(messages.len(), 1);
        let (message, hide_after) = &messages[0];
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "Signed up b@x.com for Chess Club");
        assert_eq!(*hide_after, Duration::from_millis(4000));

        assert_eq!(board.surface().resets(), 1);
        assert_eq!(board.api().list_count(), 1);
        assert!(board.dialogs().alerts().is_empty());
    }

    #[tokio::test]
    async fn test_form_incomplete_is_silent() {
        let board = board(FakeApi::new(chess_catalog()), ScriptedDialogs::default());

        for (activity, email) in [("", "b@x.com"), ("Chess Club", ""), ("  ", "  ")] {
            let outcome = board.submit_signup_form(activity, email).await;
            assert_eq!(outcome, ActionOutcome::Cancelled);
        }

        assert!(board.api().calls().is_empty());
        assert!(board.surface().messages().is_empty());
        assert_eq!(board.surface().resets(), 0);
    }

    #[tokio::test]
    async fn test_form_failures_show_inline_errors() {
        let board = board(FakeApi::new(chess_catalog()), ScriptedDialogs::default());

        board.submit_signup_form("Basket Weaving", "b@x.com").await;

        board.api().fail_next_with(ApiError::Rejected { status: 422, detail: None });
        board.submit_signup_form("Chess Club", "b@x.com").await;

        board.api().fail_next_with(ApiError::Parse("eof".to_string()));
        board.submit_signup_form("Chess Club", "b@x.com").await;

        let texts: Vec<_> = board
            .surface()
            .messages()
            .into_iter()
            .map(|(m, _)| (m.kind, m.text))
            .collect();
        assert_eq!(
            texts,
            vec![
                (MessageKind::Error, "Activity not found".to_string()),
                (MessageKind::Error, GENERIC_ERROR.to_string()),
                (MessageKind::Error, SIGNUP_FAILED.to_string()),
            ]
        );
        assert_eq!(board.surface().resets(), 0);
        assert_eq!(board.api().list_count(), 0);
    }

    #[tokio::test]
    async fn test_form_message_ids_increase() {
        let board = board(FakeApi::new(chess_catalog()), ScriptedDialogs::default());

        board.submit_signup_form("Chess Club", "b@x.com").await;
        board.submit_signup_form("Chess Club", "b@x.com").await;

        let ids: Vec<_> = board.surface().messages().iter().map(|(m, _)| m.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1]);
    }

    #[tokio::test]
    async fn test_full_scenario() {
        let dialogs = ScriptedDialogs::default()
            .answer_prompt(Some("b@x.com"))
            .answer_confirm(true);
        let board = board(FakeApi::new(chess_catalog()), dialogs);

        board.fetch_activities().await;
        board.signup_for_activity("Chess Club").await;
        board.unregister_participant("Chess Club", "a@x.com").await;

        let view = board.surface().last_view().unwrap();
        let card = view.catalog().unwrap().card("Chess Club").unwrap();
        assert_eq!(card.capacity, "1/10");
        assert_eq!(
            card.roster,
            vec![RosterEntry::Participant { email: "b@x.com".to_string() }]
        );
        assert_eq!(board.api().list_count(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_actions_are_independent() {
        let board = board(FakeApi::new(chess_catalog()), ScriptedDialogs::default());

        let (first, second) = tokio::join!(
            board.submit_signup_form("Chess Club", "b@x.com"),
            board.submit_signup_form("Chess Club", "c@x.com"),
        );
        assert_eq!(first, ActionOutcome::Completed);
        assert_eq!(second, ActionOutcome::Completed);
        assert_eq!(board.api().list_count(), 2);

        let view = board.surface().last_view().unwrap();
        assert_eq!(view.catalog().unwrap().card("Chess Club").unwrap().capacity, "3/10");
    }
}
