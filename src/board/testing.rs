//! In-memory fakes for board tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use crate::api::{ActivityApi, ApiError, ApiResult, MessageResponse};
use crate::catalog::ActivityCatalog;

use super::surface::{BoardSurface, Dialogs};
use super::view::{BoardView, FormMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Signup(String, String),
    Unregister(String, String),
}

/// Answers like the activities server, against an in-memory catalog
pub struct FakeApi {
    catalog: RefCell<ActivityCatalog>,
    calls: RefCell<Vec<Call>>,
    fail_next: RefCell<Option<ApiError>>,
    messages: bool,
}

impl FakeApi {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            calls: RefCell::new(Vec::new()),
            fail_next: RefCell::new(None),
            messages: true,
        }
    }

    /// Answer mutations with `{}` instead of `{"message": ...}`
    pub fn without_messages(mut self) -> Self {
        self.messages = false;
        self
    }

    /// Make the next call of any kind fail with `err`
    pub fn fail_next_with(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| **c == Call::List).count()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn reply(&self, message: String) -> MessageResponse {
        if self.messages {
            MessageResponse::new(message)
        } else {
            MessageResponse::default()
        }
    }
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

#[async_trait(?Send)]
impl ActivityApi for FakeApi {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        self.record(Call::List)?;
        Ok(self.catalog.borrow().clone())
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        self.record(Call::Signup(activity.to_string(), email.to_string()))?;

        let mut catalog = self.catalog.borrow_mut();
        let record = catalog
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        if record.participants.iter().any(|p| p == email) {
            return Err(rejected(400, "Student already signed up for this activity"));
        }
        record.participants.push(email.to_string());

        Ok(self.reply(format!("Signed up {email} for {activity}")))
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        self.record(Call::Unregister(activity.to_string(), email.to_string()))?;

        let mut catalog = self.catalog.borrow_mut();
        let record = catalog
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        let position = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| rejected(404, "Participant not found"))?;
        record.participants.remove(position);

        Ok(self.reply(format!("Unregistered {email} from {activity}")))
    }
}

/// Dialogs that replay queued answers and record what was asked
#[derive(Default)]
pub struct ScriptedDialogs {
    prompt_answers: RefCell<VecDeque<Option<String>>>,
    confirm_answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answer_prompt(self, answer: Option<&str>) -> Self {
        self.prompt_answers
            .borrow_mut()
            .push_back(answer.map(str::to_string));
        self
    }

    pub fn answer_confirm(self, answer: bool) -> Self {
        self.confirm_answers.borrow_mut().push_back(answer);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.prompt_answers.borrow_mut().pop_front().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Surface that keeps everything it was asked to show
#[derive(Default)]
pub struct RecordingSurface {
    views: RefCell<Vec<BoardView>>,
    messages: RefCell<Vec<(FormMessage, Duration)>>,
    resets: RefCell<usize>,
}

impl RecordingSurface {
    pub fn views(&self) -> Vec<BoardView> {
        self.views.borrow().clone()
    }

    pub fn last_view(&self) -> Option<BoardView> {
        self.views.borrow().last().cloned()
    }

    pub fn messages(&self) -> Vec<(FormMessage, Duration)> {
        self.messages.borrow().clone()
    }

    pub fn resets(&self) -> usize {
        *self.resets.borrow()
    }
}

impl BoardSurface for RecordingSurface {
    fn render(&self, view: BoardView) {
        self.views.borrow_mut().push(view);
    }

    fn show_form_message(&self, message: FormMessage, hide_after: Duration) {
        self.messages.borrow_mut().push((message, hide_after));
    }

    fn reset_form(&self) {
        *self.resets.borrow_mut() += 1;
    }
}
