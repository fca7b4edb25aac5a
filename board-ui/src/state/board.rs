//! Board State
//!
//! Reactive state the board renders into, plus the shared controller.

use leptos::*;
use std::rc::Rc;
use std::time::Duration;

use activity_board::{ActivityBoard, BoardSurface, BoardView, FormMessage};

use crate::api::{get_api_base, GlooActivityApi};
use crate::state::dialogs::WindowDialogs;

/// The controller as wired for the browser
pub type WebBoard = ActivityBoard<GlooActivityApi, WindowDialogs, SignalSurface>;

/// Signals behind the page
#[derive(Clone, Copy)]
pub struct BoardSignals {
    /// Activities region
    pub view: RwSignal<BoardView>,
    /// Selector options from the last successful load
    pub options: RwSignal<Vec<String>>,
    /// Inline message under the signup form
    pub message: RwSignal<Option<FormMessage>>,
    /// Selected activity in the signup form
    pub form_activity: RwSignal<String>,
    /// Typed email in the signup form
    pub form_email: RwSignal<String>,
}

impl BoardSignals {
    pub fn new() -> Self {
        Self {
            view: create_rw_signal(BoardView::Loading),
            options: create_rw_signal(Vec::new()),
            message: create_rw_signal(None),
            form_activity: create_rw_signal(String::new()),
            form_email: create_rw_signal(String::new()),
        }
    }
}

/// [`BoardSurface`] that writes into [`BoardSignals`]
#[derive(Clone, Copy)]
pub struct SignalSurface {
    signals: BoardSignals,
}

impl SignalSurface {
    pub fn new(signals: BoardSignals) -> Self {
        Self { signals }
    }
}

impl BoardSurface for SignalSurface {
    fn render(&self, view: BoardView) {
        match &view {
            BoardView::Catalog(catalog) => self.signals.options.set(catalog.options.clone()),
            BoardView::Failed(notice) => web_sys::console::error_1(&notice.as_str().into()),
            BoardView::Loading => {}
        }
        self.signals.view.set(view);
    }

    fn show_form_message(&self, message: FormMessage, hide_after: Duration) {
        let id = message.id;
        self.signals.message.set(Some(message));

        let message_signal = self.signals.message;
        let millis = u32::try_from(hide_after.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            message_signal.update(|current| hide_if_current(current, id));
        })
        .forget();
    }

    fn reset_form(&self) {
        self.signals.form_activity.set(String::new());
        self.signals.form_email.set(String::new());
    }
}

/// Hide the message only if it is still the one the timer was started for
fn hide_if_current(current: &mut Option<FormMessage>, id: u64) {
    if current.as_ref().map(|m| m.id) == Some(id) {
        *current = None;
    }
}

#[derive(Clone)]
struct BoardContext {
    board: Rc<WebBoard>,
    signals: BoardSignals,
}

/// Provide the board and its signals to the component tree
pub fn provide_board() {
    let signals = BoardSignals::new();
    let board = ActivityBoard::new(
        GlooActivityApi::new(get_api_base()),
        WindowDialogs,
        SignalSurface::new(signals),
    );

    provide_context(BoardContext {
        board: Rc::new(board),
        signals,
    });
}

/// The shared controller
pub fn use_board() -> Rc<WebBoard> {
    expect_context::<BoardContext>().board
}

/// The page signals
pub fn use_board_signals() -> BoardSignals {
    expect_context::<BoardContext>().signals
}
