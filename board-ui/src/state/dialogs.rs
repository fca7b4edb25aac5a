//! Window Dialogs
//!
//! `window.prompt`, `window.confirm` and `window.alert`.

use activity_board::Dialogs;

/// Blocking browser dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowDialogs;

impl Dialogs for WindowDialogs {
    fn prompt(&self, message: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                web_sys::console::error_1(&format!("prompt failed: {:?}", e).into());
                None
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                web_sys::console::error_1(&format!("alert failed: {:?}", e).into());
            }
        }
    }
}
