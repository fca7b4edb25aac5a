//! Form Message Component
//!
//! Inline success/error line under the signup form. Hiding is driven by
//! the surface's timer, so this only mirrors the signal.

use leptos::*;

use crate::state::use_board_signals;

#[component]
pub fn FormMessageBanner() -> impl IntoView {
    let signals = use_board_signals();

    move || {
        signals.message.get().map(|message| {
            view! {
                <div id="message" class=format!("message {}", message.kind.class_name())>
                    {message.text}
                </div>
            }
        })
    }
}
