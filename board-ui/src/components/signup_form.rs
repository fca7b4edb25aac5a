//! Signup Form Component
//!
//! Activity selector plus email field. Submission goes through the board,
//! which reports back with an inline message and clears the fields on
//! success.

use leptos::*;

use crate::components::FormMessageBanner;
use crate::state::{use_board, use_board_signals};

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let board = use_board();
    let signals = use_board_signals();
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let activity = signals.form_activity.get_untracked();
        let email = signals.form_email.get_untracked();

        set_submitting.set(true);

        let board = board.clone();
        spawn_local(async move {
            board.submit_signup_form(&activity, &email).await;
            set_submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || signals.form_email.get()
                    on:input=move |ev| signals.form_email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || signals.form_activity.get()
                    on:change=move |ev| signals.form_activity.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        signals.options.get()
                            .into_iter()
                            .map(|name| view! {
                                <option value=name.clone()>{name}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>

        <FormMessageBanner />
    }
}
