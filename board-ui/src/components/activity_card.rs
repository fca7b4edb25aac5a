//! Activity Card Component
//!
//! One activity with its capacity, roster and signup button.

use leptos::*;

use activity_board::board::NO_PARTICIPANTS;
use activity_board::{ActivityCard as CardModel, RosterEntry};

use crate::state::use_board;

/// Activity card component
#[component]
pub fn ActivityCard(
    /// Render model for one activity
    card: CardModel,
) -> impl IntoView {
    let board = use_board();
    let name = card.name.clone();

    let on_signup = {
        let name = name.clone();
        move |_: ev::MouseEvent| {
            let board = board.clone();
            let name = name.clone();
            spawn_local(async move {
                board.signup_for_activity(&name).await;
            });
        }
    };

    let roster = card
        .roster
        .into_iter()
        .map(|entry| match entry {
            RosterEntry::Participant { email } => view! {
                <Participant activity=name.clone() email=email />
            }
            .into_view(),
            RosterEntry::Placeholder => view! {
                <li class="no-participants"><em>{NO_PARTICIPANTS}</em></li>
            }
            .into_view(),
        })
        .collect_view();

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule: "</strong>{card.schedule}</p>
            <p><strong>"Capacity: "</strong>{card.capacity}</p>

            <div class="participants-section">
                <h5>{format!("Participants ({})", card.participant_count)}</h5>
                <ul class="participants-list">{roster}</ul>
            </div>

            <button type="button" class="signup-btn" on:click=on_signup>
                "Sign Up"
            </button>
        </div>
    }
}

/// Roster row with its unregister control
#[component]
fn Participant(
    #[prop(into)]
    activity: String,
    #[prop(into)]
    email: String,
) -> impl IntoView {
    let board = use_board();

    let on_unregister = {
        let email = email.clone();
        move |_: ev::MouseEvent| {
            let board = board.clone();
            let activity = activity.clone();
            let email = email.clone();
            spawn_local(async move {
                board.unregister_participant(&activity, &email).await;
            });
        }
    };

    view! {
        <li class="participant">
            <span class="participant-email">{email}</span>
            <button type="button" class="delete-btn" title="Unregister" on:click=on_unregister>
                "✕"
            </button>
        </li>
    }
}
