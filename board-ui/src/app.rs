//! App Root Component

use leptos::*;

use crate::components::{ActivityList, SignupForm};
use crate::state::{provide_board, use_board};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_board();

    // Initial load; every later refresh is triggered by a successful mutation.
    let board = use_board();
    spawn_local(async move {
        board.fetch_activities().await;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
            </section>
        </main>
    }
}
