//! Activity List Component
//!
//! The activities region: a loading line, the load failure notice, or one
//! card per activity in server order.

use leptos::*;

use activity_board::BoardView;

use crate::components::ActivityCard;
use crate::state::use_board_signals;

#[component]
pub fn ActivityList() -> impl IntoView {
    let signals = use_board_signals();

    view! {
        <div id="activities-list">
            {move || match signals.view.get() {
                BoardView::Loading => view! {
                    <p>"Loading activities..."</p>
                }.into_view(),
                BoardView::Failed(notice) => view! {
                    <p class="error">{notice}</p>
                }.into_view(),
                BoardView::Catalog(catalog) if catalog.cards.is_empty() => view! {
                    <p>"No activities available."</p>
                }.into_view(),
                BoardView::Catalog(catalog) => catalog
                    .cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}
