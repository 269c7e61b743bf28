use leptos::prelude::*;

use crate::components::match_list::MatchList;
use crate::session::Session;

#[component]
pub fn MatchesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let deck = session.deck;
    let decisions = session.decisions.clone();

    // Recomputed from current store state on every visit, never cached.
    let matched = Signal::derive(move || deck.with(|d| decisions.matched_profiles(d.catalog())));

    view! {
        <div class="page matches-page">
            <h2>"Your Matches"</h2>
            <MatchList profiles=matched />
        </div>
    }
}
