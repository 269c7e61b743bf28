use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use crate::catalog;
use crate::components::tab_bar::TabBar;
use crate::deck::Deck;
use crate::pages::discover::DiscoverPage;
use crate::pages::matches::MatchesPage;
use crate::pages::profile::ProfilePage;
use crate::session::Session;
use crate::store::Store;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new(Store::local());
    provide_context(session.clone());
    let deck = session.deck;
    let ready = session.catalog_ready;

    // Fetch the catalog once on mount. The UI is already interactive while
    // this is in flight; a failed fetch degrades to an empty deck.
    Effect::new(move |_| {
        spawn_local(async move {
            match catalog::load().await {
                Ok(profiles) => deck.set(Deck::new(profiles)),
                Err(e) => {
                    console::error_1(&format!("Failed to load profiles: {}", e).into());
                    deck.set(Deck::new(Vec::new()));
                }
            }
            ready.set(true);
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <header class="app-header">
                    <h1 class="app-title">"SwipeLite"</h1>
                    <TabBar />
                </header>
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=DiscoverPage />
                        <Route path=path!("/matches") view=MatchesPage />
                        <Route path=path!("/profile") view=ProfilePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
