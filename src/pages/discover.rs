use leptos::prelude::*;

use crate::components::card_stack::CardStack;
use crate::session::Session;

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let matched = session.matched;

    let reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Reset demo data on this device?").ok())
            .unwrap_or(false);
        if confirmed {
            session.reset();
        }
    };

    view! {
        <div class="page discover-page">
            <CardStack />
            <Show when=move || matched.get().is_some()>
                <div class="match-banner" role="alert">
                    <p>
                        {move || {
                            matched
                                .get()
                                .map(|p| format!("It's a match with {}! 🎉", p.name))
                                .unwrap_or_default()
                        }}
                    </p>
                    <button class="btn" on:click=move |_| matched.set(None)>
                        "Keep swiping"
                    </button>
                </div>
            </Show>
            <button class="link-muted" on:click=reset>"Reset demo data"</button>
        </div>
    }
}
