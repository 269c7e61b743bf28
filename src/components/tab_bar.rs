use leptos::prelude::*;
use leptos_router::components::A;

/// Top-level navigation. Router links mark the active tab with
/// `aria-current` for assistive tech; styling keys off that attribute.
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="tab-bar">
            <A href="/" exact=true>"Discover"</A>
            <A href="/matches">"Matches"</A>
            <A href="/profile">"My Profile"</A>
        </nav>
    }
}
