use leptos::prelude::*;

use crate::catalog::Profile;
use crate::components::swipe_card::photo_fallback;

#[component]
pub fn MatchList(#[prop(into)] profiles: Signal<Vec<Profile>>) -> impl IntoView {
    view! {
        <ul class="matches-list">
            <For
                each=move || profiles.get()
                key=|p| p.id.clone()
                children=move |p: Profile| {
                    let mailto = format!("mailto:demo@example.com?subject=Hi {}", p.name);
                    let heading = match &p.city {
                        Some(city) => format!("{} • {}", p.name, city),
                        None => p.name.clone(),
                    };
                    view! {
                        <li>
                            <img alt=p.name.clone() src=p.photo.clone() on:error=photo_fallback />
                            <div>
                                <div><strong>{heading}</strong></div>
                                <div class="muted">"It's a match! 🎉"</div>
                            </div>
                            <a class="btn btn-sayhi" href=mailto>"Say hi"</a>
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || profiles.get().is_empty()>
            <p class="muted">"No matches yet — keep swiping!"</p>
        </Show>
    }
}
