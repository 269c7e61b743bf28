use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::Profile;
use crate::components::swipe_card::{ExitDir, SwipeCard};
use crate::gesture::SwipeOutcome;
use crate::session::Session;

/// How long the fly-off transition plays before the card leaves the deck.
const DISMISS_MS: i32 = 220;

/// The discovery stack: renders the deck's visible window (top card last so
/// it paints on top), routes gestures and the like/pass buttons through the
/// decision processor, and sequences dismissal in two phases. The decision
/// is persisted synchronously at commit time; removal from the deck and the
/// refill happen after the exit animation, during which the whole stack is
/// inert to keep a second gesture from committing twice.
#[component]
pub fn CardStack() -> impl IntoView {
    let session = expect_context::<Session>();
    let deck = session.deck;
    let ready = session.catalog_ready;
    let leaving: RwSignal<Option<(String, ExitDir)>> = RwSignal::new(None);

    let commit = move |outcome: SwipeOutcome, dir: Option<ExitDir>| {
        if leaving.get_untracked().is_some() {
            return;
        }
        let Some(top) = deck.with_untracked(|d| d.top().cloned()) else {
            return;
        };
        match outcome {
            SwipeOutcome::Like => {
                let matched =
                    deck.with_untracked(|d| session.decisions.record_like(d.catalog(), &top.id));
                if matched.is_some() {
                    session.matched.set(matched);
                }
            }
            SwipeOutcome::Pass => session.decisions.record_pass(&top.id),
            SwipeOutcome::Revert => return,
        }

        // Button commits have no gesture direction; pick one at random.
        let dir = dir.unwrap_or_else(|| {
            if js_sys::Math::random() > 0.5 {
                ExitDir::Right
            } else {
                ExitDir::Left
            }
        });
        leaving.set(Some((top.id.clone(), dir)));

        let callback = wasm_bindgen::closure::Closure::once(move || {
            deck.update(|d| {
                d.remove_top();
                d.refill();
            });
            leaving.set(None);
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                DISMISS_MS,
            );
        }
        callback.forget();
    };

    let commit_like = commit.clone();
    let commit_pass = commit.clone();

    view! {
        <div class="card-stack">
            <For
                each=move || deck.with(|d| d.visible().to_vec())
                key=|p| p.id.clone()
                children=move |p: Profile| {
                    let id_top = p.id.clone();
                    let id_exit = p.id.clone();
                    let interactive = Signal::derive(move || {
                        leaving.get().is_none()
                            && deck.with(|d| d.top().is_some_and(|t| t.id == id_top))
                    });
                    let exiting = Signal::derive(move || {
                        leaving
                            .get()
                            .and_then(|(id, dir)| (id == id_exit).then_some(dir))
                    });
                    let commit = commit.clone();
                    view! {
                        <SwipeCard
                            profile=p
                            interactive=interactive
                            exiting=exiting
                            on_commit=move |(outcome, dir)| commit(outcome, Some(dir))
                        />
                    }
                }
            />
            <Show when=move || ready.get() && deck.with(|d| d.is_done())>
                <p class="stack-empty muted">
                    "No more profiles. Reset demo data or come back later."
                </p>
            </Show>
        </div>
        <div class="stack-actions">
            <button
                class="btn btn-round btn-pass"
                aria-label="Pass"
                on:click=move |_| commit_pass(SwipeOutcome::Pass, None)
            >
                "✕"
            </button>
            <button
                class="btn btn-round btn-like"
                aria-label="Like"
                on:click=move |_| commit_like(SwipeOutcome::Like, None)
            >
                "♥"
            </button>
        </div>
    }
}
