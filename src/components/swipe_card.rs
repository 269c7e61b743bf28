use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::Profile;
use crate::gesture::{SwipeOutcome, SwipeTracker};

pub const PLACEHOLDER_PHOTO: &str = "assets/placeholder.svg";

/// Which side a committed card flies off toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDir {
    Left,
    Right,
}

impl ExitDir {
    fn sign(self) -> f64 {
        match self {
            ExitDir::Left => -1.0,
            ExitDir::Right => 1.0,
        }
    }
}

/// One card in the stack. Only the top card is interactive; it drives a
/// `SwipeTracker` from pointer events (pointer events cover mouse and touch
/// with one code path) and reports committed gestures upward. Reverts snap
/// back locally; the fly-off transform is applied when `exiting` is set by
/// the stack controller.
#[component]
pub fn SwipeCard(
    profile: Profile,
    #[prop(into)] interactive: Signal<bool>,
    #[prop(into)] exiting: Signal<Option<ExitDir>>,
    #[prop(into)] on_commit: Callback<(SwipeOutcome, ExitDir)>,
) -> impl IntoView {
    let tracker = StoredValue::new(SwipeTracker::new());
    let (transform, set_transform) = signal(String::new());
    let (opacity, set_opacity) = signal(1.0_f64);
    let (transition, set_transition) = signal("none".to_string());

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if !interactive.get_untracked() {
            return;
        }
        // Capture so the drag keeps tracking outside the card bounds.
        if let Some(card) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            let _ = card.set_pointer_capture(ev.pointer_id());
        }
        set_transition.set("none".to_string());
        tracker.update_value(|t| t.begin(ev.client_x() as f64));
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let update = tracker
            .try_update_value(|t| t.update(ev.client_x() as f64))
            .flatten();
        if let Some(t) = update {
            set_transform.set(format!("translateX({}px) rotate({}deg)", t.dx, t.rotate_deg));
            set_opacity.set(t.opacity);
        }
    };

    let on_pointer_up = move |_ev: web_sys::PointerEvent| {
        match tracker.try_update_value(|t| t.finish()).flatten() {
            Some(SwipeOutcome::Like) => on_commit.run((SwipeOutcome::Like, ExitDir::Right)),
            Some(SwipeOutcome::Pass) => on_commit.run((SwipeOutcome::Pass, ExitDir::Left)),
            Some(SwipeOutcome::Revert) => {
                set_transition.set("transform 180ms ease, opacity 180ms ease".to_string());
                set_transform.set(String::new());
                set_opacity.set(1.0);
            }
            // Pointer-up with no preceding pointer-down.
            None => {}
        }
    };

    Effect::new(move |_| {
        if let Some(dir) = exiting.get() {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            set_transition.set("transform 250ms ease, opacity 250ms ease".to_string());
            set_transform.set(format!(
                "translate({}px, -40px) rotate({}deg)",
                dir.sign() * width,
                dir.sign() * 20.0
            ));
            set_opacity.set(0.0);
        }
    });

    let name_age = format!("{}, {}", profile.name, profile.age);
    let bio = profile.bio.clone().unwrap_or_default();
    let city = profile.city.clone().unwrap_or_default();

    view! {
        <div
            class="card"
            class:is-top=move || interactive.get()
            style:transform=move || transform.get()
            style:opacity=move || opacity.get().to_string()
            style:transition=move || transition.get()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
        >
            <img
                alt=profile.name.clone()
                src=profile.photo.clone()
                draggable="false"
                on:error=photo_fallback
            />
            <div class="meta">
                <div>
                    <div class="name">{name_age}</div>
                    <div class="bio">{bio}</div>
                </div>
                <span class="badge">{city}</span>
            </div>
        </div>
    }
}

/// Swap a broken photo for the bundled placeholder, once.
pub fn photo_fallback(ev: web_sys::ErrorEvent) {
    if let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    {
        if !img.src().ends_with(PLACEHOLDER_PHOTO) {
            img.set_src(PLACEHOLDER_PHOTO);
        }
    }
}
