use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::swipe_card::PLACEHOLDER_PHOTO;
use crate::session::Session;
use crate::store::KEY_ME;

/// The local user's own profile, entirely separate from the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Me {
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub photo: String,
}

/// An empty or unparseable age saves as 0 rather than rejecting the form.
fn parse_age(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let store = session.store.clone();

    let (name, set_name) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (photo, set_photo) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);

    // Pre-populate from the saved record on mount.
    {
        let store = store.clone();
        Effect::new(move |_| {
            if let Some(me) = store.get_record::<Me>(KEY_ME) {
                set_name.set(me.name);
                set_age.set(if me.age == 0 {
                    String::new()
                } else {
                    me.age.to_string()
                });
                set_bio.set(me.bio);
                set_photo.set(me.photo);
            }
        });
    }

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let photo = photo.get().trim().to_string();
        let me = Me {
            name: name.get().trim().to_string(),
            age: parse_age(&age.get()),
            bio: bio.get().trim().to_string(),
            photo: if photo.is_empty() {
                PLACEHOLDER_PHOTO.to_string()
            } else {
                photo
            },
        };
        store.put_record(KEY_ME, &me);
        set_status.set(Some("Profile saved locally".to_string()));
    };

    view! {
        <div class="page profile-page">
            <h2>"My Profile"</h2>
            <form class="profile-form" on:submit=save>
                <div class="form-group">
                    <label for="me-name">"Name"</label>
                    <input
                        id="me-name"
                        type="text"
                        class="input"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="me-age">"Age"</label>
                    <input
                        id="me-age"
                        type="number"
                        min="0"
                        class="input"
                        prop:value=move || age.get()
                        on:input=move |ev| set_age.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="me-bio">"Bio"</label>
                    <textarea
                        id="me-bio"
                        class="input"
                        rows="3"
                        prop:value=move || bio.get()
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="me-photo">"Photo URL"</label>
                    <input
                        id="me-photo"
                        type="url"
                        class="input"
                        placeholder="https://..."
                        prop:value=move || photo.get()
                        on:input=move |ev| set_photo.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Save"</button>
                <Show when=move || status.get().is_some()>
                    <span class="status-text">{move || status.get().unwrap_or_default()}</span>
                </Show>
            </form>
        </div>
    }
}
