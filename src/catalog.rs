use serde::{Deserialize, Deserializer};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Static resource holding the session's candidate profiles.
pub const CATALOG_URL: &str = "data/profiles.json";

/// A candidate profile from the catalog. Immutable once loaded; source
/// order defines deal order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub photo: String,
    #[serde(rename = "likesYou", default)]
    pub likes_you: bool,
}

/// Ids are opaque strings; the demo data uses bare numbers, so accept both.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Str(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Num(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog request failed: {0}")]
    Fetch(String),
    #[error("catalog request returned status {0}")]
    Status(u16),
    #[error("catalog payload malformed: {0}")]
    Malformed(String),
}

/// Fetch the profile catalog. Always revalidates (`no-store`); the caller
/// degrades to an empty catalog on failure.
pub async fn load() -> Result<Vec<Profile>, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(CATALOG_URL, &opts)
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::Fetch("response was not a Response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let payload = JsFuture::from(
        response
            .json()
            .map_err(|e| LoadError::Malformed(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| LoadError::Malformed(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(payload).map_err(|e| LoadError::Malformed(e.to_string()))
}
