use crate::playback::{PreferenceStore, StoredPreference};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, SessionStorage, Storage};

/// localStorage key for the visitor's explicit pause/resume choice. The
/// value is the literal string `true` (paused) or `false` (resumed).
#[cfg(target_arch = "wasm32")]
const MUSIC_PREF_KEY: &str = "qohwah-music-paused";

/// sessionStorage key marking that the preloader already ran this session.
#[cfg(target_arch = "wasm32")]
const VISITED_KEY: &str = "qohwah-visited";

/// Browser-backed store for the playback preference. Unreadable or missing
/// values degrade to "no choice made".
#[derive(Clone, Copy, Default)]
pub struct BrowserPrefs;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserPrefs {
    fn load(&self) -> StoredPreference {
        match LocalStorage::get(MUSIC_PREF_KEY) {
            Ok(paused) => StoredPreference::from_raw(Some(paused)),
            Err(_) => StoredPreference::Unset,
        }
    }

    fn store(&self, pref: StoredPreference) {
        if let Some(paused) = pref.as_raw() {
            let _ = LocalStorage::set(MUSIC_PREF_KEY, paused);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for BrowserPrefs {
    fn load(&self) -> StoredPreference {
        StoredPreference::Unset
    }

    fn store(&self, _pref: StoredPreference) {}
}

/// Whether this browser session already saw the preloader.
#[cfg(target_arch = "wasm32")]
pub fn visited_this_session() -> bool {
    SessionStorage::get(VISITED_KEY).unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn visited_this_session() -> bool {
    true
}

#[cfg(target_arch = "wasm32")]
pub fn mark_visited() {
    let _ = SessionStorage::set(VISITED_KEY, true);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mark_visited() {}
