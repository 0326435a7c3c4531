use dioxus::prelude::*;

use crate::platform::storage;

#[cfg(target_arch = "wasm32")]
const PRELOADER_DISMISS_MS: u32 = 2500;

/// First-visit overlay with the brand mark and a steam animation.
///
/// Dismissed after a short reveal; the visit is recorded per browser
/// session, so reloads within the session skip it entirely.
#[component]
pub fn Preloader() -> Element {
    let mut dismissed = use_signal(storage::visited_this_session);

    use_effect(move || {
        if *dismissed.peek() {
            return;
        }
        spawn(async move {
            sleep_for_reveal().await;
            storage::mark_visited();
            dismissed.set(true);
        });
    });

    if dismissed() {
        return rsx! {};
    }

    rsx! {
        div { class: "preloader",
            div { class: "preloader-cup",
                div { class: "preloader-steam" }
                div { class: "preloader-steam delayed" }
            }
            p { class: "preloader-brand", "Qohwah Manduri" }
            p { class: "preloader-tagline", "Kopi rempah tradisional" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_for_reveal() {
    gloo_timers::future::TimeoutFuture::new(PRELOADER_DISMISS_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_for_reveal() {}
