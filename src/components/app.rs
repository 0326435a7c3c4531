use dioxus::prelude::*;

use crate::components::{MusicPlayer, Preloader};

/// Page shell: brand backdrop, first-visit preloader, ambient player.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "page",
            Preloader {}
            main { class: "hero",
                p { class: "hero-eyebrow", "Rasa rempah dari tanah Manduri" }
                h1 { class: "hero-title", "Qohwah Manduri" }
                p { class: "hero-tagline",
                    "Kopi rempah tradisional, diseduh dari resep turun-temurun."
                }
            }
            MusicPlayer {}
        }
    }
}
