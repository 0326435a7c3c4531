use dioxus::prelude::*;

mod components;
mod platform;
mod playback;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Qohwah Manduri | Kopi Rempah Tradisional" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#2b1a12" }
        document::Meta {
            name: "description",
            content: "Kopi rempah tradisional Qohwah Manduri, diseduh dari resep turun-temurun.",
        }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
