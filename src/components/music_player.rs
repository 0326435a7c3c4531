use dioxus::prelude::*;

use crate::components::ambient_audio::{self, PlayerCommands};
use crate::components::Icon;
use crate::playback::track::AMBIENT_ARTWORK_URL;
use crate::playback::{PlayerCommand, SessionState};

/// Floating ambient music control, fixed to the corner of the page.
///
/// Two shapes: the tap-to-play pill while playback is wanted but blocked,
/// and the circular artwork toggle otherwise.
#[component]
pub fn MusicPlayer() -> Element {
    let session = use_signal(SessionState::default);
    let commands = use_signal(|| None::<PlayerCommands>);

    use_effect(move || {
        ambient_audio::launch_session(session, commands);
    });

    let state = session();
    let send = move |command: PlayerCommand| {
        if let Some(commands) = &*commands.peek() {
            commands.send(command);
        }
    };

    let toggle_class = if state.is_playing {
        "player-toggle playing"
    } else {
        "player-toggle"
    };
    let toggle_label = if state.is_playing {
        "Jeda musik"
    } else {
        "Putar musik"
    };

    rsx! {
        div { class: "music-player",
            if state.show_tap_prompt && !state.has_user_interacted {
                button {
                    class: "tap-to-play",
                    onclick: move |_| send(PlayerCommand::TapToPlay),
                    Icon {
                        name: "volume".to_string(),
                        class: "tap-to-play-icon".to_string(),
                    }
                    span { "Putar Musik" }
                }
            } else {
                button {
                    class: "{toggle_class}",
                    aria_label: "{toggle_label}",
                    onclick: move |_| send(PlayerCommand::Toggle),
                    img {
                        class: "player-artwork",
                        src: AMBIENT_ARTWORK_URL,
                        alt: "Kopi Qohwah Manduri",
                    }
                    div { class: "player-overlay",
                        if state.is_playing {
                            Icon {
                                name: "pause".to_string(),
                                class: "player-overlay-icon".to_string(),
                            }
                        } else {
                            Icon {
                                name: "play".to_string(),
                                class: "player-overlay-icon".to_string(),
                            }
                        }
                    }
                    if state.is_playing {
                        span { class: "status-dot" }
                    }
                }
            }
        }
    }
}
