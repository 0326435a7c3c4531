// Pure playback-session state machine. Transitions are computed from settled
// facts only; pending play requests contribute nothing until they resolve.

use crate::playback::prefs::StoredPreference;

/// In-memory view of one visit's ambient playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Audio is audibly playing, as of the last settled operation.
    pub is_playing: bool,
    /// A qualifying gesture has been recorded. Never resets within a visit.
    pub has_user_interacted: bool,
    /// The tap-to-play affordance should be offered.
    pub show_tap_prompt: bool,
}

/// What caused a play request to be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTrigger {
    Autoplay,
    FirstInteraction,
    TapToPlay,
    Toggle,
    External,
}

/// Playback state as reported to the platform media-control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Playing,
    Paused,
    None,
}

impl SurfaceState {
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceState::Playing => "playing",
            SurfaceState::Paused => "paused",
            SurfaceState::None => "none",
        }
    }
}

/// A settled fact the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Startup found the stored preference set to paused; no attempt is made.
    PromptDeferred,
    /// A play request resolved, successfully or with a policy denial.
    PlaySettled { trigger: PlayTrigger, denied: bool },
    /// An immediate pause was performed.
    PauseRequested { external: bool },
    /// An external stop was performed (pause + rewind).
    StopRequested,
}

/// Next state plus the side-effect instructions that accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub persist: Option<StoredPreference>,
    pub report: Option<SurfaceState>,
}

impl Transition {
    fn new(state: SessionState) -> Self {
        Self {
            state,
            persist: None,
            report: None,
        }
    }

    fn persist(mut self, pref: StoredPreference) -> Self {
        self.persist = Some(pref);
        self
    }

    fn report(mut self, surface: SurfaceState) -> Self {
        self.report = Some(surface);
        self
    }
}

/// Apply one settled event to the session.
///
/// Invariant: the prompt is only ever raised while not playing.
pub fn apply(current: SessionState, event: PlaybackEvent) -> Transition {
    match event {
        PlaybackEvent::PromptDeferred => Transition::new(SessionState {
            show_tap_prompt: !current.is_playing,
            ..current
        }),
        PlaybackEvent::PlaySettled {
            trigger,
            denied: false,
        } => {
            let next = SessionState {
                is_playing: true,
                has_user_interacted: true,
                show_tap_prompt: false,
            };
            let transition = Transition::new(next).report(SurfaceState::Playing);
            match trigger {
                PlayTrigger::TapToPlay | PlayTrigger::Toggle => {
                    transition.persist(StoredPreference::Resumed)
                }
                PlayTrigger::Autoplay | PlayTrigger::FirstInteraction | PlayTrigger::External => {
                    transition
                }
            }
        }
        PlaybackEvent::PlaySettled {
            trigger,
            denied: true,
        } => {
            let offer_prompt = matches!(trigger, PlayTrigger::Autoplay | PlayTrigger::Toggle);
            Transition::new(SessionState {
                show_tap_prompt: current.show_tap_prompt
                    || (offer_prompt && !current.is_playing),
                ..current
            })
        }
        PlaybackEvent::PauseRequested { external } => {
            let transition = Transition::new(SessionState {
                is_playing: false,
                ..current
            })
            .report(SurfaceState::Paused);
            if external {
                transition
            } else {
                transition.persist(StoredPreference::Paused)
            }
        }
        PlaybackEvent::StopRequested => Transition::new(SessionState {
            is_playing: false,
            ..current
        })
        .report(SurfaceState::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> SessionState {
        SessionState {
            is_playing: true,
            has_user_interacted: true,
            show_tap_prompt: false,
        }
    }

    fn consistent(state: SessionState) -> bool {
        !(state.is_playing && state.show_tap_prompt)
    }

    #[test]
    fn surface_states_use_the_platform_wire_strings() {
        assert_eq!(SurfaceState::Playing.as_str(), "playing");
        assert_eq!(SurfaceState::Paused.as_str(), "paused");
        assert_eq!(SurfaceState::None.as_str(), "none");
    }

    #[test]
    fn deferred_startup_offers_the_prompt() {
        let t = apply(SessionState::default(), PlaybackEvent::PromptDeferred);
        assert!(t.state.show_tap_prompt);
        assert!(!t.state.is_playing);
        assert_eq!(t.persist, None);
        assert_eq!(t.report, None);
    }

    #[test]
    fn successful_play_enters_the_playing_state() {
        for trigger in [
            PlayTrigger::Autoplay,
            PlayTrigger::FirstInteraction,
            PlayTrigger::TapToPlay,
            PlayTrigger::Toggle,
            PlayTrigger::External,
        ] {
            let t = apply(
                SessionState {
                    show_tap_prompt: true,
                    ..SessionState::default()
                },
                PlaybackEvent::PlaySettled {
                    trigger,
                    denied: false,
                },
            );
            assert_eq!(t.state, playing());
            assert_eq!(t.report, Some(SurfaceState::Playing));
        }
    }

    #[test]
    fn only_explicit_local_plays_persist_a_choice() {
        for (trigger, persisted) in [
            (PlayTrigger::Autoplay, None),
            (PlayTrigger::FirstInteraction, None),
            (PlayTrigger::External, None),
            (PlayTrigger::TapToPlay, Some(StoredPreference::Resumed)),
            (PlayTrigger::Toggle, Some(StoredPreference::Resumed)),
        ] {
            let t = apply(
                SessionState::default(),
                PlaybackEvent::PlaySettled {
                    trigger,
                    denied: false,
                },
            );
            assert_eq!(t.persist, persisted, "trigger {trigger:?}");
        }
    }

    #[test]
    fn denied_autoplay_and_toggle_offer_the_prompt() {
        for trigger in [PlayTrigger::Autoplay, PlayTrigger::Toggle] {
            let t = apply(
                SessionState::default(),
                PlaybackEvent::PlaySettled {
                    trigger,
                    denied: true,
                },
            );
            assert!(t.state.show_tap_prompt, "trigger {trigger:?}");
            assert!(!t.state.is_playing);
            assert_eq!(t.persist, None);
            assert_eq!(t.report, None);
        }
    }

    #[test]
    fn denied_tap_and_interaction_change_nothing() {
        let prompted = SessionState {
            show_tap_prompt: true,
            ..SessionState::default()
        };
        for trigger in [PlayTrigger::TapToPlay, PlayTrigger::FirstInteraction] {
            let t = apply(
                prompted,
                PlaybackEvent::PlaySettled {
                    trigger,
                    denied: true,
                },
            );
            assert_eq!(t.state, prompted, "trigger {trigger:?}");
            assert_eq!(t.persist, None);
        }
    }

    #[test]
    fn local_pause_persists_and_reports() {
        let t = apply(playing(), PlaybackEvent::PauseRequested { external: false });
        assert!(!t.state.is_playing);
        assert!(t.state.has_user_interacted);
        assert_eq!(t.persist, Some(StoredPreference::Paused));
        assert_eq!(t.report, Some(SurfaceState::Paused));
    }

    #[test]
    fn external_pause_never_persists() {
        let t = apply(playing(), PlaybackEvent::PauseRequested { external: true });
        assert!(!t.state.is_playing);
        assert_eq!(t.persist, None);
        assert_eq!(t.report, Some(SurfaceState::Paused));
    }

    #[test]
    fn stop_reports_none_and_persists_nothing() {
        let t = apply(playing(), PlaybackEvent::StopRequested);
        assert!(!t.state.is_playing);
        assert_eq!(t.persist, None);
        assert_eq!(t.report, Some(SurfaceState::None));
    }

    #[test]
    fn prompt_is_never_raised_while_playing() {
        let events = [
            PlaybackEvent::PromptDeferred,
            PlaybackEvent::PlaySettled {
                trigger: PlayTrigger::Autoplay,
                denied: true,
            },
            PlaybackEvent::PlaySettled {
                trigger: PlayTrigger::Toggle,
                denied: true,
            },
        ];
        for event in events {
            let t = apply(playing(), event);
            assert!(consistent(t.state), "event {event:?}");
        }
    }

    #[test]
    fn every_event_sequence_stays_consistent() {
        let events = [
            PlaybackEvent::PromptDeferred,
            PlaybackEvent::PlaySettled {
                trigger: PlayTrigger::Autoplay,
                denied: true,
            },
            PlaybackEvent::PlaySettled {
                trigger: PlayTrigger::TapToPlay,
                denied: false,
            },
            PlaybackEvent::PauseRequested { external: false },
            PlaybackEvent::PlaySettled {
                trigger: PlayTrigger::Toggle,
                denied: false,
            },
            PlaybackEvent::StopRequested,
            PlaybackEvent::PlaySettled {
                trigger: PlayTrigger::External,
                denied: false,
            },
            PlaybackEvent::PauseRequested { external: true },
        ];
        let mut state = SessionState::default();
        for event in events {
            state = apply(state, event).state;
            assert!(consistent(state), "after {event:?}");
        }
        assert!(state.has_user_interacted);
    }
}
