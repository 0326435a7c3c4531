use futures_util::future::LocalBoxFuture;

use crate::playback::prefs::{PreferenceStore, StoredPreference};
use crate::playback::state::{self, PlayTrigger, PlaybackEvent, SessionState, SurfaceState};
use crate::playback::track::{TrackMetadata, AMBIENT_VOLUME};

/// The platform refused to start playback.
///
/// Autoplay policy rejections and unavailable media are indistinguishable
/// here and recovered the same way; this is never an application failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackDenied;

impl std::fmt::Display for PlaybackDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "playback request denied by the platform")
    }
}

impl std::error::Error for PlaybackDenied {}

pub type PlayResult = Result<(), PlaybackDenied>;

/// Commands arriving from the platform media-control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalCommand {
    Play,
    Pause,
    Stop,
}

/// Everything the controller reacts to, processed strictly in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Toggle,
    TapToPlay,
    FirstInteraction,
    External(ExternalCommand),
}

pub type ExternalDispatch = Box<dyn Fn(ExternalCommand)>;
pub type InteractionNotify = Box<dyn Fn()>;

/// Handle to the page's audio element.
pub trait AudioHandle {
    fn configure(&self, volume: f64, looped: bool);
    /// Issue a play request. The returned future is detached from the
    /// handle, so it can settle while the handle is used for other calls.
    fn request_play(&self) -> LocalBoxFuture<'static, PlayResult>;
    /// Pausing cannot fail; platform-level errors are discarded.
    fn pause(&self);
    /// Rewind the track position to the start.
    fn rewind(&self);
    /// Pause and detach the underlying element.
    fn release(&self);
}

/// Platform media-control surface (lock screen, hardware keys).
pub trait MediaControlSurface {
    /// Publish track metadata and bind the external command handlers.
    fn install(&self, track: &TrackMetadata, dispatch: ExternalDispatch);
    fn report(&self, state: SurfaceState);
}

/// Source of the page-wide first-interaction gesture.
///
/// The subscription is one-shot and cancels (removes its listeners) when
/// dropped.
pub trait InteractionSource {
    type Subscription;
    fn subscribe_once(&self, notify: InteractionNotify) -> Self::Subscription;
}

/// Owns one visit's ambient playback session.
///
/// All capabilities are injected, so the controller runs unchanged against
/// the browser and against test fakes. Commands are handled one at a time
/// to completion; a play request settles before the next command applies,
/// which keeps every transition grounded in current state.
pub struct AmbientController<A, P, M, I>
where
    A: AudioHandle,
    I: InteractionSource,
{
    audio: A,
    prefs: P,
    surface: Option<M>,
    interactions: I,
    track: TrackMetadata,
    session: SessionState,
    startup_pref: StoredPreference,
    gesture_sub: Option<I::Subscription>,
}

impl<A, P, M, I> AmbientController<A, P, M, I>
where
    A: AudioHandle,
    P: PreferenceStore,
    M: MediaControlSurface,
    I: InteractionSource,
{
    pub fn new(
        audio: A,
        prefs: P,
        surface: Option<M>,
        interactions: I,
        track: TrackMetadata,
    ) -> Self {
        Self {
            audio,
            prefs,
            surface,
            interactions,
            track,
            session: SessionState::default(),
            startup_pref: StoredPreference::Unset,
            gesture_sub: None,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Mount-time negotiation: configure the audio handle, install the
    /// media surface, honor the stored preference, then arm the one-shot
    /// gesture listeners.
    pub async fn start(&mut self, on_external: ExternalDispatch, on_gesture: InteractionNotify) {
        self.audio.configure(AMBIENT_VOLUME, true);
        if let Some(surface) = &self.surface {
            surface.install(&self.track, on_external);
        }
        self.startup_pref = self.prefs.load();
        if self.startup_pref.is_paused() {
            self.settle(PlaybackEvent::PromptDeferred);
        } else {
            self.attempt_play(PlayTrigger::Autoplay).await;
        }
        self.gesture_sub = Some(self.interactions.subscribe_once(on_gesture));
    }

    /// Process one command to completion.
    pub async fn handle(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Toggle => {
                if self.session.is_playing {
                    self.audio.pause();
                    self.settle(PlaybackEvent::PauseRequested { external: false });
                } else {
                    self.attempt_play(PlayTrigger::Toggle).await;
                }
            }
            PlayerCommand::TapToPlay => {
                self.attempt_play(PlayTrigger::TapToPlay).await;
            }
            PlayerCommand::FirstInteraction => {
                if !self.session.has_user_interacted && !self.startup_pref.is_paused() {
                    self.attempt_play(PlayTrigger::FirstInteraction).await;
                }
                // The listeners have fired; the subscription is spent.
                self.gesture_sub = None;
            }
            PlayerCommand::External(ExternalCommand::Play) => {
                self.attempt_play(PlayTrigger::External).await;
            }
            PlayerCommand::External(ExternalCommand::Pause) => {
                self.audio.pause();
                self.settle(PlaybackEvent::PauseRequested { external: true });
            }
            PlayerCommand::External(ExternalCommand::Stop) => {
                self.audio.pause();
                self.audio.rewind();
                self.settle(PlaybackEvent::StopRequested);
            }
        }
    }

    async fn attempt_play(&mut self, trigger: PlayTrigger) {
        let denied = self.audio.request_play().await.is_err();
        self.settle(PlaybackEvent::PlaySettled { trigger, denied });
    }

    fn settle(&mut self, event: PlaybackEvent) {
        let transition = state::apply(self.session, event);
        self.session = transition.state;
        if let Some(pref) = transition.persist {
            self.prefs.store(pref);
        }
        if let Some(surface_state) = transition.report {
            if let Some(surface) = &self.surface {
                surface.report(surface_state);
            }
        }
    }
}

impl<A, P, M, I> Drop for AmbientController<A, P, M, I>
where
    A: AudioHandle,
    I: InteractionSource,
{
    fn drop(&mut self) {
        self.gesture_sub = None;
        self.audio.release();
    }
}
