// Ambient playback core: session state, the stored pause/resume preference,
// track metadata, and the capability-injected controller. Everything here is
// platform-free and unit-tested on the host; browser bindings live in
// `crate::platform`.

pub mod controller;
pub mod prefs;
pub mod state;
pub mod track;

pub use controller::{
    AmbientController, AudioHandle, ExternalCommand, ExternalDispatch, InteractionNotify,
    InteractionSource, MediaControlSurface, PlayResult, PlaybackDenied, PlayerCommand,
};
pub use prefs::{PreferenceStore, StoredPreference};
pub use state::{SessionState, SurfaceState};
pub use track::{TrackMetadata, AMBIENT_AUDIO_URL, AMBIENT_TRACK, AMBIENT_VOLUME};
