// Browser implementations of the playback capabilities. Every routine has a
// non-wasm twin so the crate compiles and unit-tests on the host toolchain.

pub mod audio;
pub mod interaction;
pub mod media_session;
pub mod storage;

pub use audio::PageAudio;
pub use interaction::DocumentInteractions;
pub use media_session::NavigatorMediaSession;
pub use storage::BrowserPrefs;
