//! The components module contains all shared components for our app.

mod ambient_audio;
mod app;
mod icons;
mod music_player;
mod preloader;

pub use app::*;
pub use icons::*;
pub use music_player::*;
pub use preloader::*;
