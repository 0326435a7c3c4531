use futures_util::future::LocalBoxFuture;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

use crate::playback::{AudioHandle, PlayResult, PlaybackDenied};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "qohwah-ambient-audio";

/// Handle to the page's singleton ambient `<audio>` element.
///
/// The element is looked up by id on every call, so the handle stays plain
/// data and play futures can settle independently of it.
#[derive(Clone, Copy, Default)]
pub struct PageAudio;

#[cfg(target_arch = "wasm32")]
impl PageAudio {
    /// Create the element on first use and attach it to the document body.
    pub fn mount(src: &str) -> Option<Self> {
        let audio = get_or_create_audio_element()?;
        if audio.get_attribute("src").as_deref() != Some(src) {
            audio.set_src(src);
        }
        Some(Self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PageAudio {
    pub fn mount(_src: &str) -> Option<Self> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "auto").ok()?;
    document.body()?.append_child(&audio).ok()?;
    Some(audio)
}

#[cfg(target_arch = "wasm32")]
impl AudioHandle for PageAudio {
    fn configure(&self, volume: f64, looped: bool) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(volume);
            audio.set_loop(looped);
        }
    }

    fn request_play(&self) -> LocalBoxFuture<'static, PlayResult> {
        let promise = get_or_create_audio_element().and_then(|audio| audio.play().ok());
        Box::pin(async move {
            match promise {
                Some(promise) => wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|_| PlaybackDenied),
                None => Err(PlaybackDenied),
            }
        })
    }

    fn pause(&self) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
    }

    fn rewind(&self) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_current_time(0.0);
        }
    }

    fn release(&self) {
        if let Some(document) = window().and_then(|w| w.document()) {
            if let Some(audio) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
                if let Ok(audio) = audio.dyn_into::<HtmlAudioElement>() {
                    let _ = audio.pause();
                    audio.remove();
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioHandle for PageAudio {
    fn configure(&self, _volume: f64, _looped: bool) {}

    fn request_play(&self) -> LocalBoxFuture<'static, PlayResult> {
        Box::pin(futures_util::future::ready(Err(PlaybackDenied)))
    }

    fn pause(&self) {}

    fn rewind(&self) {}

    fn release(&self) {}
}
