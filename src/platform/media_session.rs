#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

use crate::playback::{
    ExternalCommand, ExternalDispatch, MediaControlSurface, SurfaceState, TrackMetadata,
};

#[cfg(target_arch = "wasm32")]
const ACTIONS: [(&str, ExternalCommand); 3] = [
    ("play", ExternalCommand::Play),
    ("pause", ExternalCommand::Pause),
    ("stop", ExternalCommand::Stop),
];

/// Browser media-session surface.
///
/// Reached through `js_sys::Reflect`, since the typed bindings for this API
/// sit behind unstable web-sys features. Installed handlers are owned here
/// and unbound again when the surface is dropped.
pub struct NavigatorMediaSession {
    #[cfg(target_arch = "wasm32")]
    handlers: RefCell<Vec<(&'static str, Closure<dyn FnMut()>)>>,
}

#[cfg(target_arch = "wasm32")]
impl NavigatorMediaSession {
    /// The surface, if this browser exposes one.
    pub fn detect() -> Option<Self> {
        media_session().map(|_| Self {
            handlers: RefCell::new(Vec::new()),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl NavigatorMediaSession {
    pub fn detect() -> Option<Self> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn media_session() -> Option<JsValue> {
    let window = web_sys::window()?;
    let navigator = js_sys::Reflect::get(window.as_ref(), &"navigator".into()).ok()?;
    let session = js_sys::Reflect::get(&navigator, &"mediaSession".into()).ok()?;
    (!session.is_undefined() && !session.is_null()).then_some(session)
}

#[cfg(target_arch = "wasm32")]
fn action_handler_setter(session: &JsValue) -> Option<js_sys::Function> {
    js_sys::Reflect::get(session, &"setActionHandler".into())
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn build_metadata(track: &TrackMetadata) -> Option<JsValue> {
    let json = serde_json::to_string(track).ok()?;
    let init = js_sys::JSON::parse(&json).ok()?;
    let constructor = js_sys::Reflect::get(web_sys::window()?.as_ref(), &"MediaMetadata".into())
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    js_sys::Reflect::construct(&constructor, &js_sys::Array::of1(&init))
        .ok()
        .map(JsValue::from)
}

#[cfg(target_arch = "wasm32")]
impl MediaControlSurface for NavigatorMediaSession {
    fn install(&self, track: &TrackMetadata, dispatch: ExternalDispatch) {
        let Some(session) = media_session() else {
            return;
        };
        if let Some(metadata) = build_metadata(track) {
            let _ = js_sys::Reflect::set(&session, &"metadata".into(), &metadata);
        }
        let Some(setter) = action_handler_setter(&session) else {
            return;
        };
        let dispatch: Rc<dyn Fn(ExternalCommand)> = Rc::from(dispatch);
        let mut handlers = self.handlers.borrow_mut();
        for (action, command) in ACTIONS {
            let dispatch = Rc::clone(&dispatch);
            let closure = Closure::wrap(Box::new(move || dispatch(command)) as Box<dyn FnMut()>);
            if setter
                .call2(&session, &action.into(), closure.as_ref())
                .is_ok()
            {
                handlers.push((action, closure));
            }
        }
    }

    fn report(&self, state: SurfaceState) {
        if let Some(session) = media_session() {
            let _ =
                js_sys::Reflect::set(&session, &"playbackState".into(), &state.as_str().into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaControlSurface for NavigatorMediaSession {
    fn install(&self, _track: &TrackMetadata, _dispatch: ExternalDispatch) {}

    fn report(&self, _state: SurfaceState) {}
}

#[cfg(target_arch = "wasm32")]
impl Drop for NavigatorMediaSession {
    fn drop(&mut self) {
        let Some(session) = media_session() else {
            return;
        };
        let Some(setter) = action_handler_setter(&session) else {
            return;
        };
        for (action, _closure) in self.handlers.borrow_mut().drain(..) {
            let _ = setter.call2(&session, &action.into(), &JsValue::NULL);
        }
    }
}
