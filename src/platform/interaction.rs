#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::playback::{InteractionNotify, InteractionSource};

#[cfg(target_arch = "wasm32")]
const GESTURE_EVENTS: [&str; 2] = ["click", "touchstart"];

/// Page-wide source of the first qualifying gesture (pointer click or
/// touch start), registered as one-shot document listeners.
#[derive(Clone, Copy, Default)]
pub struct DocumentInteractions;

/// Owns the registered listeners; dropping it removes them.
pub struct GestureSubscription {
    #[cfg(target_arch = "wasm32")]
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl InteractionSource for DocumentInteractions {
    type Subscription = GestureSubscription;

    fn subscribe_once(&self, notify: InteractionNotify) -> GestureSubscription {
        let notify: Rc<dyn Fn()> = Rc::from(notify);
        let mut listeners = Vec::new();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            for event in GESTURE_EVENTS {
                let notify = Rc::clone(&notify);
                let closure = Closure::wrap(Box::new(move || notify()) as Box<dyn FnMut()>);
                let options = web_sys::AddEventListenerOptions::new();
                options.set_once(true);
                if document
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        event,
                        closure.as_ref().unchecked_ref(),
                        &options,
                    )
                    .is_ok()
                {
                    listeners.push((event, closure));
                }
            }
        }
        GestureSubscription { listeners }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl InteractionSource for DocumentInteractions {
    type Subscription = GestureSubscription;

    fn subscribe_once(&self, _notify: InteractionNotify) -> GestureSubscription {
        GestureSubscription {}
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GestureSubscription {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            for (event, closure) in self.listeners.drain(..) {
                let _ = document
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    }
}
