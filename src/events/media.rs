use super::listener::{listen, ListenerGuard};
use crate::root::{self, SharedChrome};
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Follow the element's own play/pause events so pauses the page did not ask
/// for (platform policy, media keys) still reach `is_playing`.
pub fn wire_media_state(
    audio: &web::HtmlAudioElement,
    shared: &SharedChrome,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let mut guards = Vec::with_capacity(2);
    for event in ["play", "pause"] {
        let shared_media = shared.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            root::update(&shared_media, |s| {
                if s.chrome.reconcile_audio(&s.track) {
                    log::info!("[audio] media '{}' -> playing={}", event, s.chrome.audio().is_playing());
                }
            });
        }) as Box<dyn FnMut(_)>);
        guards.push(listen(audio, event, closure)?);
    }
    Ok(guards)
}
