use super::listener::{listen, ListenerGuard};
use crate::config::ElementIds;
use crate::dom;
use crate::root::{self, SharedChrome};
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn wire_click_handlers(
    window: &web::Window,
    document: &web::Document,
    shared: &SharedChrome,
    ids: &ElementIds,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let mut guards = Vec::with_capacity(4);
    guards.push(wire_page_click(window, shared)?);
    guards.push(wire_audio_button(document, shared, &ids.audio_button)?);
    // Title and theme button are optional markup; without them the page
    // just loses that toggle.
    match document.get_element_by_id(&ids.title) {
        Some(el) => guards.push(wire_title(&el, shared)?),
        None => log::warn!("[root] no #{}; red toggle unavailable", ids.title),
    }
    match document.get_element_by_id(&ids.theme_button) {
        Some(el) => guards.push(wire_theme_button(&el, shared)?),
        None => log::warn!("[root] no #{}; dark toggle unavailable", ids.theme_button),
    }
    Ok(guards)
}

// Any click that reaches the window; only the first one unlocks audio.
fn wire_page_click(window: &web::Window, shared: &SharedChrome) -> anyhow::Result<ListenerGuard> {
    let shared_click = shared.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        root::update(&shared_click, |s| {
            s.chrome.on_generic_click(&mut s.track);
        });
        root::watch_pending_play(&shared_click);
    }) as Box<dyn FnMut(_)>);
    listen(window, "click", closure)
}

fn wire_audio_button(
    document: &web::Document,
    shared: &SharedChrome,
    id: &str,
) -> anyhow::Result<ListenerGuard> {
    let button = dom::element_by_id(document, id)?;
    let shared_click = shared.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // Keep this gesture away from the window-level unlock handler.
        ev.stop_propagation();
        root::update(&shared_click, |s| {
            s.chrome.on_audio_button(&mut s.track);
        });
        root::watch_pending_play(&shared_click);
    }) as Box<dyn FnMut(_)>);
    listen(&button, "click", closure)
}

fn wire_title(title: &web::Element, shared: &SharedChrome) -> anyhow::Result<ListenerGuard> {
    let shared_click = shared.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        root::update(&shared_click, |s| {
            s.chrome.toggle_red(&mut s.markers, &mut s.track);
        });
    }) as Box<dyn FnMut(_)>);
    listen(title, "click", closure)
}

fn wire_theme_button(button: &web::Element, shared: &SharedChrome) -> anyhow::Result<ListenerGuard> {
    let shared_click = shared.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        root::update(&shared_click, |s| {
            s.chrome.toggle_dark(&mut s.markers);
        });
    }) as Box<dyn FnMut(_)>);
    listen(button, "click", closure)
}
