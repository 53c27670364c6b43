use super::listener::{listen, ListenerGuard};
use crate::dom;
use crate::pointer::PointerSample;
use crate::root::{self, SharedChrome};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Window-level mousemove: sample, re-evaluate hover, retarget the follower.
pub fn wire_pointer_move(window: &web::Window, shared: &SharedChrome) -> anyhow::Result<ListenerGuard> {
    let shared_move = shared.clone();
    let window_move = window.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        root::update(&shared_move, |s| {
            let sample = PointerSample {
                client: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                scroll: dom::scroll_offsets(&window_move),
                follower_size: s.view.follower_size(),
            };
            let now = s.now();
            if s.chrome.on_pointer_move(sample, now) {
                let p = s.chrome.pointer().state();
                log::debug!(
                    "[pointer] hovering={} at ({:.0}, {:.0})",
                    p.is_over_hover_target,
                    p.last_x,
                    p.last_y
                );
            }
        });
    }) as Box<dyn FnMut(_)>);

    listen(window, "mousemove", closure)
}
