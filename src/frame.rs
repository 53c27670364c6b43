use crate::root::{self, SharedChrome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that advances the follower tween and re-renders.
/// Dropping it cancels the pending frame and frees the self-referencing tick.
pub struct FrameLoop {
    window: web::Window,
    tick: Tick,
    handle: Rc<Cell<i32>>,
}

impl FrameLoop {
    pub fn start(window: &web::Window, shared: &SharedChrome) -> anyhow::Result<Self> {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(0));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let shared_tick = shared.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Idle frames still re-arm, but skip the borrow-and-diff pass.
            let busy = shared_tick.try_borrow().map(|s| s.needs_frame()).unwrap_or(false);
            if busy {
                root::update(&shared_tick, |_| {});
            }
            let Some(w) = web::window() else {
                return;
            };
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(h) => handle_tick.set(h),
                    Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let frame = Self {
            window: window.clone(),
            tick,
            handle,
        };
        // From here on, an early return drops `frame` and breaks the tick cycle.
        let first = {
            let borrowed = frame.tick.borrow();
            let cb = borrowed
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("frame tick missing"))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?
        };
        frame.handle.set(first);
        Ok(frame)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        _ = self.window.cancel_animation_frame(self.handle.get());
        self.tick.borrow_mut().take();
    }
}
