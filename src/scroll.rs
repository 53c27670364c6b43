use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const SMOOTHER_GLOBAL: &str = "LocomotiveScroll";

/// Scroll-smoothing instance created with default options, torn down on drop.
///
/// The library is optional: if the page does not load it, this holds nothing.
pub struct ScrollSmoother {
    instance: Option<JsValue>,
}

impl ScrollSmoother {
    pub fn init(window: &web::Window) -> Self {
        let global: &JsValue = window.as_ref();
        let ctor = Reflect::get(global, &JsValue::from_str(SMOOTHER_GLOBAL))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        let instance = match ctor {
            Some(ctor) => match Reflect::construct(&ctor, &Array::new()) {
                Ok(inst) => {
                    log::info!("[scroll] {} started", SMOOTHER_GLOBAL);
                    Some(inst)
                }
                Err(e) => {
                    log::warn!("[scroll] {} failed to start: {:?}", SMOOTHER_GLOBAL, e);
                    None
                }
            },
            None => None,
        };
        Self { instance }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.instance.is_some()
    }
}

impl Drop for ScrollSmoother {
    fn drop(&mut self) {
        let Some(inst) = self.instance.take() else {
            return;
        };
        let destroy = Reflect::get(&inst, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        match destroy {
            Some(f) => {
                if let Err(e) = f.call0(&inst) {
                    log::warn!("[scroll] destroy failed: {:?}", e);
                }
            }
            None => log::debug!("[scroll] instance has no destroy()"),
        }
    }
}
