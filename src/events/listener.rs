use std::any::Any;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener. Dropping it detaches the listener and frees
/// the Rust closure, in that order.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    _closure: Box<dyn Any>,
}

pub fn listen<F>(
    target: &web::EventTarget,
    event: &'static str,
    closure: Closure<F>,
) -> anyhow::Result<ListenerGuard>
where
    F: ?Sized + 'static,
{
    let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    target
        .add_event_listener_with_callback(event, &callback)
        .map_err(|e| anyhow::anyhow!("add '{}' listener: {:?}", event, e))?;
    Ok(ListenerGuard {
        target: target.clone(),
        event,
        callback,
        _closure: Box::new(closure),
    })
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}
