#![cfg(target_arch = "wasm32")]
use crate::config::ChromeConfig;
use crate::root::InteractionRoot;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod chrome;
mod config;
mod constants;
mod dom;
mod easing;
mod events;
mod frame;
mod lifecycle;
mod media;
mod pointer;
mod root;
mod scroll;
mod theme;
mod view;

thread_local! {
    // One root per page load.
    static ROOT: RefCell<Option<InteractionRoot>> = const { RefCell::new(None) };
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn mount_root() -> anyhow::Result<bool> {
    ROOT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let root = match slot.take() {
            Some(root) => root,
            None => InteractionRoot::new(ChromeConfig::default())?,
        };
        slot.insert(root).mount()
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-chrome starting");

    spawn_local(async move {
        if let Err(e) = mount_root() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Attach listeners and start the chrome. Calling it while mounted is a no-op.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_root().map(|_| ()).map_err(to_js)
}

/// Detach every listener and release the scroll smoother.
#[wasm_bindgen]
pub fn unmount() {
    ROOT.with(|slot| {
        if let Some(root) = slot.borrow_mut().as_mut() {
            root.unmount();
        }
    });
}

/// Current composed state for the render layer, or `undefined` when unmounted.
#[wasm_bindgen]
pub fn chrome_state() -> JsValue {
    ROOT.with(|slot| {
        slot.try_borrow()
            .ok()
            .and_then(|root| root.as_ref().and_then(|r| r.snapshot()))
            .map(|snap| JsValue::from(view::snapshot_object(&snap)))
            .unwrap_or(JsValue::UNDEFINED)
    })
}
