use crate::chrome::{ChromeSnapshot, CursorColor, ViewDelta};
use crate::config::ElementIds;
use crate::constants::*;
use crate::dom;
use glam::Vec2;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys as web;

/// DOM projection of the chrome state. Keeps the last applied snapshot and
/// only touches the parts that changed.
pub struct ChromeView {
    cursor: web::HtmlElement,
    cursor_point: web::HtmlElement,
    hint: Option<web::Element>,
    audio_button: web::Element,
    icon_idle: Option<web::Element>,
    icon_playing: Option<web::Element>,
    last: Option<ChromeSnapshot>,
}

impl ChromeView {
    pub fn from_document(document: &web::Document, ids: &ElementIds) -> anyhow::Result<Self> {
        let hint = document.get_element_by_id(&ids.cursor_hint);
        if let Some(h) = &hint {
            h.set_text_content(Some(SOUND_HINT_TEXT));
        }
        Ok(Self {
            cursor: dom::html_element_by_id(document, &ids.cursor)?,
            cursor_point: dom::html_element_by_id(document, &ids.cursor_point)?,
            hint,
            audio_button: dom::element_by_id(document, &ids.audio_button)?,
            icon_idle: document.get_element_by_id(&ids.audio_icon_idle),
            icon_playing: document.get_element_by_id(&ids.audio_icon_playing),
            last: None,
        })
    }

    /// Follower position currently written to the page.
    #[inline]
    pub fn last_follower(&self) -> Option<Vec2> {
        self.last.map(|s| s.follower)
    }

    /// Rendered size of the follower dot; it grows while hovering.
    #[inline]
    pub fn follower_size(&self) -> Vec2 {
        dom::element_size(&self.cursor_point)
    }

    pub fn apply(&mut self, snap: &ChromeSnapshot) -> ViewDelta {
        let delta = ViewDelta::between(self.last.as_ref(), snap);
        if delta.position {
            let transform = format!(
                "translate3d({:.2}px, {:.2}px, 0)",
                snap.follower.x, snap.follower.y
            );
            _ = self.cursor.style().set_property("transform", &transform);
        }
        if delta.cursor {
            let look = snap.cursor();
            dom::set_class(&self.cursor_point, CURSOR_HOVER_CLASS, look.enlarged);
            dom::set_class(
                &self.cursor_point,
                CURSOR_INVERT_CLASS,
                look.color == CursorColor::White,
            );
            if let Some(h) = &self.hint {
                dom::set_class(h, HIDDEN_CLASS, !look.hint_visible);
            }
        }
        if delta.audio {
            let label = snap.audio_label();
            _ = self.audio_button.set_attribute("title", label.title());
            if let Some(el) = &self.icon_idle {
                dom::set_class(el, HIDDEN_CLASS, snap.playing);
            }
            if let Some(el) = &self.icon_playing {
                dom::set_class(el, HIDDEN_CLASS, !snap.playing);
            }
        }
        self.last = Some(*snap);
        delta
    }
}

pub fn snapshot_object(snap: &ChromeSnapshot) -> Object {
    let obj = Object::new();
    let fields: [(&str, JsValue); 7] = [
        ("isDark", snap.theme.is_dark.into()),
        ("isRed", snap.theme.is_red.into()),
        ("hovering", snap.hovering.into()),
        ("playing", snap.playing.into()),
        ("interacted", snap.interacted.into()),
        ("x", (snap.follower.x as f64).into()),
        ("y", (snap.follower.y as f64).into()),
    ];
    for (key, value) in fields.iter() {
        _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj
}

/// Announce a state change to the render layer as a `CustomEvent` on window.
pub fn publish(snap: &ChromeSnapshot) {
    let Some(window) = web::window() else {
        return;
    };
    let init = web::CustomEventInit::new();
    init.set_detail(&snapshot_object(snap));
    match web::CustomEvent::new_with_event_init_dict(CHANGE_EVENT_NAME, &init) {
        Ok(ev) => {
            _ = window.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[view] {} event error: {:?}", CHANGE_EVENT_NAME, e),
    }
}
