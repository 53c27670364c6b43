use crate::constants::{DARK_MARKER_CLASS, RED_MARKER_CLASS};
use crate::pointer::{HoverTarget, LayoutError};
use crate::theme::{ThemeMarker, ThemeMarkers};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an HtmlElement: {:?}", id, e)))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, present: bool) {
    _ = el.class_list().toggle_with_force(class, present);
}

#[inline]
pub fn scroll_offsets(window: &web::Window) -> Vec2 {
    Vec2::new(
        window.scroll_x().unwrap_or(0.0) as f32,
        window.scroll_y().unwrap_or(0.0) as f32,
    )
}

#[inline]
pub fn element_size(el: &web::HtmlElement) -> Vec2 {
    Vec2::new(el.offset_width() as f32, el.offset_height() as f32)
}

/// Document-relative vertical band of the element. Measured once; later
/// reflows are not tracked.
pub fn measure_hover_target(
    document: &web::Document,
    id: &str,
) -> Result<HoverTarget, LayoutError> {
    let el = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        .filter(|e| e.is_connected())
        .ok_or(LayoutError::Missing)?;
    HoverTarget::from_layout(el.offset_top() as f64, el.offset_height() as f64)
}

/// Theme markers as classes: "dark" on `<html>`, "red" on `<body>`.
pub struct DomMarkers {
    root: Option<web::Element>,
    body: Option<web::HtmlElement>,
}

impl DomMarkers {
    pub fn new(document: &web::Document) -> Self {
        Self {
            root: document.document_element(),
            body: document.body(),
        }
    }
}

impl ThemeMarkers for DomMarkers {
    fn set_marker(&mut self, marker: ThemeMarker, present: bool) {
        match marker {
            ThemeMarker::Dark => {
                if let Some(root) = &self.root {
                    set_class(root, DARK_MARKER_CLASS, present);
                }
            }
            ThemeMarker::Red => {
                if let Some(body) = &self.body {
                    set_class(body, RED_MARKER_CLASS, present);
                }
            }
        }
    }
}
