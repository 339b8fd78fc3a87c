use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::physical_size;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler()) as Box<dyn FnMut()>
            );
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
            true
        }
        None => {
            log::debug!("no #{element_id}; click handler not wired");
            false
        }
    }
}

pub fn on_window_resize(mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// CSS viewport size and device pixel ratio.
pub fn viewport() -> (f64, f64, f64) {
    let Some(w) = web::window() else {
        return (1.0, 1.0, 1.0);
    };
    let css_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let css_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (css_w, css_h, w.device_pixel_ratio())
}

/// Create a canvas covering the viewport and append it to `parent`.
///
/// The backing store is left for the caller to size.
pub fn append_fullscreen_canvas(
    document: &web::Document,
    parent: &web::Element,
    id: &str,
    style: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(id);
    _ = canvas.set_attribute("style", style);
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Match the canvas backing store to the viewport; returns the CSS size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let (css_w, css_h, dpr) = viewport();
    let (w_px, h_px) = physical_size(css_w, css_h, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (css_w, css_h)
}
