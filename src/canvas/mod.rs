pub mod axis;
pub mod colors;
pub mod panel_renderer;
pub mod scatter_renderer;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Size the backing store for the device pixel ratio and hand back a cleared
/// context that draws in logical `width` × `height` units. CSS stretches the
/// element to its container.
pub fn prepare(canvas: &HtmlCanvasElement, width: f64, height: f64) -> Option<CanvasRenderingContext2d> {
    let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
    let pw = (width * dpr).round() as u32;
    let ph = (height * dpr).round() as u32;
    if pw == 0 || ph == 0 {
        return None;
    }
    if canvas.width() != pw { canvas.set_width(pw); }
    if canvas.height() != ph { canvas.set_height(ph); }

    let ctx = context_2d(canvas)?;
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok()?;
    ctx.clear_rect(0.0, 0.0, width, height);
    Some(ctx)
}
