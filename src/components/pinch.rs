/// Two-finger pinch and pan for the chart panels.
use mousegram_core::zoom::{ZoomBehavior, ZoomTransform};

/// Snapshot taken when the second finger lands.
#[derive(Clone, Copy, Debug)]
pub struct PinchState {
    /// Pixel distance between the two fingers at gesture start.
    pub initial_dist: f64,
    pub initial_transform: ZoomTransform,
    /// Midpoint in plot-area px at gesture start.
    pub initial_mid_x: f64,
}

/// Returns (midpoint_client_x, distance) for exactly 2 touches.
pub fn two_finger_geometry(touches: &web_sys::TouchList) -> Option<(f64, f64)> {
    if touches.length() != 2 {
        return None;
    }
    let t0 = touches.get(0)?;
    let t1 = touches.get(1)?;
    let (x0, y0) = (t0.client_x() as f64, t0.client_y() as f64);
    let (x1, y1) = (t1.client_x() as f64, t1.client_y() as f64);
    let mid_x = (x0 + x1) / 2.0;
    let dist = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
    Some((mid_x, dist))
}

/// Transform for the current finger geometry. The minute under the initial
/// midpoint stays put while the fingers spread; moving the midpoint pans.
pub fn apply_pinch(
    pinch: &PinchState,
    current_dist: f64,
    current_mid_x: f64,
    behavior: &ZoomBehavior,
) -> ZoomTransform {
    if pinch.initial_dist < 10.0 {
        return pinch.initial_transform;
    }
    let k = pinch.initial_transform.k * current_dist / pinch.initial_dist;
    let zoomed = behavior.zoom_to(pinch.initial_transform, k, pinch.initial_mid_x);
    behavior.pan(zoomed, current_mid_x - pinch.initial_mid_x)
}
