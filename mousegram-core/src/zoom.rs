use crate::config::ZoomConfig;
use crate::scale::LinearScale;

/// Horizontal zoom: screen x = data-space x · k + x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform { k: 1.0, x: 0.0 };

    pub fn apply_x(&self, px: f64) -> f64 {
        px * self.k + self.x
    }

    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.x) / self.k
    }

    /// The scale that shows `base` through this transform: same range, domain
    /// narrowed to what is visible.
    pub fn rescale(&self, base: &LinearScale) -> LinearScale {
        let (r0, r1) = base.range();
        let d0 = base.invert(self.invert_x(r0));
        let d1 = base.invert(self.invert_x(r1));
        LinearScale::new((d0, d1), base.range())
    }

    /// Scale to `k`, keeping the point under `anchor` (screen px) fixed.
    pub fn scaled_about(&self, k: f64, anchor: f64) -> Self {
        let data_x = self.invert_x(anchor);
        Self { k, x: anchor - data_x * k }
    }

    pub fn translated(&self, dx: f64) -> Self {
        Self { k: self.k, x: self.x + dx }
    }
}

/// Normalised wheel delta, matching the browser zoom convention: pixel deltas
/// are small, line and page deltas are coarser, Ctrl speeds things up.
pub fn wheel_delta(delta_y: f64, delta_mode: u32, ctrl: bool) -> f64 {
    let unit = match delta_mode {
        0 => 0.002,
        1 => 0.05,
        _ => 1.0,
    };
    -delta_y * unit * if ctrl { 10.0 } else { 1.0 }
}

/// Limits applied to every gesture on one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBehavior {
    pub scale_extent: (f64, f64),
    /// Width of the plotted area; content may never be panned past it.
    pub width: f64,
}

impl ZoomBehavior {
    pub fn new(config: &ZoomConfig, width: f64) -> Self {
        Self { scale_extent: config.extent(), width }
    }

    fn clamp_k(&self, k: f64) -> f64 {
        k.clamp(self.scale_extent.0, self.scale_extent.1)
    }

    /// Clamp scale to the extent and translation so that `[0, width]` in data
    /// space always covers the viewport.
    pub fn constrain(&self, t: ZoomTransform) -> ZoomTransform {
        let k = self.clamp_k(t.k);
        let min_x = self.width * (1.0 - k);
        ZoomTransform { k, x: t.x.clamp(min_x.min(0.0), 0.0) }
    }

    pub fn zoom_to(&self, t: ZoomTransform, k: f64, anchor: f64) -> ZoomTransform {
        self.constrain(t.scaled_about(self.clamp_k(k), anchor))
    }

    pub fn wheel(&self, t: ZoomTransform, delta_y: f64, delta_mode: u32, ctrl: bool, anchor: f64) -> ZoomTransform {
        let k = t.k * 2f64.powf(wheel_delta(delta_y, delta_mode, ctrl));
        self.zoom_to(t, k, anchor)
    }

    pub fn pan(&self, t: ZoomTransform, dx: f64) -> ZoomTransform {
        self.constrain(t.translated(dx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 890.0;

    fn behavior() -> ZoomBehavior {
        ZoomBehavior::new(&ZoomConfig::default(), W)
    }

    fn base() -> LinearScale {
        LinearScale::new((0.0, 20159.0), (0.0, W))
    }

    #[test]
    fn test_identity_rescale_is_base() {
        let s = ZoomTransform::IDENTITY.rescale(&base());
        assert_eq!(s.domain(), (0.0, 20159.0));
    }

    #[test]
    fn test_rescale_matches_transform_of_base() {
        let t = ZoomTransform { k: 4.0, x: -1200.0 };
        let zx = t.rescale(&base());
        for m in [0.0, 1440.0, 5000.0, 12960.0] {
            let direct = t.apply_x(base().apply(m));
            assert!((zx.apply(m) - direct).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scale_extent_is_enforced() {
        let b = behavior();
        assert_eq!(b.zoom_to(ZoomTransform::IDENTITY, 100.0, 0.0).k, 20.0);
        assert_eq!(b.zoom_to(ZoomTransform::IDENTITY, 0.1, 0.0).k, 1.0);
    }

    #[test]
    fn test_pan_cannot_leave_data_bounds() {
        let b = behavior();
        let t = b.zoom_to(ZoomTransform::IDENTITY, 2.0, W / 2.0);
        let right = b.pan(t, 10_000.0);
        assert_eq!(right.x, 0.0);
        let left = b.pan(t, -10_000.0);
        assert!((left.x - (W - 2.0 * W)).abs() < 1e-9);
        let zx = left.rescale(&base());
        assert!((zx.domain().1 - 20159.0).abs() < 1e-6);
    }

    #[test]
    fn test_unzoomed_panel_cannot_pan() {
        let b = behavior();
        assert_eq!(b.pan(ZoomTransform::IDENTITY, 50.0), ZoomTransform::IDENTITY);
        assert_eq!(b.pan(ZoomTransform::IDENTITY, -50.0), ZoomTransform::IDENTITY);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let b = behavior();
        let anchor = 300.0;
        let before = base().invert(anchor);
        let t = b.zoom_to(ZoomTransform::IDENTITY, 3.0, anchor);
        let after = t.rescale(&base()).invert(anchor);
        assert!((before - after).abs() < 1e-6);
    }

    #[test]
    fn test_inverted_zoom_limits_are_reordered() {
        let cfg = crate::AppConfig::from_json(r#"{ "zoom": { "min_scale": 30 } }"#).unwrap();
        let b = ZoomBehavior::new(&cfg.zoom, W);
        assert_eq!(b.scale_extent, (20.0, 30.0));
        let t = b.wheel(ZoomTransform::IDENTITY, -100.0, 0, false, 100.0);
        assert!(t.k >= 20.0 && t.k <= 30.0);
        assert!(b.pan(t, 1e6).x <= 0.0);
    }

    #[test]
    fn test_unusable_zoom_limits_fall_back_to_defaults() {
        for (min_scale, max_scale) in [(0.0, 20.0), (-2.0, 5.0), (1.0, f64::INFINITY)] {
            let b = ZoomBehavior::new(&ZoomConfig { min_scale, max_scale }, W);
            assert_eq!(b.scale_extent, (1.0, 20.0));
        }
    }

    #[test]
    fn test_wheel_direction_and_magnitude() {
        let b = behavior();
        let t = b.wheel(ZoomTransform::IDENTITY, -500.0, 0, false, 100.0);
        assert!((t.k - 2.0).abs() < 1e-9);
        let back = b.wheel(t, 500.0, 0, false, 100.0);
        assert!((back.k - 1.0).abs() < 1e-9);
        assert!((wheel_delta(-3.0, 1, false) - 0.15).abs() < 1e-12);
        assert!((wheel_delta(-1.0, 0, true) - 0.02).abs() < 1e-12);
    }
}
