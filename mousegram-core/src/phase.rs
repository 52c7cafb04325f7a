use crate::config::PhaseConfig;
use crate::scale::LinearScale;

/// Which set of bands a panel shades.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PhaseMode {
    #[default]
    Light,
    Dark,
    Estrus,
}

impl PhaseMode {
    pub const ALL: [PhaseMode; 3] = [PhaseMode::Light, PhaseMode::Dark, PhaseMode::Estrus];

    /// Value of the `data-mode` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseMode::Light => "light",
            PhaseMode::Dark => "dark",
            PhaseMode::Estrus => "estrus",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "light" => Some(PhaseMode::Light),
            "dark" => Some(PhaseMode::Dark),
            "estrus" => Some(PhaseMode::Estrus),
            _ => None,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            PhaseMode::Light => "Light",
            PhaseMode::Dark => "Dark",
            PhaseMode::Estrus => "Estrus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Light,
    Dark,
    Estrus,
}

impl PhaseKind {
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Light => "Light phase",
            PhaseKind::Dark => "Dark phase",
            PhaseKind::Estrus => "Estrus",
        }
    }
}

/// A shaded interval, kept in minutes so it can be placed under any zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseBand {
    pub start: f64,
    pub span: f64,
    pub kind: PhaseKind,
}

impl PhaseBand {
    /// Left edge and width in pixels under `x`.
    pub fn pixel_span(&self, x: &LinearScale) -> (f64, f64) {
        let x0 = x.apply(self.start);
        (x0, x.apply(self.start + self.span) - x0)
    }

    pub fn end(&self) -> f64 {
        self.start + self.span
    }
}

/// Light or dark, by position within the 24-hour cycle. The cycle opens
/// with the dark phase at minute 0.
pub fn phase_at(minute: u32, cfg: &PhaseConfig) -> PhaseKind {
    let day = cfg.day_minutes().max(1);
    if minute % day < cfg.cycle_minutes {
        PhaseKind::Dark
    } else {
        PhaseKind::Light
    }
}

/// Bands for `mode` over a recording whose last sample is at `last_minute`.
///
/// Light and dark bands repeat every day for as long as they start inside the
/// recording. Estrus windows are only shown when they fit completely.
pub fn phase_bands(mode: PhaseMode, last_minute: u32, cfg: &PhaseConfig) -> Vec<PhaseBand> {
    let day = cfg.day_minutes();
    let (first, step, span, kind) = match mode {
        PhaseMode::Dark => (0, day, cfg.cycle_minutes, PhaseKind::Dark),
        PhaseMode::Light => (cfg.cycle_minutes, day, cfg.cycle_minutes, PhaseKind::Light),
        PhaseMode::Estrus => (cfg.estrus_start, cfg.estrus_period, cfg.estrus_span, PhaseKind::Estrus),
    };
    if step == 0 || span == 0 {
        return Vec::new();
    }

    (first..=last_minute)
        .step_by(step as usize)
        .filter(|&s| kind != PhaseKind::Estrus || s.saturating_add(span) <= last_minute)
        .map(|s| PhaseBand { start: s as f64, span: span as f64, kind })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoom::ZoomTransform;

    const LAST: u32 = 20159;

    #[test]
    fn test_estrus_bands_on_two_week_recording() {
        let bands = phase_bands(PhaseMode::Estrus, LAST, &PhaseConfig::default());
        let starts: Vec<f64> = bands.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![1440.0, 7200.0, 12960.0]);
        assert!(bands.iter().all(|b| b.span == 1440.0 && b.kind == PhaseKind::Estrus));
    }

    #[test]
    fn test_dark_and_light_band_counts() {
        let cfg = PhaseConfig::default();
        for n in [1u32, 719, 720, 1439, 1440, 1441, 5000, 20160] {
            let expected = n.div_ceil(1440) as i64;
            for mode in [PhaseMode::Dark, PhaseMode::Light] {
                let count = phase_bands(mode, n - 1, &cfg).len() as i64;
                assert!((count - expected).abs() <= 1, "{mode:?} n={n}: {count} vs {expected}");
            }
        }
        assert_eq!(phase_bands(PhaseMode::Dark, LAST, &cfg).len(), 14);
        assert_eq!(phase_bands(PhaseMode::Light, LAST, &cfg).len(), 14);
    }

    #[test]
    fn test_dark_bands_start_at_zero_light_at_half_day() {
        let cfg = PhaseConfig::default();
        let dark = phase_bands(PhaseMode::Dark, LAST, &cfg);
        let light = phase_bands(PhaseMode::Light, LAST, &cfg);
        assert_eq!(dark[0].start, 0.0);
        assert_eq!(dark[1].start, 1440.0);
        assert_eq!(light[0].start, 720.0);
        assert!(dark.iter().chain(&light).all(|b| b.span == 720.0));
    }

    #[test]
    fn test_bands_are_deterministic() {
        let cfg = PhaseConfig::default();
        for mode in PhaseMode::ALL {
            assert_eq!(phase_bands(mode, LAST, &cfg), phase_bands(mode, LAST, &cfg));
        }
    }

    #[test]
    fn test_stored_band_under_zoom_matches_direct_computation() {
        let base = LinearScale::new((0.0, LAST as f64), (0.0, 890.0));
        let bands = phase_bands(PhaseMode::Light, LAST, &PhaseConfig::default());
        for k in [1.0, 1.5, 4.0, 12.5, 20.0] {
            let t = ZoomTransform { k, x: -(k - 1.0) * 300.0 };
            let zx = t.rescale(&base);
            for band in &bands {
                let (x0, w) = band.pixel_span(&zx);
                let direct_x0 = t.apply_x(base.apply(band.start));
                let direct_x1 = t.apply_x(base.apply(band.end()));
                assert!((x0 - direct_x0).abs() < 1e-6);
                assert!((w - (direct_x1 - direct_x0)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_oversized_constants_do_not_overflow() {
        let huge = PhaseConfig { cycle_minutes: u32::MAX, estrus_span: u32::MAX, ..PhaseConfig::default() };
        assert_eq!(huge.day_minutes(), u32::MAX);
        assert!(phase_bands(PhaseMode::Estrus, LAST, &huge).is_empty());
        let dark = phase_bands(PhaseMode::Dark, LAST, &huge);
        assert_eq!(dark.len(), 1);
        assert_eq!(phase_at(LAST, &huge), PhaseKind::Dark);
    }

    #[test]
    fn test_phase_at() {
        let cfg = PhaseConfig::default();
        assert_eq!(phase_at(0, &cfg), PhaseKind::Dark);
        assert_eq!(phase_at(719, &cfg), PhaseKind::Dark);
        assert_eq!(phase_at(720, &cfg), PhaseKind::Light);
        assert_eq!(phase_at(1439, &cfg), PhaseKind::Light);
        assert_eq!(phase_at(1440, &cfg), PhaseKind::Dark);
    }

    #[test]
    fn test_mode_attr_round_trip() {
        for mode in PhaseMode::ALL {
            assert_eq!(PhaseMode::from_attr(mode.as_str()), Some(mode));
        }
        assert_eq!(PhaseMode::from_attr("dusk"), None);
    }
}
