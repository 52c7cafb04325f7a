use std::ops::Range;
use crate::config::{PhaseConfig, ScatterConfig};
use crate::phase::{phase_at, PhaseKind};
use crate::scale::LinearScale;
use crate::series::Session;
use crate::types::Sex;

/// `[center − half, center + half)` clipped to `[0, len)`.
pub fn window(center: i64, half: u32, len: usize) -> Range<usize> {
    let half = half as i64;
    let len = len as i64;
    let start = (center - half).clamp(0, len);
    let end = (center + half).clamp(0, len);
    start as usize..end.max(start) as usize
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    pub minute: u32,
    pub activity: f64,
    pub temperature: f64,
    pub phase: PhaseKind,
}

/// Activity against temperature for one sex around a clicked minute.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
    pub sex: Sex,
    pub center: i64,
    pub points: Vec<ScatterPoint>,
}

impl ScatterPlot {
    pub fn build(session: &Session, center: i64, sex: Sex, scatter: &ScatterConfig, phases: &PhaseConfig) -> Self {
        let len = session.activity.len().min(session.temperature.len());
        let act = &session.activity.samples()[..len];
        let temp = &session.temperature.samples()[..len];
        let points: Vec<ScatterPoint> = window(center, scatter.half_window, len)
            .map(|i| ScatterPoint {
                minute: i as u32,
                activity: act[i].value(sex),
                temperature: temp[i].value(sex),
                phase: phase_at(i as u32, phases),
            })
            .collect();
        log::debug!("Drill-down at minute {center} ({}): {} points", sex.label(), points.len());
        Self { sex, center, points }
    }

    pub fn title(&self) -> String {
        format!("Temperature vs Activity (12-h window) - {}", self.sex.label())
    }

    /// Niced (x = activity, y = temperature) scales over a square plot of
    /// side `size`.
    pub fn scales(&self, size: f64) -> (LinearScale, LinearScale) {
        let extent = |f: fn(&ScatterPoint) -> f64| {
            self.points
                .iter()
                .map(f)
                .filter(|v| !v.is_nan())
                .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                    None => Some((v, v)),
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                })
                .unwrap_or((0.0, 1.0))
        };
        let x = LinearScale::new(extent(|p| p.activity), (0.0, size)).nice(10);
        let y = LinearScale::new(extent(|p| p.temperature), (size, 0.0)).nice(10);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;
    use crate::types::Sample;

    fn session(n: u32) -> Session {
        let act = (0..n).map(|m| Sample { minute: m, female: m as f64, male: -(m as f64) }).collect();
        let temp = (0..n).map(|m| Sample { minute: m, female: 37.0, male: 36.0 }).collect();
        Session { activity: Series::new(act), temperature: Series::new(temp) }
    }

    #[test]
    fn test_window_is_half_open_and_clipped() {
        assert_eq!(window(1000, 360, 20160), 640..1360);
        assert_eq!(window(100, 360, 20160), 0..460);
        assert_eq!(window(20000, 360, 20160), 19640..20160);
        assert_eq!(window(-1000, 360, 20160), 0..0);
        assert_eq!(window(30000, 360, 20160), 20160..20160);
    }

    #[test]
    fn test_points_follow_window_and_phase() {
        let plot = ScatterPlot::build(&session(20160), 1000, Sex::Female, &ScatterConfig::default(), &PhaseConfig::default());
        assert_eq!(plot.points.len(), 720);
        assert_eq!(plot.points[0].minute, 640);
        assert_eq!(plot.points.last().unwrap().minute, 1359);
        for p in &plot.points {
            let dark = (p.minute % 1440) < 720;
            assert_eq!(p.phase == PhaseKind::Dark, dark);
            assert_eq!(p.activity, p.minute as f64);
            assert_eq!(p.temperature, 37.0);
        }
    }

    #[test]
    fn test_clicked_sex_selects_values() {
        let plot = ScatterPlot::build(&session(2000), 500, Sex::Male, &ScatterConfig::default(), &PhaseConfig::default());
        assert!(plot.points.iter().all(|p| p.temperature == 36.0 && p.activity <= 0.0));
        assert_eq!(plot.title(), "Temperature vs Activity (12-h window) - Male");
    }

    #[test]
    fn test_scales_cover_points() {
        let plot = ScatterPlot::build(&session(20160), 1000, Sex::Female, &ScatterConfig::default(), &PhaseConfig::default());
        let (x, y) = plot.scales(360.0);
        let (x0, x1) = x.domain();
        assert!(x0 <= 640.0 && x1 >= 1359.0);
        assert_eq!(y.range(), (360.0, 0.0));
    }

    #[test]
    fn test_empty_window_has_usable_scales() {
        let plot = ScatterPlot::build(&session(10), 5000, Sex::Female, &ScatterConfig::default(), &PhaseConfig::default());
        assert!(plot.points.is_empty());
        let (x, _) = plot.scales(360.0);
        assert_eq!(x.domain(), (0.0, 1.0));
    }
}
