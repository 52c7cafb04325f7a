use crate::config::Layout;
use crate::phase::{PhaseBand, PhaseKind};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::types::{Measurement, Sample, Sex};
use crate::zoom::ZoomTransform;

const Y_TICKS: usize = 4;

/// The unzoomed scales of one panel. Built once per series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelScales {
    pub x: LinearScale,
    pub female: LinearScale,
    pub male: LinearScale,
}

impl PanelScales {
    pub fn new(series: &Series, measurement: Measurement, layout: &Layout, temperature_padding: f64) -> Self {
        let x_domain = series.minute_extent().unwrap_or((0.0, 0.0));
        let x = LinearScale::new(x_domain, (0.0, layout.inner_width()));
        let y = |sex: Sex| {
            let (lo, hi) = series.value_extent(sex).unwrap_or((0.0, 1.0));
            let domain = if measurement.zero_based() {
                (0.0, hi)
            } else {
                (lo - temperature_padding, hi + temperature_padding)
            };
            LinearScale::new(domain, (layout.row_height(), 0.0)).nice(10)
        };
        Self { x, female: y(Sex::Female), male: y(Sex::Male) }
    }

    pub fn y(&self, sex: Sex) -> &LinearScale {
        match sex {
            Sex::Female => &self.female,
            Sex::Male => &self.male,
        }
    }

    pub fn y_tick_count() -> usize {
        Y_TICKS
    }
}

/// A band placed in plot-area pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandRect {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub kind: PhaseKind,
}

/// What the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub minute: f64,
    /// Cursor position in plot-area pixels.
    pub px: f64,
    pub sample: Sample,
}

/// One panel as currently displayed: base scales seen through the panel's
/// zoom transform. Everything that maps between pixels and minutes goes
/// through [`x`](Self::x), so lines, bands, ticks, hover and drill-down stay
/// in agreement.
#[derive(Clone, Copy, Debug)]
pub struct PanelView<'a> {
    series: &'a Series,
    scales: &'a PanelScales,
    layout: &'a Layout,
    x: LinearScale,
}

impl<'a> PanelView<'a> {
    pub fn new(series: &'a Series, scales: &'a PanelScales, layout: &'a Layout, transform: ZoomTransform) -> Self {
        Self { series, scales, layout, x: transform.rescale(&scales.x) }
    }

    pub fn x(&self) -> &LinearScale {
        &self.x
    }

    pub fn y(&self, sex: Sex) -> &LinearScale {
        self.scales.y(sex)
    }

    pub fn layout(&self) -> &Layout {
        self.layout
    }

    /// Polylines for one row in row-local pixels. A `NaN` sample ends the
    /// current polyline; only the visible part of the series is emitted.
    pub fn line_segments(&self, sex: Sex) -> Vec<Vec<(f64, f64)>> {
        let (d0, d1) = self.x.domain();
        let range = self.series.visible_range(d0.min(d1), d0.max(d1));
        let y = self.scales.y(sex);

        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for s in &self.series.samples()[range] {
            let v = s.value(sex);
            if v.is_nan() {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                continue;
            }
            current.push((self.x.apply(s.minute as f64), y.apply(v)));
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Light/dark bands fill the whole plot height; estrus bands the female row.
    pub fn band_rects(&self, bands: &[PhaseBand]) -> Vec<BandRect> {
        let iw = self.layout.inner_width();
        bands
            .iter()
            .filter_map(|band| {
                let (x, width) = band.pixel_span(&self.x);
                if x + width < 0.0 || x > iw {
                    return None;
                }
                let height = match band.kind {
                    PhaseKind::Estrus => self.layout.row_height(),
                    PhaseKind::Light | PhaseKind::Dark => self.layout.inner_height(),
                };
                Some(BandRect { x, width, height, kind: band.kind })
            })
            .collect()
    }

    /// Minute under a plot-area x coordinate, rounded to a whole minute.
    pub fn minute_at(&self, px: f64) -> f64 {
        self.x.invert(px).round()
    }

    /// Row under a plot-area y coordinate.
    pub fn row_at(&self, py: f64) -> Sex {
        if py < self.layout.row_height() { Sex::Female } else { Sex::Male }
    }

    pub fn hover(&self, px: f64) -> Option<Hover> {
        let minute = self.minute_at(px);
        let sample = *self.series.nearest(minute)?;
        Some(Hover { minute, px: self.x.apply(minute), sample })
    }
}
