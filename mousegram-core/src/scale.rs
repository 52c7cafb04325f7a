// ── Linear scale ──────────────────────────────────────────────────────────

/// A continuous linear map from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Data value → pixel. A degenerate domain maps everything to the middle
    /// of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel → data value.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Extend the domain outward to round values so that roughly `count`
    /// ticks land on its ends.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        if !(start.is_finite() && stop.is_finite()) || start == stop {
            return self;
        }
        let mut prestep = f64::NAN;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Spacing between the values returned by [`ticks`](Self::ticks).
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count as f64)
    }
}

// ── Tick generation ───────────────────────────────────────────────────────

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Returns (i1, i2, inc). A negative `inc` means the step is `1 / -inc`,
/// which keeps sub-unit ticks exact.
fn tick_params(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        let mut i1 = (start * inv).round();
        let mut i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inv)
    } else {
        let step = 10f64.powf(power) * factor;
        let mut i1 = (start / step).round();
        let mut i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        (i1, i2, step)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_params(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_params(start, stop, count).2
}

pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    if lo == hi {
        return 0.0;
    }
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Roughly `count` round values spanning `[start, stop]`, ascending.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_params(lo, hi, count);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

// ── Labels ────────────────────────────────────────────────────────────────

/// Decimal places needed to tell ticks `step` apart.
fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() || step >= 1.0 {
        0
    } else {
        (-step.log10().floor()).max(0.0) as usize
    }
}

/// Format with a fixed number of decimals and comma thousands separators.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Label for a tick value, with just enough precision for the tick spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    format_grouped(value, precision_for_step(step))
}

// ── Axis units ────────────────────────────────────────────────────────────

/// How the time axis is labelled. Positions are always in minutes; the unit
/// only decides where ticks go and what they say.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisUnit {
    #[default]
    Minutes,
    Days,
}

/// A labelled tick. For time axes `value` is in minutes.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Plain numeric ticks with thousands separators.
pub fn numeric_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|v| Tick { value: v, label: format_tick(v, step) })
        .collect()
}

impl AxisUnit {
    pub const ALL: [AxisUnit; 2] = [AxisUnit::Days, AxisUnit::Minutes];

    /// Value of the `data-scale` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            AxisUnit::Minutes => "minutes",
            AxisUnit::Days => "days",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "minutes" => Some(AxisUnit::Minutes),
            "days" => Some(AxisUnit::Days),
            _ => None,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            AxisUnit::Minutes => "Minutes",
            AxisUnit::Days => "Days",
        }
    }

    pub fn tick_count(self) -> usize {
        match self {
            AxisUnit::Minutes => 10,
            AxisUnit::Days => 14,
        }
    }

    pub fn axis_label(self, recorded_days: u32) -> String {
        match self {
            AxisUnit::Minutes => "Minutes (0 = start)".to_string(),
            AxisUnit::Days => format!("Days (1-{})", recorded_days.max(1)),
        }
    }

    /// Ticks for the visible part of `x`, positioned in minutes.
    pub fn ticks(self, x: &LinearScale, day_minutes: f64) -> Vec<Tick> {
        let (d0, d1) = x.domain();
        match self {
            AxisUnit::Minutes => numeric_ticks(x, self.tick_count()),
            AxisUnit::Days => {
                let count = self.tick_count() as f64;
                let (a, b) = (d0 / day_minutes, d1 / day_minutes);
                let step = tick_step(a, b, count);
                ticks(a, b, count)
                    .into_iter()
                    .map(|day| Tick {
                        value: day * day_minutes,
                        label: format!("Day {}", format_tick(day + 1.0, step)),
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_apply_and_invert_are_inverse() {
        let s = LinearScale::new((0.0, 20159.0), (0.0, 890.0));
        assert!(close(s.apply(0.0), 0.0));
        assert!(close(s.apply(20159.0), 890.0));
        assert!(close(s.invert(s.apply(1234.0)), 1234.0));
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((5.0, 5.0), (160.0, 0.0));
        assert!(close(s.apply(5.0), 80.0));
    }

    #[test]
    fn test_reversed_range_for_y_axis() {
        let s = LinearScale::new((0.0, 10.0), (160.0, 0.0));
        assert!(close(s.apply(10.0), 0.0));
        assert!(close(s.apply(0.0), 160.0));
        assert!(close(s.invert(80.0), 5.0));
    }

    #[test]
    fn test_nice_rounds_outward() {
        let s = LinearScale::new((0.0, 97.3), (0.0, 1.0)).nice(10);
        assert_eq!(s.domain(), (0.0, 100.0));
        let s = LinearScale::new((35.87, 38.42), (0.0, 1.0)).nice(10);
        let (a, b) = s.domain();
        assert!(close(a, 35.8) && close(b, 38.6), "got {a}..{b}");
    }

    #[test]
    fn test_nice_keeps_already_round_domain() {
        let s = LinearScale::new((0.0, 5.0), (0.0, 1.0)).nice(10);
        assert_eq!(s.domain(), (0.0, 5.0));
        let s = LinearScale::new((4.5, 5.5), (0.0, 1.0)).nice(10);
        let (a, b) = s.domain();
        assert!(close(a, 4.5) && close(b, 5.5));
    }

    #[test]
    fn test_ticks_are_round_and_inside_domain() {
        assert_eq!(ticks(0.0, 20159.0, 10.0), vec![
            0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10000.0, 12000.0, 14000.0, 16000.0, 18000.0, 20000.0,
        ]);
        let t = ticks(0.0, 1.0, 5.0);
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_degenerate_inputs() {
        assert_eq!(ticks(3.0, 3.0, 10.0), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0.0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10.0).is_empty());
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(20160.0, 0), "20,160");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1234567.5, 1), "1,234,567.5");
        assert_eq!(format_grouped(-1500.0, 0), "-1,500");
        assert_eq!(format_grouped(-0.0, 0), "0");
    }

    #[test]
    fn test_format_tick_precision_follows_step() {
        assert_eq!(format_tick(36.5, 0.5), "36.5");
        assert_eq!(format_tick(36.0, 0.5), "36.0");
        assert_eq!(format_tick(12000.0, 2000.0), "12,000");
    }

    #[test]
    fn test_minute_ticks_are_grouped() {
        let x = LinearScale::new((0.0, 20159.0), (0.0, 890.0));
        let t = AxisUnit::Minutes.ticks(&x, 1440.0);
        assert_eq!(t.len(), 11);
        assert_eq!(t[6], Tick { value: 12000.0, label: "12,000".to_string() });
    }

    #[test]
    fn test_day_ticks_are_labelled_from_one() {
        let x = LinearScale::new((0.0, 20159.0), (0.0, 890.0));
        let t = AxisUnit::Days.ticks(&x, 1440.0);
        assert_eq!(t.first().unwrap().label, "Day 1");
        assert_eq!(t.first().unwrap().value, 0.0);
        assert_eq!(t[1].value, 1440.0);
        assert_eq!(t.last().unwrap().label, "Day 14");
    }

    #[test]
    fn test_day_ticks_follow_zoomed_domain() {
        let x = LinearScale::new((1440.0, 2880.0), (0.0, 890.0));
        let t = AxisUnit::Days.ticks(&x, 1440.0);
        assert!(t.iter().all(|t| t.value >= 1440.0 && t.value <= 2880.0));
        assert_eq!(t.first().unwrap().label, "Day 2.0");
        assert!(t.len() > 2);
    }

    #[test]
    fn test_unit_attr_round_trip() {
        for unit in AxisUnit::ALL {
            assert_eq!(AxisUnit::from_attr(unit.as_str()), Some(unit));
        }
        assert_eq!(AxisUnit::from_attr("weeks"), None);
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(AxisUnit::Minutes.axis_label(14), "Minutes (0 = start)");
        assert_eq!(AxisUnit::Days.axis_label(14), "Days (1-14)");
    }
}
