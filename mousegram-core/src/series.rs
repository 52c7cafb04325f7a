use std::ops::Range;
use crate::types::{Measurement, Sample, Sex};

/// A per-minute series of female/male means, sorted by minute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[0].minute <= w[1].minute));
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn last_minute(&self) -> Option<u32> {
        self.samples.last().map(|s| s.minute)
    }

    /// First and last minute.
    pub fn minute_extent(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.minute as f64, last.minute as f64))
    }

    /// Min and max of one sex's values, ignoring `NaN`.
    pub fn value_extent(&self, sex: Sex) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| s.value(sex))
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Index of the sample at or before `minute` (floor semantics), clamped
    /// to the first sample when `minute` precedes the recording.
    pub fn floor_index(&self, minute: f64) -> Option<usize> {
        if self.samples.is_empty() {
            return None;
        }
        let after = self.samples.partition_point(|s| (s.minute as f64) <= minute);
        Some(after.saturating_sub(1))
    }

    pub fn nearest(&self, minute: f64) -> Option<&Sample> {
        self.floor_index(minute).map(|i| &self.samples[i])
    }

    /// Index range of samples whose minute lies in `[lo, hi]`, widened by one
    /// sample on each side so a clipped line still reaches the plot edges.
    pub fn visible_range(&self, lo: f64, hi: f64) -> Range<usize> {
        let start = self.samples.partition_point(|s| (s.minute as f64) < lo);
        let end = self.samples.partition_point(|s| (s.minute as f64) <= hi);
        start.saturating_sub(1)..(end + 1).min(self.samples.len())
    }
}

/// Both measurements of one recording. Owned once at the top of the app and
/// lent to the panels and the scatter drill-down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub activity: Series,
    pub temperature: Series,
}

impl Session {
    pub fn series(&self, measurement: Measurement) -> &Series {
        match measurement {
            Measurement::Activity => &self.activity,
            Measurement::Temperature => &self.temperature,
        }
    }

    /// Number of whole or partial days covered by the activity recording.
    pub fn recorded_days(&self, day_minutes: u32) -> u32 {
        let n = self.activity.len() as u32;
        if day_minutes == 0 {
            return 0;
        }
        n.div_ceil(day_minutes)
    }
}
