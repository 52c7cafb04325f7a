use serde::Deserialize;
use crate::error::LoadError;
use crate::types::{Measurement, Sex};

/// Top-level viewer configuration. Every field has a default, so a partial
/// (or absent) `mousegram.json` is fine.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub files: DataFiles,
    pub layout: Layout,
    pub palette: Palette,
    pub phases: PhaseConfig,
    pub zoom: ZoomConfig,
    pub scatter: ScatterConfig,
    /// Degrees added above and below the temperature extent before nicing.
    pub temperature_padding: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            files: DataFiles::default(),
            layout: Layout::default(),
            palette: Palette::default(),
            phases: PhaseConfig::default(),
            zoom: ZoomConfig::default(),
            scatter: ScatterConfig::default(),
            temperature_padding: 0.5,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(text)?;
        let zoom = &config.zoom;
        if zoom.extent() != (zoom.min_scale, zoom.max_scale) {
            log::warn!("Zoom limits {}..{} adjusted to {:?}", zoom.min_scale, zoom.max_scale, zoom.extent());
        }
        Ok(config)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataFiles {
    pub female_activity: String,
    pub male_activity: String,
    pub female_temperature: String,
    pub male_temperature: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            female_activity: "Fem_Act.csv".into(),
            male_activity: "Male_Act.csv".into(),
            female_temperature: "Fem_Temp.csv".into(),
            male_temperature: "Male_Temp.csv".into(),
        }
    }
}

impl DataFiles {
    pub fn url(&self, measurement: Measurement, sex: Sex) -> &str {
        match (measurement, sex) {
            (Measurement::Activity, Sex::Female) => &self.female_activity,
            (Measurement::Activity, Sex::Male) => &self.male_activity,
            (Measurement::Temperature, Sex::Female) => &self.female_temperature,
            (Measurement::Temperature, Sex::Male) => &self.male_temperature,
        }
    }

    /// Fetch order: female/male activity, then female/male temperature.
    pub fn all(&self) -> [&str; 4] {
        [
            &self.female_activity,
            &self.male_activity,
            &self.female_temperature,
            &self.male_temperature,
        ]
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 20.0, right: 20.0, bottom: 40.0, left: 50.0 }
    }
}

/// Logical size of a panel canvas and the placement of its two rows.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
    /// Subtracted from half the inner height to get one row's height.
    pub row_inset: f64,
    /// Vertical distance between the bottom of the female row and the male row.
    pub row_gap: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 420.0,
            margin: Margins::default(),
            row_inset: 20.0,
            row_gap: 40.0,
        }
    }
}

impl Layout {
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn row_height(&self) -> f64 {
        self.inner_height() / 2.0 - self.row_inset
    }

    /// Top of the given row, in plot-area coordinates.
    pub fn row_offset(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Female => 0.0,
            Sex::Male => self.row_height() + self.row_gap,
        }
    }

    /// Map a pointer position in client pixels to plot-area coordinates,
    /// given the on-screen bounding box of a canvas drawn at this layout's
    /// logical size.
    pub fn client_to_plot(
        &self,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
    ) -> (f64, f64) {
        let sx = if rect_width > 0.0 { self.width / rect_width } else { 1.0 };
        let sy = if rect_height > 0.0 { self.height / rect_height } else { 1.0 };
        (
            (client_x - rect_left) * sx - self.margin.left,
            (client_y - rect_top) * sy - self.margin.top,
        )
    }

    pub fn contains_plot_point(&self, px: f64, py: f64) -> bool {
        px >= 0.0 && px <= self.inner_width() && py >= 0.0 && py <= self.inner_height()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub female: String,
    pub male: String,
    pub light: String,
    pub dark: String,
    pub estrus: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            female: "#d1495b".into(),
            male: "#006d77".into(),
            light: "rgba(255,240,120,.35)".into(),
            dark: "rgba(0,0,0,.12)".into(),
            estrus: "rgba(233,30,99,.28)".into(),
        }
    }
}

impl Palette {
    pub fn line(&self, sex: Sex) -> &str {
        match sex {
            Sex::Female => &self.female,
            Sex::Male => &self.male,
        }
    }
}

/// Cycle constants, all in minutes.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhaseConfig {
    /// Length of one light or dark phase (half a day).
    pub cycle_minutes: u32,
    pub estrus_start: u32,
    pub estrus_period: u32,
    pub estrus_span: u32,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            cycle_minutes: 720,
            estrus_start: 1440,
            estrus_period: 5760,
            estrus_span: 1440,
        }
    }
}

impl PhaseConfig {
    pub fn day_minutes(&self) -> u32 {
        self.cycle_minutes.saturating_mul(2)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { min_scale: 1.0, max_scale: 20.0 }
    }
}

impl ZoomConfig {
    /// `(min, max)` in ascending order. Non-finite or non-positive limits
    /// fall back to the defaults.
    pub fn extent(&self) -> (f64, f64) {
        let (a, b) = (self.min_scale, self.max_scale);
        if a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0 {
            (a.min(b), a.max(b))
        } else {
            let d = Self::default();
            (d.min_scale, d.max_scale)
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    /// Minutes on either side of the clicked minute.
    pub half_window: u32,
    /// Logical canvas size of the drill-down (square).
    pub canvas_size: f64,
    /// Side of the square plot area inside the canvas.
    pub plot_size: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self { half_window: 360, canvas_size: 420.0, plot_size: 360.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_panel_geometry() {
        let layout = Layout::default();
        assert_eq!(layout.inner_width(), 890.0);
        assert_eq!(layout.inner_height(), 360.0);
        assert_eq!(layout.row_height(), 160.0);
        assert_eq!(layout.row_offset(Sex::Male), 200.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{ "files": { "female_activity": "f.csv" }, "zoom": { "max_scale": 40 } }"#)
            .unwrap();
        assert_eq!(cfg.files.female_activity, "f.csv");
        assert_eq!(cfg.files.male_activity, "Male_Act.csv");
        assert_eq!(cfg.zoom.max_scale, 40.0);
        assert_eq!(cfg.zoom.min_scale, 1.0);
        assert_eq!(cfg.phases, PhaseConfig::default());
    }

    #[test]
    fn test_empty_object_is_default_config() {
        let cfg = AppConfig::from_json("{}").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.temperature_padding, 0.5);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = AppConfig::from_json("{ files: ").unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn test_client_to_plot_scales_css_size() {
        let layout = Layout::default();
        // Canvas shown at half its logical size.
        let (px, py) = layout.client_to_plot(100.0 + 240.0, 50.0 + 105.0, 100.0, 50.0, 480.0, 210.0);
        assert!((px - (480.0 - 50.0)).abs() < 1e-9);
        assert!((py - (210.0 - 20.0)).abs() < 1e-9);
    }
}
