use mousegram_core::config::Palette;
use mousegram_core::phase::PhaseKind;

pub const BACKGROUND: &str = "#fff";
pub const AXIS: &str = "#000";
pub const AXIS_TEXT: &str = "#222";
pub const TITLE: &str = "#333";
pub const CURSOR: &str = "#555";
pub const POINT_STROKE: &str = "#555";

pub const LINE_WIDTH: f64 = 1.2;

/// Band fill for a phase; light and dark are also the scatter point fills.
pub fn phase_fill(kind: PhaseKind, palette: &Palette) -> &str {
    match kind {
        PhaseKind::Light => &palette.light,
        PhaseKind::Dark => &palette.dark,
        PhaseKind::Estrus => &palette.estrus,
    }
}
