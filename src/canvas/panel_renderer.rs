use web_sys::CanvasRenderingContext2d;
use mousegram_core::layout::{PanelScales, PanelView};
use mousegram_core::phase::PhaseBand;
use mousegram_core::scale::AxisUnit;
use mousegram_core::{AppConfig, Sex};
use super::{axis, colors};

/// Everything a panel draw needs besides the view itself.
pub struct PanelFrame<'a> {
    pub bands: &'a [PhaseBand],
    pub unit: AxisUnit,
    pub recorded_days: u32,
    pub config: &'a AppConfig,
}

/// Draw one full panel: bands, both rows, axes and titles. Coordinates are
/// logical (the context is already scaled for the device).
pub fn draw_panel(ctx: &CanvasRenderingContext2d, view: &PanelView<'_>, frame: &PanelFrame<'_>) {
    let layout = view.layout();
    let palette = &frame.config.palette;
    let (iw, ih) = (layout.inner_width(), layout.inner_height());

    ctx.set_fill_style_str(colors::BACKGROUND);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    ctx.save();
    let _ = ctx.translate(layout.margin.left, layout.margin.top);

    // Bands and lines stay inside the plot area while zoomed.
    ctx.save();
    ctx.begin_path();
    ctx.rect(0.0, 0.0, iw, ih);
    ctx.clip();

    for band in view.band_rects(frame.bands) {
        ctx.set_fill_style_str(colors::phase_fill(band.kind, palette));
        ctx.fill_rect(band.x, 0.0, band.width, band.height);
    }

    ctx.set_line_width(colors::LINE_WIDTH);
    ctx.set_line_join("round");
    for sex in [Sex::Female, Sex::Male] {
        ctx.save();
        let _ = ctx.translate(0.0, layout.row_offset(sex));
        ctx.set_stroke_style_str(palette.line(sex));
        ctx.begin_path();
        for segment in view.line_segments(sex) {
            let mut points = segment.into_iter();
            if let Some((x, y)) = points.next() {
                ctx.move_to(x, y);
            }
            for (x, y) in points {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
        ctx.restore();
    }
    ctx.restore();

    for sex in [Sex::Female, Sex::Male] {
        ctx.save();
        let _ = ctx.translate(0.0, layout.row_offset(sex));
        axis::draw_left_axis(ctx, view.y(sex), PanelScales::y_tick_count());
        ctx.set_fill_style_str(colors::TITLE);
        ctx.set_font("600 12px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("alphabetic");
        let _ = ctx.fill_text(sex.row_title(), iw / 2.0, -6.0);
        ctx.restore();
    }

    let day_minutes = frame.config.phases.day_minutes() as f64;
    let ticks = frame.unit.ticks(view.x(), day_minutes);
    axis::draw_bottom_axis(ctx, view.x(), &ticks, ih, &frame.unit.axis_label(frame.recorded_days));

    ctx.restore();
}

/// Overlay canvas: just the hover cursor.
pub fn draw_cursor(ctx: &CanvasRenderingContext2d, layout: &mousegram_core::config::Layout, px: Option<f64>) {
    ctx.clear_rect(0.0, 0.0, layout.width, layout.height);
    let Some(px) = px else { return };
    if px < 0.0 || px > layout.inner_width() {
        return;
    }
    let x = layout.margin.left + px.round() + 0.5;
    ctx.set_stroke_style_str(colors::CURSOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x, layout.margin.top);
    ctx.line_to(x, layout.margin.top + layout.inner_height());
    ctx.stroke();
}
