use web_sys::CanvasRenderingContext2d;
use mousegram_core::scale::{numeric_ticks, LinearScale, Tick};
use super::colors;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TICK_FONT: &str = "10px sans-serif";
const LABEL_FONT: &str = "12px sans-serif";

/// Crisp 1 px lines on integer coordinates.
fn snap(v: f64) -> f64 {
    v.round() + 0.5
}

/// Bottom axis at `y` (already translated into the plot area). Ticks outside
/// `[0, width]` are dropped; `label` is centered below the tick labels.
pub fn draw_bottom_axis(
    ctx: &CanvasRenderingContext2d,
    x: &LinearScale,
    ticks: &[Tick],
    y: f64,
    label: &str,
) {
    let (r0, r1) = x.range();
    let (left, right) = (r0.min(r1), r0.max(r1));
    let y0 = snap(y);

    ctx.set_stroke_style_str(colors::AXIS);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(left, y0 + TICK_SIZE);
    ctx.line_to(left, y0);
    ctx.line_to(right, y0);
    ctx.line_to(right, y0 + TICK_SIZE);
    ctx.stroke();

    ctx.set_fill_style_str(colors::AXIS_TEXT);
    ctx.set_font(TICK_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for tick in ticks {
        let px = x.apply(tick.value);
        if px < left - 0.5 || px > right + 0.5 {
            continue;
        }
        let px = snap(px);
        ctx.begin_path();
        ctx.move_to(px, y0);
        ctx.line_to(px, y0 + TICK_SIZE);
        ctx.stroke();
        let _ = ctx.fill_text(&tick.label, px, y0 + TICK_SIZE + TICK_PADDING);
    }

    ctx.set_font(LABEL_FONT);
    let _ = ctx.fill_text(label, (left + right) / 2.0, y0 + 24.0);
    ctx.set_text_baseline("alphabetic");
}

/// Left axis along x = 0 for a vertical scale.
pub fn draw_left_axis(ctx: &CanvasRenderingContext2d, y: &LinearScale, count: usize) {
    let (r0, r1) = y.range();
    let (top, bottom) = (r0.min(r1), r0.max(r1));
    let x0 = 0.5;

    ctx.set_stroke_style_str(colors::AXIS);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x0 - TICK_SIZE, top);
    ctx.line_to(x0, top);
    ctx.line_to(x0, bottom);
    ctx.line_to(x0 - TICK_SIZE, bottom);
    ctx.stroke();

    ctx.set_fill_style_str(colors::AXIS_TEXT);
    ctx.set_font(TICK_FONT);
    ctx.set_text_align("end");
    ctx.set_text_baseline("middle");
    for tick in numeric_ticks(y, count) {
        let py = snap(y.apply(tick.value));
        ctx.begin_path();
        ctx.move_to(x0 - TICK_SIZE, py);
        ctx.line_to(x0, py);
        ctx.stroke();
        let _ = ctx.fill_text(&tick.label, x0 - TICK_SIZE - TICK_PADDING, py);
    }
    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");
}

/// Axis label rotated to read bottom-to-top, centered on `[top, bottom]`.
pub fn draw_vertical_label(ctx: &CanvasRenderingContext2d, label: &str, x: f64, top: f64, bottom: f64) {
    ctx.save();
    let _ = ctx.translate(x, (top + bottom) / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    ctx.set_fill_style_str(colors::AXIS_TEXT);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(label, 0.0, 0.0);
    ctx.restore();
}
