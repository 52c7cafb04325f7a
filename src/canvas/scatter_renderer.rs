use web_sys::CanvasRenderingContext2d;
use mousegram_core::phase::PhaseKind;
use mousegram_core::scale::numeric_ticks;
use mousegram_core::scatter::ScatterPlot;
use mousegram_core::AppConfig;
use super::{axis, colors};

const POINT_RADIUS: f64 = 3.0;
const AXIS_TICKS: usize = 10;
const LEGEND_X: f64 = 300.0;
const LEGEND_Y: f64 = 20.0;

/// Draw the drill-down scatter on a square canvas of `scatter.canvas_size`.
/// The plot sits at the panel margins' top-left offset.
pub fn draw_scatter(ctx: &CanvasRenderingContext2d, plot: &ScatterPlot, config: &AppConfig) {
    let size = config.scatter.canvas_size;
    let side = config.scatter.plot_size;
    let margin = &config.layout.margin;
    let palette = &config.palette;
    let (x, y) = plot.scales(side);

    ctx.set_fill_style_str(colors::BACKGROUND);
    ctx.fill_rect(0.0, 0.0, size, size);

    ctx.save();
    let _ = ctx.translate(margin.left, margin.top);

    axis::draw_left_axis(ctx, &y, AXIS_TICKS);
    axis::draw_bottom_axis(ctx, &x, &numeric_ticks(&x, AXIS_TICKS), side, "Activity (counts)");
    axis::draw_vertical_label(ctx, "Temperature (°C)", -38.0, 0.0, side);

    ctx.set_stroke_style_str(colors::POINT_STROKE);
    ctx.set_line_width(0.4);
    for point in &plot.points {
        if point.activity.is_nan() || point.temperature.is_nan() {
            continue;
        }
        ctx.set_fill_style_str(colors::phase_fill(point.phase, palette));
        ctx.begin_path();
        let _ = ctx.arc(
            x.apply(point.activity),
            y.apply(point.temperature),
            POINT_RADIUS,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
        ctx.stroke();
    }
    ctx.restore();

    draw_legend(ctx, config);
}

fn draw_legend(ctx: &CanvasRenderingContext2d, config: &AppConfig) {
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("start");
    ctx.set_text_baseline("middle");
    ctx.set_line_width(0.4);
    for (i, kind) in [PhaseKind::Light, PhaseKind::Dark].into_iter().enumerate() {
        let top = LEGEND_Y + i as f64 * 16.0;
        ctx.set_fill_style_str(colors::phase_fill(kind, &config.palette));
        ctx.fill_rect(LEGEND_X, top, 10.0, 10.0);
        ctx.set_stroke_style_str(colors::POINT_STROKE);
        ctx.stroke_rect(LEGEND_X, top, 10.0, 10.0);
        ctx.set_fill_style_str(colors::AXIS_TEXT);
        let _ = ctx.fill_text(kind.label(), LEGEND_X + 14.0, top + 5.0);
    }
    ctx.set_text_baseline("alphabetic");
}
