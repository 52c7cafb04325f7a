use std::sync::Arc;
use leptos::prelude::*;
use web_sys::{MouseEvent, TouchEvent, WheelEvent};
use mousegram_core::layout::{PanelScales, PanelView};
use mousegram_core::phase::phase_bands;
use mousegram_core::scatter::ScatterPlot;
use mousegram_core::zoom::{ZoomBehavior, ZoomTransform};
use mousegram_core::Measurement;
use crate::canvas::{self, panel_renderer};
use crate::canvas::panel_renderer::PanelFrame;
use crate::components::phase_buttons::{ModeButtons, ScaleButtons};
use crate::components::pinch::{apply_pinch, two_finger_geometry, PinchState};
use crate::state::AppState;
use crate::types::TooltipState;

/// Pointer travel (client px) before a press turns into a pan.
const DRAG_SLOP: f64 = 3.0;

#[derive(Clone, Copy, Debug)]
struct DragState {
    start_client_x: f64,
    start_transform: ZoomTransform,
    moved: bool,
}

/// One chart panel: female row above male row, sharing a zoomable time axis.
#[component]
pub fn Panel(measurement: Measurement) -> impl IntoView {
    let state = expect_context::<AppState>();
    let panel = state.panel(measurement);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let overlay_ref = NodeRef::<leptos::html::Canvas>::new();

    let drag = RwSignal::new(None::<DragState>);
    let pinch = RwSignal::new(None::<PinchState>);
    // Set on mouseup after a pan so the trailing click is not a drill-down.
    let suppress_click = RwSignal::new(false);

    let scales = Memo::new(move |_| {
        let session = state.session.get()?;
        let series = session.series(measurement);
        Some(state.config.with(|c| PanelScales::new(series, measurement, &c.layout, c.temperature_padding)))
    });

    // Redraw effect: data, zoom, shading and unit all feed the base canvas.
    Effect::new(move || {
        let session = state.session.get();
        let scales = scales.get();
        let mode = panel.mode.get();
        let unit = panel.unit.get();
        let transform = panel.transform.get();
        let Some(canvas) = canvas_ref.get() else { return };
        let (Some(session), Some(scales)) = (session, scales) else { return };

        state.config.with(|config| {
            let layout = &config.layout;
            let Some(ctx) = canvas::prepare(&canvas, layout.width, layout.height) else { return };
            let series = session.series(measurement);
            let bands = phase_bands(mode, series.last_minute().unwrap_or(0), &config.phases);
            let view = PanelView::new(series, &scales, layout, transform);
            let frame = PanelFrame {
                bands: &bands,
                unit,
                recorded_days: session.recorded_days(config.phases.day_minutes()),
                config,
            };
            panel_renderer::draw_panel(&ctx, &view, &frame);
        });
    });

    Effect::new(move || {
        let cursor = panel.cursor.get();
        let Some(overlay) = overlay_ref.get() else { return };
        let layout = state.config.with(|c| c.layout);
        if let Some(ctx) = canvas::prepare(&overlay, layout.width, layout.height) {
            panel_renderer::draw_cursor(&ctx, &layout, cursor);
        }
    });

    // ── Coordinate helpers ────────────────────────────────────────────────────

    let layout = move || state.config.with_untracked(|c| c.layout);
    let behavior = move || state.config.with_untracked(|c| ZoomBehavior::new(&c.zoom, c.layout.inner_width()));

    // Client px → plot-area px, honouring CSS scaling of the canvas.
    let plot_point = move |client_x: f64, client_y: f64| -> Option<(f64, f64)> {
        let canvas = overlay_ref.get_untracked()?;
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        Some(layout().client_to_plot(client_x, client_y, rect.left(), rect.top(), rect.width(), rect.height()))
    };

    // Client px distance → logical px distance.
    let logical_dx = move |dx_client: f64| -> f64 {
        let Some(canvas) = overlay_ref.get_untracked() else { return dx_client };
        let w = canvas.get_bounding_client_rect().width();
        if w > 0.0 { dx_client * layout().width / w } else { dx_client }
    };

    // Run `f` against the panel as currently displayed.
    let with_view = move |f: &dyn Fn(&PanelView<'_>)| {
        let Some(session) = state.session.get_untracked() else { return };
        let Some(scales) = scales.get_untracked() else { return };
        let layout = layout();
        let view = PanelView::new(session.series(measurement), &scales, &layout, panel.transform.get_untracked());
        f(&view);
    };

    let clear_hover = move || {
        panel.cursor.set(None);
        state.tooltip.set(None);
    };

    let update_hover = move |ev: &MouseEvent| {
        let Some((px, py)) = plot_point(ev.client_x() as f64, ev.client_y() as f64) else { return };
        if !layout().contains_plot_point(px, py) {
            clear_hover();
            return;
        }
        let (page_x, page_y) = (ev.page_x() as f64, ev.page_y() as f64);
        with_view(&|view| match view.hover(px) {
            Some(hover) => {
                panel.cursor.set(Some(hover.px));
                state.tooltip.set(Some(TooltipState::new(page_x, page_y, &hover)));
            }
            None => clear_hover(),
        });
    };

    let start_drag = move |client_x: f64| {
        drag.set(Some(DragState {
            start_client_x: client_x,
            start_transform: panel.transform.get_untracked(),
            moved: false,
        }));
    };

    // Returns true while the gesture is a pan.
    let continue_drag = move |client_x: f64| -> bool {
        let Some(mut d) = drag.get_untracked() else { return false };
        let dx = client_x - d.start_client_x;
        if !d.moved && dx.abs() <= DRAG_SLOP {
            return false;
        }
        d.moved = true;
        drag.set(Some(d));
        panel.transform.set(behavior().pan(d.start_transform, logical_dx(dx)));
        true
    };

    // ── Mouse handlers ────────────────────────────────────────────────────────

    let on_mousedown = move |ev: MouseEvent| {
        if ev.button() != 0 || state.session.get_untracked().is_none() {
            return;
        }
        ev.prevent_default();
        start_drag(ev.client_x() as f64);
    };

    let on_mousemove = move |ev: MouseEvent| {
        if continue_drag(ev.client_x() as f64) {
            clear_hover();
        } else {
            update_hover(&ev);
        }
    };

    let on_mouseup = move |_: MouseEvent| {
        let moved = drag.get_untracked().is_some_and(|d| d.moved);
        suppress_click.set(moved);
        drag.set(None);
    };

    let on_mouseleave = move |_: MouseEvent| {
        drag.set(None);
        clear_hover();
    };

    let on_click = move |ev: MouseEvent| {
        if suppress_click.get_untracked() {
            suppress_click.set(false);
            return;
        }
        if !(ev.ctrl_key() || ev.meta_key()) {
            return;
        }
        let Some((px, py)) = plot_point(ev.client_x() as f64, ev.client_y() as f64) else { return };
        if !layout().contains_plot_point(px, py) {
            return;
        }
        let Some(session) = state.session.get_untracked() else { return };
        with_view(&|view| {
            let minute = view.minute_at(px) as i64;
            let sex = view.row_at(py);
            let plot = state.config.with_untracked(|c| ScatterPlot::build(&session, minute, sex, &c.scatter, &c.phases));
            log::debug!("{}: drill-down at minute {minute}", measurement.panel_id());
            state.scatter.set(Some(Arc::new(plot)));
        });
    };

    let on_wheel = move |ev: WheelEvent| {
        if state.session.get_untracked().is_none() {
            return;
        }
        let Some((px, _)) = plot_point(ev.client_x() as f64, ev.client_y() as f64) else { return };
        ev.prevent_default();
        let b = behavior();
        let t = b.wheel(panel.transform.get_untracked(), ev.delta_y(), ev.delta_mode(), ev.ctrl_key(), px);
        panel.transform.set(t);
        update_hover(&ev);
    };

    // ── Touch handlers ────────────────────────────────────────────────────────

    let on_touchstart = move |ev: TouchEvent| {
        if state.session.get_untracked().is_none() {
            return;
        }
        let touches = ev.touches();
        match touches.length() {
            1 => {
                if let Some(t) = touches.get(0) {
                    start_drag(t.client_x() as f64);
                }
            }
            2 => {
                ev.prevent_default();
                drag.set(None);
                let Some((mid_client_x, dist)) = two_finger_geometry(&touches) else { return };
                let Some((mid_x, _)) = plot_point(mid_client_x, 0.0) else { return };
                pinch.set(Some(PinchState {
                    initial_dist: dist,
                    initial_transform: panel.transform.get_untracked(),
                    initial_mid_x: mid_x,
                }));
            }
            _ => {}
        }
    };

    let on_touchmove = move |ev: TouchEvent| {
        let touches = ev.touches();
        if let Some(p) = pinch.get_untracked() {
            let Some((mid_client_x, dist)) = two_finger_geometry(&touches) else { return };
            let Some((mid_x, _)) = plot_point(mid_client_x, 0.0) else { return };
            ev.prevent_default();
            panel.transform.set(apply_pinch(&p, dist, mid_x, &behavior()));
            return;
        }
        if touches.length() == 1 {
            if let Some(t) = touches.get(0) {
                if continue_drag(t.client_x() as f64) {
                    ev.prevent_default();
                }
            }
        }
    };

    let on_touchend = move |ev: TouchEvent| {
        let remaining = ev.touches().length();
        if remaining < 2 {
            pinch.set(None);
        }
        if remaining == 0 {
            drag.set(None);
        }
    };

    view! {
        <section class="panel" id=measurement.panel_id()>
            <div class="panel-header">
                <h2>{measurement.y_label()}</h2>
                <div style="flex: 1;"></div>
                <ModeButtons measurement=measurement />
                <ScaleButtons measurement=measurement />
            </div>
            <div class="panel-canvas">
                <canvas node_ref=canvas_ref class="panel-base" />
                <canvas
                    node_ref=overlay_ref
                    class="panel-overlay"
                    on:mousedown=on_mousedown
                    on:mousemove=on_mousemove
                    on:mouseup=on_mouseup
                    on:mouseleave=on_mouseleave
                    on:click=on_click
                    on:wheel=on_wheel
                    on:touchstart=on_touchstart
                    on:touchmove=on_touchmove
                    on:touchend=on_touchend
                    on:touchcancel=on_touchend
                />
            </div>
        </section>
    }
}
