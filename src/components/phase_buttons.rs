use leptos::prelude::*;
use mousegram_core::phase::PhaseMode;
use mousegram_core::scale::AxisUnit;
use mousegram_core::Measurement;
use crate::state::AppState;

fn btn_class(active: bool) -> &'static str {
    if active { "btn active" } else { "btn" }
}

/// Light / Dark / Estrus shading for one panel.
#[component]
pub fn ModeButtons(measurement: Measurement) -> impl IntoView {
    let state = expect_context::<AppState>();
    let panel = state.panel(measurement);
    let target = measurement.panel_id();

    view! {
        <div class="mode-controls">
            {PhaseMode::ALL.into_iter().map(move |mode| view! {
                <button
                    class=move || btn_class(panel.mode.get() == mode)
                    data-target=target
                    data-mode=mode.as_str()
                    on:click=move |_| {
                        log::debug!("{target}: {} bands", mode.as_str());
                        panel.mode.set(mode);
                    }
                >{mode.button_label()}</button>
            }).collect_view()}
        </div>
    }
}

/// Minutes / days tick labelling for one panel. Zoom is left alone.
#[component]
pub fn ScaleButtons(measurement: Measurement) -> impl IntoView {
    let state = expect_context::<AppState>();
    let panel = state.panel(measurement);
    let target = measurement.panel_id();

    view! {
        <div class="scale-controls" data-target=target>
            {AxisUnit::ALL.into_iter().map(move |unit| view! {
                <button
                    class=move || btn_class(panel.unit.get() == unit)
                    data-scale=unit.as_str()
                    on:click=move |_| {
                        log::debug!("{target}: axis in {}", unit.as_str());
                        panel.unit.set(unit);
                    }
                >{unit.button_label()}</button>
            }).collect_view()}
        </div>
    }
}
