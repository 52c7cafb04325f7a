use leptos::prelude::*;
use mousegram_core::Sex;
use crate::state::AppState;
use crate::types::format_reading;

/// Floating readout that follows the pointer over either panel.
#[component]
pub fn Tooltip() -> impl IntoView {
    let state = expect_context::<AppState>();
    let style = move || {
        state.tooltip.with(|t| match t {
            Some(t) => t.style(),
            None => "display: none".to_string(),
        })
    };
    let color = move |sex: Sex| state.config.with(|c| format!("color: {}", c.palette.line(sex)));

    view! {
        <div id="tooltip" class="tooltip" style=style>
            {move || state.tooltip.get().map(|t| view! {
                <b>"Minute:"</b>" "{t.minute_label()}<br/>
                <span style=color(Sex::Female)>{format!("{} {}", Sex::Female.symbol(), format_reading(t.female))}</span><br/>
                <span style=color(Sex::Male)>{format!("{} {}", Sex::Male.symbol(), format_reading(t.male))}</span>
            })}
        </div>
    }
}
