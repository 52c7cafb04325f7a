use leptos::prelude::*;
use crate::state::AppState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let summary = move || {
        let session = state.session.get()?;
        let day_minutes = state.config.with(|c| c.phases.day_minutes());
        Some(format!(
            "{} min · {} days",
            session.activity.len(),
            session.recorded_days(day_minutes)
        ))
    };

    view! {
        <div class="toolbar">
            <span class="toolbar-brand"><b>"mouse"</b><i>"gram"</i></span>
            <div style="flex: 1;"></div>
            <span class="toolbar-summary">{summary}</span>
            <span class="toolbar-hint">"Scroll to zoom · drag to pan · Ctrl/⌘-click for scatter"</span>
        </div>
    }
}
