use std::sync::Arc;
use leptos::prelude::*;
use mousegram_core::Measurement;
use crate::components::panel::Panel;
use crate::components::scatter_dialog::ScatterDialog;
use crate::components::toolbar::Toolbar;
use crate::components::tooltip::Tooltip;
use crate::data;
use crate::state::AppState;
use crate::types::LoadStatus;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    wasm_bindgen_futures::spawn_local(async move {
        let config = data::load_config().await;
        state.config.set(config.clone());
        match data::load_session(&config).await {
            Ok(session) => {
                state.session.set(Some(Arc::new(session)));
                state.status.set(LoadStatus::Ready);
            }
            Err(e) => {
                log::error!("Failed to load recordings: {e}");
                state.status.set(LoadStatus::Failed(e.to_string()));
            }
        }
    });

    view! {
        <div class="app">
            <Toolbar />
            <MainArea />
            <Tooltip />
            <ScatterDialog />
        </div>
    }
}

#[component]
fn MainArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="main">
            {move || match state.status.get() {
                LoadStatus::Ready => Measurement::ALL
                    .into_iter()
                    .map(|measurement| view! { <Panel measurement=measurement /> })
                    .collect_view()
                    .into_any(),
                LoadStatus::Loading => view! {
                    <div class="empty-state">"Loading recordings…"</div>
                }.into_any(),
                LoadStatus::Failed(reason) => view! {
                    <div class="empty-state error">{format!("Could not load the recordings: {reason}")}</div>
                }.into_any(),
            }}
        </div>
    }
}
