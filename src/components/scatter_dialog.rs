use leptos::prelude::*;
use crate::canvas::{self, scatter_renderer};
use crate::state::AppState;

/// Modal scatter of temperature against activity around a ctrl-clicked minute.
#[component]
pub fn ScatterDialog() -> impl IntoView {
    let state = expect_context::<AppState>();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let plot = state.scatter.get();
        let Some(dialog) = dialog_ref.get() else { return };
        let Some(plot) = plot else {
            if dialog.open() {
                dialog.close();
            }
            return;
        };

        if let Some(canvas) = canvas_ref.get_untracked() {
            state.config.with_untracked(|config| {
                let size = config.scatter.canvas_size;
                if let Some(ctx) = canvas::prepare(&canvas, size, size) {
                    scatter_renderer::draw_scatter(&ctx, &plot, config);
                }
            });
        }
        if !dialog.open() {
            if let Err(e) = dialog.show_modal() {
                log::error!("Could not open scatter dialog: {e:?}");
            }
        }
    });

    let title = move || state.scatter.with(|p| p.as_ref().map(|p| p.title()).unwrap_or_default());

    view! {
        <dialog
            id="scatterDlg"
            class="scatter-dialog"
            node_ref=dialog_ref
            on:close=move |_| {
                if state.scatter.with_untracked(Option::is_some) {
                    state.scatter.set(None);
                }
            }
        >
            <div class="scatter-header">
                <span id="scatter-title">{title}</span>
                <button id="scatter-close" class="btn" on:click=move |_| state.scatter.set(None)>"Close"</button>
            </div>
            <canvas node_ref=canvas_ref class="scatter-canvas" />
        </dialog>
    }
}
