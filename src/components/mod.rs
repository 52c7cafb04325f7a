pub mod app;
pub mod panel;
pub mod phase_buttons;
pub mod pinch;
pub mod scatter_dialog;
pub mod toolbar;
pub mod tooltip;
