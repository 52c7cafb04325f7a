use std::sync::Arc;
use leptos::prelude::*;
use mousegram_core::phase::PhaseMode;
use mousegram_core::scale::AxisUnit;
use mousegram_core::scatter::ScatterPlot;
use mousegram_core::zoom::ZoomTransform;
use mousegram_core::{AppConfig, Measurement, Session};
use crate::types::{LoadStatus, TooltipState};

/// Per-panel view state. Each panel zooms, shades and labels independently.
#[derive(Clone, Copy)]
pub struct PanelState {
    pub mode: RwSignal<PhaseMode>,
    pub unit: RwSignal<AxisUnit>,
    pub transform: RwSignal<ZoomTransform>,
    /// Hover cursor in plot-area px.
    pub cursor: RwSignal<Option<f64>>,
}

impl PanelState {
    fn new() -> Self {
        Self {
            mode: RwSignal::new(PhaseMode::default()),
            unit: RwSignal::new(AxisUnit::default()),
            transform: RwSignal::new(ZoomTransform::IDENTITY),
            cursor: RwSignal::new(None),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub config: RwSignal<AppConfig>,
    pub session: RwSignal<Option<Arc<Session>>>,
    pub status: RwSignal<LoadStatus>,
    pub activity: PanelState,
    pub temperature: PanelState,
    pub tooltip: RwSignal<Option<TooltipState>>,
    /// Open drill-down, if any. `None` closes the dialog.
    pub scatter: RwSignal<Option<Arc<ScatterPlot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(AppConfig::default()),
            session: RwSignal::new(None),
            status: RwSignal::new(LoadStatus::Loading),
            activity: PanelState::new(),
            temperature: PanelState::new(),
            tooltip: RwSignal::new(None),
            scatter: RwSignal::new(None),
        }
    }

    pub fn panel(&self, measurement: Measurement) -> PanelState {
        match measurement {
            Measurement::Activity => self.activity,
            Measurement::Temperature => self.temperature,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
