//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::core::{
    chart::{self, ChartSpec},
    dataset::Dataset,
    metric::Metric,
    summary::{self, SummaryCard},
};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    /// The metric dropdown is open.
    MetricSelector,
    SettingsMenu,
}

/// Top-level application state.
pub struct AppState {
    /// The loaded table.  Read-only after startup.
    pub dataset: Dataset,
    /// Headline cards; computed once since they don't depend on the metric.
    pub cards: Vec<SummaryCard>,
    /// Currently charted metric.
    pub metric: Metric,
    pub region_chart: ChartSpec,
    pub state_chart: ChartSpec,
    /// First visible bar of the state chart.
    pub state_scroll: usize,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub active_view: ActiveView,
    pub config: AppConfig,
    /// Where settings changes are written.  `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    /// Highlighted row in the metric dropdown.
    pub selector_highlight: usize,
    /// Highlighted row in the settings menu.
    pub settings_selected: usize,
}

impl AppState {
    pub fn new(dataset: Dataset, metric: Metric, config: AppConfig) -> Self {
        let cards = summary::summary_cards(&dataset);
        let region_chart = chart::region_chart(&dataset, metric);
        let state_chart = chart::state_chart(&dataset, metric);
        Self {
            dataset,
            cards,
            metric,
            region_chart,
            state_chart,
            state_scroll: 0,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            config_path: None,
            selector_highlight: metric.index(),
            settings_selected: 0,
        }
    }

    /// Switch the charted metric, re-sorting and relabelling both charts.
    pub fn select_metric(&mut self, metric: Metric) {
        let t0 = std::time::Instant::now();
        self.metric = metric;
        self.region_chart = chart::region_chart(&self.dataset, metric);
        self.state_chart = chart::state_chart(&self.dataset, metric);
        self.state_scroll = 0;
        self.selector_highlight = metric.index();
        tracing::debug!("select_metric: {:.2?} metric={metric}", t0.elapsed());
    }

    /// Scroll the state chart, keeping at least one bar visible.
    pub fn scroll_states(&mut self, delta: isize) {
        let max = self.state_chart.bars.len().saturating_sub(1);
        self.state_scroll = self.state_scroll.saturating_add_signed(delta).min(max);
    }
}
