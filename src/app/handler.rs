//! Input handling: maps key events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;
use crate::core::metric::Metric;

use super::settings::SETTINGS_ITEMS;
use super::state::{ActiveView, AppState};

/// Bars skipped by PageUp / PageDown on the state chart.
const PAGE: isize = 10;

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Dashboard => handle_dashboard_key(state, key),
        ActiveView::MetricSelector => handle_selector_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
    }
}

/// `1`..`4` pick a metric directly, in selector order.
fn digit_metric(key: KeyEvent) -> Option<Metric> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let n = c.to_digit(10)? as usize;
    n.checked_sub(1).and_then(|i| Metric::ALL.get(i)).copied()
}

fn apply_metric(state: &mut AppState, metric: Metric) {
    state.select_metric(metric);
    state.status_message = Some(format!("Métrica: {}", metric.label()));
}

// ── Dashboard (configurable bindings) ───────────────────────────

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) {
    if let Some(metric) = digit_metric(key) {
        apply_metric(state, metric);
        return;
    }

    match key.code {
        KeyCode::PageUp => state.scroll_states(-PAGE),
        KeyCode::PageDown => state.scroll_states(PAGE),
        KeyCode::Home => state.state_scroll = 0,
        KeyCode::End => state.scroll_states(isize::MAX),
        KeyCode::Esc => state.status_message = None,
        _ => {
            if let Some(action) = state.config.match_key(key) {
                dispatch_action(state, action);
            }
        }
    }
}

fn dispatch_action(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSelector => {
            state.selector_highlight = state.metric.index();
            state.active_view = ActiveView::MetricSelector;
        }
        Action::NextMetric => {
            let next = state.metric.next();
            apply_metric(state, next);
        }
        Action::PrevMetric => {
            let prev = state.metric.prev();
            apply_metric(state, prev);
        }
        Action::ScrollUp => state.scroll_states(-1),
        Action::ScrollDown => state.scroll_states(1),
        Action::OpenSettings => {
            state.settings_selected = 0;
            state.active_view = ActiveView::SettingsMenu;
        }
    }
}

// ── Metric dropdown ─────────────────────────────────────────────

fn handle_selector_key(state: &mut AppState, key: KeyEvent) {
    let count = Metric::ALL.len();

    if let Some(metric) = digit_metric(key) {
        apply_metric(state, metric);
        state.active_view = ActiveView::Dashboard;
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selector_highlight = (state.selector_highlight + count - 1) % count;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selector_highlight = (state.selector_highlight + 1) % count;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let metric = Metric::ALL[state.selector_highlight.min(count - 1)];
            if metric != state.metric {
                apply_metric(state, metric);
            }
            state.active_view = ActiveView::Dashboard;
        }
        // Not clearable: closing keeps the current metric.
        KeyCode::Esc | KeyCode::Char('q') => {
            state.selector_highlight = state.metric.index();
            state.active_view = ActiveView::Dashboard;
        }
        _ => {}
    }
}

// ── Settings menu ───────────────────────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    let count = SETTINGS_ITEMS.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected + 1 < count {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                item.activate(state);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Dashboard;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::dataset::Dataset;

    fn state() -> AppState {
        AppState::new(Dataset::builtin().unwrap(), Metric::Deaths, AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn digits_pick_metrics_and_resort() {
        let mut s = state();
        press(&mut s, KeyCode::Char('4'));
        assert_eq!(s.metric, Metric::TotalCost);
        assert_eq!(s.region_chart.metric, Metric::TotalCost);
        assert_eq!(s.state_chart.bars[0].label, "Sao Paulo");

        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.metric, Metric::Hospitalizations);

        press(&mut s, KeyCode::Char('0'));
        press(&mut s, KeyCode::Char('9'));
        assert_eq!(s.metric, Metric::Hospitalizations);
    }

    #[test]
    fn arrows_cycle_metrics() {
        let mut s = state();
        press(&mut s, KeyCode::Right);
        assert_eq!(s.metric, Metric::MortalityRate);
        press(&mut s, KeyCode::Left);
        press(&mut s, KeyCode::Left);
        assert_eq!(s.metric, Metric::Hospitalizations);
    }

    #[test]
    fn selector_enter_applies_highlight() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.active_view, ActiveView::MetricSelector);
        assert_eq!(s.selector_highlight, Metric::Deaths.index());

        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.active_view, ActiveView::Dashboard);
        assert_eq!(s.metric, Metric::TotalCost);
        assert_eq!(s.state_chart.title, "Custo Total (R$) por Estado (Top 27)");
    }

    #[test]
    fn selector_escape_keeps_the_metric() {
        let mut s = state();
        press(&mut s, KeyCode::Char('m'));
        press(&mut s, KeyCode::Up);
        press(&mut s, KeyCode::Esc);
        assert_eq!(s.active_view, ActiveView::Dashboard);
        assert_eq!(s.metric, Metric::Deaths);
        assert_eq!(s.selector_highlight, Metric::Deaths.index());
    }

    #[test]
    fn selector_wraps_around() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Up);
        press(&mut s, KeyCode::Up);
        assert_eq!(s.selector_highlight, Metric::ALL.len() - 1);
    }

    #[test]
    fn q_in_selector_closes_instead_of_quitting() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('q'));
        assert!(!s.should_quit);
        press(&mut s, KeyCode::Char('q'));
        assert!(s.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut s = state();
        press(&mut s, KeyCode::Char('?'));
        assert_eq!(s.active_view, ActiveView::SettingsMenu);
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn state_chart_scrolls() {
        let mut s = state();
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        assert_eq!(s.state_scroll, 2);
        press(&mut s, KeyCode::PageDown);
        assert_eq!(s.state_scroll, 12);
        press(&mut s, KeyCode::End);
        assert_eq!(s.state_scroll, 26);
        press(&mut s, KeyCode::Home);
        assert_eq!(s.state_scroll, 0);
        press(&mut s, KeyCode::Up);
        assert_eq!(s.state_scroll, 0);
    }

    #[test]
    fn settings_items_change_config_in_memory() {
        let mut s = state();
        press(&mut s, KeyCode::Char('?'));

        press(&mut s, KeyCode::Enter);
        assert_eq!(s.config.default_metric, Metric::MortalityRate);

        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Enter);
        assert!(!s.config.value_labels);

        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.config.bar_gap, 1);
        assert_eq!(s.status_message.as_deref(), Some("Espaço entre barras: 1"));

        press(&mut s, KeyCode::Esc);
        assert_eq!(s.active_view, ActiveView::Dashboard);
        // Changing the default never touches the live metric.
        assert_eq!(s.metric, Metric::Deaths);
    }

    #[test]
    fn settings_persist_when_a_path_is_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut s = state();
        s.config_path = Some(path.clone());

        press(&mut s, KeyCode::Char('?'));
        press(&mut s, KeyCode::Enter);

        assert_eq!(AppConfig::load_from(&path).default_metric, Metric::MortalityRate);
    }
}
