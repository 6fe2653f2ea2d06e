//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No I/O happens here.

pub mod cards;
pub mod chart;
pub mod layout;
pub mod popup;
pub mod selector;
pub mod theme;

use ratatui::{text::Span, widgets::Paragraph, Frame};

use crate::app::state::{ActiveView, AppState};

use self::{
    cards::{CardWidget, Header},
    chart::ChartWidget,
    layout::DashboardLayout,
    popup::SettingsPopup,
    selector::{MetricDropdown, MetricSelector},
    theme::Theme,
};

/// Draw the whole dashboard for the current state.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = DashboardLayout::from_area(area);
    let regions = state.dataset.region_names();

    frame.render_widget(Header, layout.header_area);
    for (card, rect) in state.cards.iter().zip(layout.card_areas) {
        frame.render_widget(CardWidget { card }, rect);
    }

    frame.render_widget(
        MetricSelector {
            metric: state.metric,
            open: state.active_view == ActiveView::MetricSelector,
        },
        layout.selector_area,
    );

    frame.render_widget(
        ChartWidget {
            spec: &state.region_chart,
            regions: &regions,
            scroll: 0,
            value_labels: state.config.value_labels,
            bar_gap: state.config.bar_gap,
        },
        layout.region_chart_area,
    );
    frame.render_widget(
        ChartWidget {
            spec: &state.state_chart,
            regions: &regions,
            scroll: state.state_scroll,
            value_labels: state.config.value_labels,
            bar_gap: state.config.bar_gap,
        },
        layout.state_chart_area,
    );

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(Span::raw(status_text)).style(Theme::status_bar_style()),
        layout.status_area,
    );

    match state.active_view {
        ActiveView::MetricSelector => frame.render_widget(
            MetricDropdown {
                anchor: layout.selector_area,
                highlight: state.selector_highlight,
                current: state.metric,
            },
            area,
        ),
        ActiveView::SettingsMenu => frame.render_widget(SettingsPopup { state }, area),
        ActiveView::Dashboard => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::{dataset::Dataset, metric::Metric};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn full_dashboard_renders_every_section() {
        let state = AppState::new(Dataset::builtin().unwrap(), Metric::Deaths, AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(cards::TITLE));
        assert!(text.contains("62.779.911"));
        assert!(text.contains("R$ 105.000.000.000,00"));
        assert!(text.contains(selector::PROMPT));
        assert!(text.contains("Óbitos por Região"));
        assert!(text.contains("Óbitos por Estado (Top 27)"));
    }

    #[test]
    fn open_selector_draws_the_dropdown() {
        let mut state =
            AppState::new(Dataset::builtin().unwrap(), Metric::Deaths, AppConfig::default());
        state.active_view = ActiveView::MetricSelector;
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Custo Total (R$)  (4)"));
    }
}
