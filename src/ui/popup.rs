//! Popup overlay for the settings menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::settings::{OFF, ON, SETTINGS_ITEMS};
use crate::app::state::AppState;

use super::theme::Theme;

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub state: &'a AppState,
}

impl<'a> Widget for SettingsPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (SETTINGS_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Configurações ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let selected = self.state.settings_selected;
        let mut lines = vec![Line::raw("")];
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let (prefix, style) = if i == selected {
                (" ▸ ", Theme::selected_style())
            } else {
                ("   ", Style::default().fg(Color::White))
            };
            let value = item.value(self.state);
            let value_style = match value.as_str() {
                ON => Style::default().fg(Color::Green),
                OFF => Style::default().fg(Color::DarkGray),
                _ => Style::default().fg(Color::Yellow),
            };

            // Label left-aligned, value right-aligned.
            let label_col = format!("{prefix}{:<20}", item.label());
            let value_width = (inner.width as usize)
                .saturating_sub(label_col.chars().count() + 1)
                .max(1);
            lines.push(Line::from(vec![
                Span::styled(label_col, style),
                Span::styled(format!("{value:>value_width$}"), value_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Espaço: alterar  Esc: fechar",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::{dataset::Dataset, metric::Metric};

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_fixed(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_fixed(80, 40, area), area);
    }

    #[test]
    fn popup_shows_current_values() {
        let state = AppState::new(Dataset::builtin().unwrap(), Metric::Deaths, AppConfig::default());
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        SettingsPopup { state: &state }.render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Configurações"));
        assert!(text.contains("Métrica Padrão"));
        assert!(text.contains("Óbitos"));
        assert!(text.contains("Rótulos de Valor"));
        assert!(text.contains(ON));
        assert!(text.contains("Espaço entre Barras"));
        assert!(text.contains("0 linha(s)"));
    }
}
