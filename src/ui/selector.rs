//! The metric selector row and its dropdown overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::metric::Metric;

use super::theme::Theme;

pub const PROMPT: &str = "Selecione a Métrica para Visualização:";

/// Closed selector: prompt plus the current choice.
pub struct MetricSelector {
    pub metric: Metric,
    /// Highlight the border while the dropdown is open.
    pub open: bool,
}

impl Widget for MetricSelector {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.open {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let arrow = if self.open { "▴" } else { "▾" };
        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} {arrow}", self.metric.label()),
                Theme::selected_style(),
            ),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Open dropdown listing every metric, drawn just below `anchor`.
pub struct MetricDropdown {
    pub anchor: Rect,
    pub highlight: usize,
    pub current: Metric,
}

impl MetricDropdown {
    /// Where the dropdown lands inside `area`.
    pub fn popup_rect(&self, area: Rect) -> Rect {
        let height = (Metric::ALL.len() as u16 + 2).min(area.height);
        let width = 36.min(area.width);
        let x = (self.anchor.x + PROMPT.chars().count() as u16 + 3)
            .min(area.right().saturating_sub(width));
        let y = self
            .anchor
            .bottom()
            .saturating_sub(1)
            .min(area.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Widget for MetricDropdown {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_rect(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::focused_border_style());
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = Metric::ALL
            .iter()
            .enumerate()
            .map(|(i, &metric)| {
                let marker = if metric == self.current { "●" } else { " " };
                let text = format!(" {marker} {}  ({})", metric.label(), i + 1);
                if i == self.highlight {
                    Line::from(Span::styled(text, Theme::selected_style()))
                } else {
                    Line::from(Span::raw(text))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_stays_inside_the_screen() {
        let screen = Rect::new(0, 0, 50, 12);
        let dropdown = MetricDropdown {
            anchor: Rect::new(0, 9, 50, 3),
            highlight: 0,
            current: Metric::Deaths,
        };
        let rect = dropdown.popup_rect(screen);
        assert!(rect.right() <= screen.right());
        assert!(rect.bottom() <= screen.bottom());
        assert_eq!(rect.height, Metric::ALL.len() as u16 + 2);
    }

    #[test]
    fn dropdown_lists_every_metric() {
        let screen = Rect::new(0, 0, 80, 20);
        let dropdown = MetricDropdown {
            anchor: Rect::new(0, 3, 80, 3),
            highlight: 2,
            current: Metric::Deaths,
        };
        let rect = dropdown.popup_rect(screen);
        let mut buf = Buffer::empty(screen);
        dropdown.render(screen, &mut buf);

        let text: String = (rect.y..rect.bottom())
            .flat_map(|y| (rect.x..rect.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        for metric in Metric::ALL {
            assert!(text.contains(metric.label()), "missing {}", metric.label());
        }
    }
}
