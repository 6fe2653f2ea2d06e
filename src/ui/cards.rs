//! Header and summary-card widgets.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::summary::SummaryCard;

use super::theme::Theme;

pub const TITLE: &str = "Dashboard COVID-19 - Brasil";
pub const PERIOD: &str = "Período de Análise (Dados Agregados): Fev/2020 - Fev/2025*";
pub const NOTE: &str = "*Nota: Os dados apresentados são agregados e refletem os totais \
consolidados, não uma série temporal detalhada mês a mês até Fev/2025.";

/// Three centred lines: title, analysis period, footnote.
pub struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(TITLE, Theme::title_style())),
            Line::from(Span::styled(PERIOD, Theme::muted_style())),
            Line::from(Span::styled(NOTE, Theme::note_style())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// One headline figure in a rounded, tone-coloured box.
pub struct CardWidget<'a> {
    pub card: &'a SummaryCard,
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = Theme::card_color(self.card.tone);
        let block = Block::default()
            .title(format!(" {} ", self.card.title))
            .title_style(Theme::block_title_style().fg(color))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(ratatui::style::Style::default().fg(color));

        Paragraph::new(Line::from(Span::styled(
            self.card.value.as_str(),
            Theme::card_value_style(self.card.tone),
        )))
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
    }
}
