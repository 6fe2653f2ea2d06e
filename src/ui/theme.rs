//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::summary::CardTone;

/// Pastel palette for colouring state bars by region, in region order.
pub const REGION_PALETTE: &[Color] = &[
    Color::Rgb(102, 197, 204),
    Color::Rgb(246, 207, 113),
    Color::Rgb(248, 156, 116),
    Color::Rgb(220, 176, 242),
    Color::Rgb(135, 197, 95),
    Color::Rgb(158, 185, 243),
    Color::Rgb(254, 136, 177),
];

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── header ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn note_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC)
    }

    // ── cards ──────────────────────────────────────────────────
    pub fn card_color(tone: CardTone) -> Color {
        match tone {
            CardTone::Info => Color::Cyan,
            CardTone::Danger => Color::Red,
            CardTone::Warning => Color::Yellow,
            CardTone::Success => Color::Green,
        }
    }

    pub fn card_value_style(tone: CardTone) -> Style {
        Style::default()
            .fg(Self::card_color(tone))
            .add_modifier(Modifier::BOLD)
    }

    // ── charts ─────────────────────────────────────────────────
    pub fn bar_style() -> Style {
        Style::default().fg(Color::Rgb(99, 110, 250))
    }

    pub fn bar_value_style() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn bar_label_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Colour for the `index`-th region; wraps if there are more regions
    /// than palette entries.
    pub fn region_color(index: usize) -> Color {
        REGION_PALETTE[index % REGION_PALETTE.len()]
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn focused_border_style() -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn block_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
