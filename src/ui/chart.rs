//! Bar-chart widget that draws a [`ChartSpec`] as horizontal ratatui bars.
//!
//! Bars are laid out one per row (plus the configured gap).  When a chart
//! has more bars than rows it shows a window starting at `scroll` and puts
//! the visible range in the title.  Bars carrying a group (the state's
//! region) are coloured from the region palette and a legend line is drawn
//! under them.  The bottom border carries the value scale (`0 … max`) in the
//! metric's format.

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use crate::core::chart::ChartSpec;
use crate::core::format::ValueFormat;

use super::theme::Theme;

/// Percent values are stored as hundredths so `5,14` and `5,15` differ.
const PERCENT_SCALE: f64 = 100.0;

pub struct ChartWidget<'a> {
    pub spec: &'a ChartSpec,
    /// Region names in palette order.
    pub regions: &'a [&'a str],
    /// First bar to show.
    pub scroll: usize,
    pub value_labels: bool,
    pub bar_gap: u16,
}

/// The slice of bars that fits: `(start, count)`.
pub fn visible_window(len: usize, height: u16, gap: u16, scroll: usize) -> (usize, usize) {
    let per_bar = 1 + gap as usize;
    let fits = ((height as usize + gap as usize) / per_bar).max(1);
    let count = fits.min(len);
    let start = scroll.min(len - count);
    (start, count)
}

/// Integer bar length for a value; missing values draw as empty bars.
pub fn bar_height(value: Option<f64>, format: ValueFormat) -> u64 {
    let Some(v) = value.filter(|v| v.is_finite() && *v > 0.0) else {
        return 0;
    };
    let scaled = match format {
        ValueFormat::Percent => v * PERCENT_SCALE,
        ValueFormat::Integer | ValueFormat::Currency => v,
    };
    scaled.round() as u64
}

/// `Regiao Norte` → `Norte`.
fn short_region(name: &str) -> &str {
    name.strip_prefix("Regiao ").unwrap_or(name)
}

impl<'a> ChartWidget<'a> {
    fn group_color(&self, group: Option<&str>) -> Option<ratatui::style::Color> {
        let group = group?;
        let idx = self.regions.iter().position(|r| *r == group)?;
        Some(Theme::region_color(idx))
    }

    /// `Estado · Óbitos: 0 … 767.157` on the bottom border.
    fn scale(&self) -> Line<'static> {
        let spec = self.spec;
        let text = match spec.max_value() {
            Some(max) => format!(
                " {} · {}: {} … {} ",
                spec.category_label,
                spec.value_label,
                spec.tick(0.0),
                spec.tick(max)
            ),
            None => format!(" {} ", spec.category_label),
        };
        Line::from(Span::styled(text, Theme::muted_style()))
    }

    fn legend(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, region) in self.regions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("■ ", Style::default().fg(Theme::region_color(i))));
            spans.push(Span::styled(short_region(region), Theme::bar_label_style()));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for ChartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spec = self.spec;
        let grouped = spec.bars.iter().any(|b| b.group.is_some());

        let mut inner = Block::default().borders(Borders::ALL).inner(area);
        let mut legend_area = None;
        if grouped && inner.height > 2 {
            legend_area = Some(Rect::new(inner.x, inner.bottom() - 1, inner.width, 1));
            inner.height -= 1;
        }

        let len = spec.bars.len();
        let (start, count) = if len == 0 {
            (0, 0)
        } else {
            visible_window(len, inner.height, self.bar_gap, self.scroll)
        };

        let title = if count < len {
            format!(" {} · {}-{}/{} ", spec.title, start + 1, start + count, len)
        } else {
            format!(" {} ", spec.title)
        };
        let block = Block::default()
            .title(title)
            .title_style(Theme::block_title_style())
            .title_bottom(self.scale())
            .borders(Borders::ALL)
            .border_style(Theme::border_style());

        let bars: Vec<Bar> = spec.bars[start..start + count]
            .iter()
            .map(|b| {
                let style = self
                    .group_color(b.group.as_deref())
                    .map(|c| Style::default().fg(c))
                    .unwrap_or_else(Theme::bar_style);
                let text = if self.value_labels {
                    spec.format.compact(b.value)
                } else {
                    String::new()
                };
                Bar::default()
                    .value(bar_height(b.value, spec.format))
                    .label(Line::from(b.label.clone()))
                    .text_value(text)
                    .style(style)
                    .value_style(Theme::bar_value_style().bg(style.fg.unwrap_or_default()))
            })
            .collect();

        let mut chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(self.bar_gap)
            .label_style(Theme::bar_label_style());
        // Keep bar lengths comparable across scroll positions.
        if let Some(max) = spec.max_value() {
            chart = chart.max(bar_height(Some(max), spec.format).max(1));
        }

        let chart_area = Rect {
            height: area.height.saturating_sub(legend_area.map_or(0, |_| 1)),
            ..area
        };
        chart.render(chart_area, buf);

        if let Some(legend) = legend_area {
            Paragraph::new(self.legend()).render(legend, buf);
            // Re-draw the border segment the legend row sits beside.
            Block::default()
                .title_bottom(self.scale())
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Theme::border_style())
                .render(Rect::new(area.x, legend.y, area.width, area.bottom() - legend.y), buf);
        }
    }
}
