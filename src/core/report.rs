//! Non-interactive output: a plain-text report and a JSON document carrying
//! the same cards and chart specs the TUI draws.

use std::fmt::Write as _;

use serde::Serialize;

use super::chart::{self, ChartSpec};
use super::dataset::Dataset;
use super::metric::Metric;
use super::summary::{self, SummaryCard};

/// Everything the dashboard shows for one metric.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub metric: Metric,
    pub cards: Vec<SummaryCard>,
    pub regions: ChartSpec,
    pub states: ChartSpec,
}

impl DashboardSnapshot {
    pub fn new(dataset: &Dataset, metric: Metric) -> Self {
        Self {
            metric,
            cards: summary::summary_cards(dataset),
            regions: chart::region_chart(dataset, metric),
            states: chart::state_chart(dataset, metric),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render as aligned text, one line per card and per bar.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for card in &self.cards {
            let _ = writeln!(out, "{:<32} {}", card.title, card.value);
        }
        for spec in [&self.regions, &self.states] {
            out.push('\n');
            write_chart(&mut out, spec);
        }
        out
    }
}

fn write_chart(out: &mut String, spec: &ChartSpec) {
    let _ = writeln!(out, "{}", spec.title);
    let width = spec
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    for (rank, bar) in spec.bars.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<width$}  {}",
            rank + 1,
            bar.label,
            spec.format.full(bar.value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_lists_cards_then_ranked_bars() {
        let ds = Dataset::builtin().unwrap();
        let text = DashboardSnapshot::new(&ds, Metric::Deaths).to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Total de Internações"));
        assert!(lines[0].ends_with("62.779.911"));
        assert!(text.contains("Óbitos por Região"));
        assert!(text.contains("Óbitos por Estado (Top 27)"));

        let first_state = lines
            .iter()
            .position(|l| l.starts_with("Óbitos por Estado"))
            .unwrap()
            + 1;
        assert!(lines[first_state].contains("Sao Paulo"));
        assert!(lines[first_state].ends_with("767.157"));
    }

    #[test]
    fn json_snapshot_carries_metric_and_bars() {
        let ds = Dataset::builtin().unwrap();
        let json = DashboardSnapshot::new(&ds, Metric::TotalCost).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metric"], "total_cost");
        assert_eq!(value["regions"]["format"], "currency");
        assert_eq!(value["regions"]["bars"][0]["label"], "Regiao Sudeste");
        assert_eq!(value["states"]["bars"].as_array().unwrap().len(), 27);
        assert_eq!(value["cards"][1]["tone"], "danger");
    }
}
