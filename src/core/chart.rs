//! Chart specifications: what the two bar charts show for a given metric.
//!
//! A [`ChartSpec`] is renderer-agnostic: the TUI draws it with a ratatui
//! `BarChart`, `--print` writes it as text, `--json` serialises it.

use std::cmp::Ordering;

use serde::Serialize;

use super::dataset::{Dataset, Row};
use super::format::ValueFormat;
use super::metric::Metric;

/// One bar: a location and its value for the selected metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub label: String,
    pub value: Option<f64>,
    /// Colour group (the state's region).  `None` on the region chart.
    pub group: Option<String>,
}

/// A fully resolved bar chart, bars already sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    /// Axis label for the categories (`Região` / `Estado`).
    pub category_label: &'static str,
    /// Axis label for the values (the metric's label).
    pub value_label: &'static str,
    pub metric: Metric,
    pub format: ValueFormat,
    pub bars: Vec<BarSpec>,
}

impl ChartSpec {
    /// Largest present value (for scaling), `None` when every bar is missing.
    pub fn max_value(&self) -> Option<f64> {
        self.bars
            .iter()
            .filter_map(|b| b.value)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Axis tick text for `value` in this chart's format.
    pub fn tick(&self, value: f64) -> String {
        self.format.full(Some(value))
    }
}

/// Regions ranked by `metric`, highest first.
pub fn region_chart(dataset: &Dataset, metric: Metric) -> ChartSpec {
    let bars = ranked(dataset.regions(), metric, |_| None);
    ChartSpec {
        title: format!("{} por Região", metric.label()),
        category_label: "Região",
        value_label: metric.label(),
        metric,
        format: metric.format(),
        bars,
    }
}

/// States ranked by `metric`, highest first, coloured by region.
pub fn state_chart(dataset: &Dataset, metric: Metric) -> ChartSpec {
    let bars = ranked(dataset.states(), metric, |r| r.region.clone());
    ChartSpec {
        title: format!("{} por Estado (Top {})", metric.label(), bars.len()),
        category_label: "Estado",
        value_label: metric.label(),
        metric,
        format: metric.format(),
        bars,
    }
}

/// Build bars and sort them descending.  Missing values go last; equal
/// values keep table order.
fn ranked<'a>(
    rows: impl Iterator<Item = &'a Row>,
    metric: Metric,
    group: impl Fn(&Row) -> Option<String>,
) -> Vec<BarSpec> {
    let mut bars: Vec<BarSpec> = rows
        .map(|r| BarSpec {
            label: r.location.clone(),
            value: metric.value(r),
            group: group(r),
        })
        .collect();
    bars.sort_by(|a, b| descending_missing_last(a.value, b.value));
    bars
}

fn descending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_descending(spec: &ChartSpec) -> bool {
        spec.bars
            .windows(2)
            .all(|w| match (w[0].value, w[1].value) {
                (Some(a), Some(b)) => a >= b,
                (_, None) => true,
                (None, Some(_)) => false,
            })
    }

    #[test]
    fn every_metric_sorts_both_charts_descending() {
        let ds = Dataset::builtin().unwrap();
        for &metric in Metric::ALL {
            let regions = region_chart(&ds, metric);
            let states = state_chart(&ds, metric);
            assert!(is_descending(&regions), "regions not sorted for {metric}");
            assert!(is_descending(&states), "states not sorted for {metric}");
            assert_eq!(regions.bars.len(), 5);
            assert_eq!(states.bars.len(), 27);
        }
    }

    #[test]
    fn leaders_per_metric() {
        let ds = Dataset::builtin().unwrap();
        let top = |m| state_chart(&ds, m).bars[0].label.clone();
        assert_eq!(top(Metric::Deaths), "Sao Paulo");
        assert_eq!(top(Metric::MortalityRate), "Rio de Janiero");
        assert_eq!(top(Metric::TotalCost), "Sao Paulo");
        assert_eq!(region_chart(&ds, Metric::Hospitalizations).bars[0].label, "Regiao Sudeste");
        assert_eq!(region_chart(&ds, Metric::MortalityRate).bars[4].label, "Regiao Norte");
    }

    #[test]
    fn titles_follow_the_metric() {
        let ds = Dataset::builtin().unwrap();
        assert_eq!(region_chart(&ds, Metric::Deaths).title, "Óbitos por Região");
        assert_eq!(
            state_chart(&ds, Metric::TotalCost).title,
            "Custo Total (R$) por Estado (Top 27)"
        );
        assert_eq!(state_chart(&ds, Metric::Deaths).category_label, "Estado");
    }

    #[test]
    fn state_bars_carry_their_region() {
        let ds = Dataset::builtin().unwrap();
        let spec = state_chart(&ds, Metric::Deaths);
        let bahia = spec.bars.iter().find(|b| b.label == "Bahia").unwrap();
        assert_eq!(bahia.group.as_deref(), Some("Regiao Nordeste"));
        assert!(region_chart(&ds, Metric::Deaths).bars.iter().all(|b| b.group.is_none()));
    }

    #[test]
    fn missing_values_sort_last_and_ties_keep_order() {
        let ds = Dataset::parse(
            "a,b,c,d,e\nRegiao A,1,,5,1\nRegiao B,1,,x,1\nRegiao C,1,,9,1\nRegiao D,1,,5,1\n",
        )
        .unwrap();
        let labels: Vec<_> = region_chart(&ds, Metric::Deaths)
            .bars
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["Regiao C", "Regiao A", "Regiao D", "Regiao B"]);

        let all_missing = region_chart(&ds, Metric::MortalityRate);
        assert_eq!(all_missing.max_value(), None);
        assert_eq!(all_missing.bars[0].label, "Regiao A");
    }

    #[test]
    fn ticks_use_the_metric_format() {
        let ds = Dataset::builtin().unwrap();
        assert_eq!(region_chart(&ds, Metric::TotalCost).tick(1500.0), "R$ 1.500,00");
        assert_eq!(region_chart(&ds, Metric::MortalityRate).tick(6.0), "6,00 %");
        assert_eq!(region_chart(&ds, Metric::Deaths).tick(1_501_643.0), "1.501.643");
    }
}
