//! The four headline cards computed from the `Total` row.

use serde::Serialize;

use super::dataset::{Dataset, Row};
use super::format::{self, MISSING};

/// Colour family for a card; the UI maps these onto theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTone {
    Info,
    Danger,
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub tone: CardTone,
}

/// Cards in display order.  A missing `Total` row or cell shows [`MISSING`].
pub fn summary_cards(dataset: &Dataset) -> Vec<SummaryCard> {
    let total = dataset.total();
    let show = |pick: fn(&Row) -> Option<f64>, fmt: fn(f64) -> String| {
        total
            .and_then(pick)
            .map(fmt)
            .unwrap_or_else(|| MISSING.to_string())
    };

    vec![
        SummaryCard {
            title: "Total de Internações",
            value: show(|r| r.hospitalizations, |v| format::grouped(v, 0)),
            tone: CardTone::Info,
        },
        SummaryCard {
            title: "Total de Óbitos",
            value: show(|r| r.deaths, |v| format::grouped(v, 0)),
            tone: CardTone::Danger,
        },
        SummaryCard {
            title: "Taxa de Mortalidade Média (%)",
            value: show(|r| r.mortality_rate, format::rate),
            tone: CardTone::Warning,
        },
        SummaryCard {
            title: "Custo Total Estimado (R$)",
            value: show(|r| r.total_cost, format::currency),
            tone: CardTone::Success,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_cards_match_the_total_row() {
        let ds = Dataset::builtin().unwrap();
        let values: Vec<_> = summary_cards(&ds).into_iter().map(|c| c.value).collect();
        assert_eq!(
            values,
            vec!["62.779.911", "3.229.289", "5,14", "R$ 105.000.000.000,00"]
        );
    }

    #[test]
    fn tones_are_fixed_per_card() {
        let ds = Dataset::builtin().unwrap();
        let tones: Vec<_> = summary_cards(&ds).iter().map(|c| c.tone).collect();
        assert_eq!(
            tones,
            vec![CardTone::Info, CardTone::Danger, CardTone::Warning, CardTone::Success]
        );
    }

    #[test]
    fn without_total_row_every_card_is_missing() {
        let ds = Dataset::parse("a,b,c,d,e\nRegiao X,1,2,3,4\n").unwrap();
        assert!(summary_cards(&ds).iter().all(|c| c.value == MISSING));
    }

    #[test]
    fn missing_cell_only_blanks_its_card() {
        let ds = Dataset::parse("a,b,c,d,e\nTotal,10,?,30,40\n").unwrap();
        let cards = summary_cards(&ds);
        assert_eq!(cards[0].value, "10");
        assert_eq!(cards[2].value, MISSING);
        assert_eq!(cards[3].value, "R$ 40,00");
    }
}
