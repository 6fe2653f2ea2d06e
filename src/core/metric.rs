//! The four selectable metrics and how each one reads from a [`Row`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::dataset::Row;
use super::format::ValueFormat;

/// A column the charts can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Hospitalizations,
    #[default]
    Deaths,
    MortalityRate,
    TotalCost,
}

impl Metric {
    /// Selector order.
    pub const ALL: &[Metric] = &[
        Metric::Hospitalizations,
        Metric::Deaths,
        Metric::MortalityRate,
        Metric::TotalCost,
    ];

    /// Human-readable label shown in the selector and chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Hospitalizations => "Internações",
            Metric::Deaths => "Óbitos",
            Metric::MortalityRate => "Taxa de Mortalidade (%)",
            Metric::TotalCost => "Custo Total (R$)",
        }
    }

    /// Stable key used on the command line and in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Hospitalizations => "internacoes",
            Metric::Deaths => "obitos",
            Metric::MortalityRate => "taxa_mortalidade",
            Metric::TotalCost => "valor_total",
        }
    }

    pub fn format(self) -> ValueFormat {
        match self {
            Metric::Hospitalizations | Metric::Deaths => ValueFormat::Integer,
            Metric::MortalityRate => ValueFormat::Percent,
            Metric::TotalCost => ValueFormat::Currency,
        }
    }

    /// Read this metric's value from a row (`None` when the cell was unparseable).
    pub fn value(self, row: &Row) -> Option<f64> {
        match self {
            Metric::Hospitalizations => row.hospitalizations,
            Metric::Deaths => row.deaths,
            Metric::MortalityRate => row.mortality_rate,
            Metric::TotalCost => row.total_cost,
        }
    }

    /// Position in [`Metric::ALL`].
    pub fn index(self) -> usize {
        Metric::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    /// Next metric in selector order, wrapping around.
    pub fn next(self) -> Metric {
        Metric::ALL[(self.index() + 1) % Metric::ALL.len()]
    }

    /// Previous metric in selector order, wrapping around.
    pub fn prev(self) -> Metric {
        let len = Metric::ALL.len();
        Metric::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric `{0}` (expected one of: internacoes, obitos, taxa_mortalidade, valor_total)")]
pub struct MetricParseError(pub String);

impl FromStr for Metric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "internacoes" | "hospitalizations" => Ok(Metric::Hospitalizations),
            "obitos" | "deaths" => Ok(Metric::Deaths),
            "taxa_mortalidade" | "mortality_rate" | "mortality" => Ok(Metric::MortalityRate),
            "valor_total" | "cost" | "total_cost" => Ok(Metric::TotalCost),
            _ => Err(MetricParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_english_names() {
        assert_eq!("obitos".parse::<Metric>(), Ok(Metric::Deaths));
        assert_eq!("Mortality-Rate".parse::<Metric>(), Ok(Metric::MortalityRate));
        assert_eq!(" valor_total ".parse::<Metric>(), Ok(Metric::TotalCost));
        assert_eq!("hospitalizations".parse::<Metric>(), Ok(Metric::Hospitalizations));
        assert!("leitos".parse::<Metric>().is_err());
    }

    #[test]
    fn key_round_trips_through_from_str() {
        for &m in Metric::ALL {
            assert_eq!(m.key().parse::<Metric>(), Ok(m));
        }
    }

    #[test]
    fn cycling_wraps_in_selector_order() {
        assert_eq!(Metric::TotalCost.next(), Metric::Hospitalizations);
        assert_eq!(Metric::Hospitalizations.prev(), Metric::TotalCost);
        assert_eq!(Metric::Deaths.next(), Metric::MortalityRate);
    }

    #[test]
    fn default_is_deaths() {
        assert_eq!(Metric::default(), Metric::Deaths);
    }
}
