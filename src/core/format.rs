//! PT-BR number formatting: `.` groups thousands, `,` separates decimals.
//!
//! Everything here is pure string work over `f64`; missing values render as
//! [`MISSING`] so callers never have to special-case `None`.

use serde::Serialize;

/// Placeholder shown wherever a value could not be parsed.
pub const MISSING: &str = "—";

/// How a metric's values are presented on cards, ticks and bar labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Whole counts: `62.779.911`.
    Integer,
    /// Two decimals with a ` %` suffix: `5,14 %`.
    Percent,
    /// Brazilian reais with two decimals: `R$ 1.234,50`.
    Currency,
}

impl ValueFormat {
    /// Full-precision rendering used for axis ticks and the text report.
    pub fn full(self, value: Option<f64>) -> String {
        let Some(v) = finite(value) else {
            return MISSING.into();
        };
        match self {
            ValueFormat::Integer => grouped(v, 0),
            ValueFormat::Percent => format!("{} %", grouped(v, 2)),
            ValueFormat::Currency => currency(v),
        }
    }

    /// Short rendering for bar value labels (`1,5 mi`, `R$ 45,2 bi`).
    pub fn compact(self, value: Option<f64>) -> String {
        let Some(v) = finite(value) else {
            return MISSING.into();
        };
        match self {
            ValueFormat::Integer => compact_magnitude(v),
            ValueFormat::Percent => format!("{} %", grouped(v, 2)),
            ValueFormat::Currency => format!("R$ {}", compact_magnitude(v)),
        }
    }
}

/// Format `value` with `decimals` places and PT-BR separators.
pub fn grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.into();
    }

    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 2);
    // `-0,00` is not a thing.
    if value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }

    let digits = int_part.as_bytes();
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(d as char);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// `R$ 105.000.000.000,00`.
pub fn currency(value: f64) -> String {
    format!("R$ {}", grouped(value, 2))
}

/// Two decimals, comma separated, no suffix (`5,14`).
pub fn rate(value: f64) -> String {
    grouped(value, 2)
}

/// Scale into `mil` / `mi` / `bi` with one decimal place.
fn compact_magnitude(value: f64) -> String {
    const UNITS: &[(f64, &str)] = &[(1.0, ""), (1e3, "mil"), (1e6, "mi"), (1e9, "bi")];
    let decimals = |idx: usize| if idx == 0 { 0 } else { 1 };

    let abs = value.abs();
    let mut idx = UNITS.iter().rposition(|&(scale, _)| abs >= scale).unwrap_or(0);
    // Rounding can carry into the next unit: 999.960 is `1,0 mi`.
    if idx + 1 < UNITS.len() && round_to(abs / UNITS[idx].0, decimals(idx)) >= 1000.0 {
        idx += 1;
    }

    let (scale, unit) = UNITS[idx];
    let text = grouped(value / scale, decimals(idx));
    if unit.is_empty() {
        text
    } else {
        format!("{text} {unit}")
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(grouped(62_779_911.0, 0), "62.779.911");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(1000.0, 0), "1.000");
        assert_eq!(grouped(0.0, 0), "0");
    }

    #[test]
    fn uses_comma_for_decimals() {
        assert_eq!(rate(5.14), "5,14");
        assert_eq!(grouped(3.4, 2), "3,40");
        assert_eq!(grouped(1234.5, 1), "1.234,5");
    }

    #[test]
    fn formats_currency_like_the_cost_card() {
        assert_eq!(currency(1.05e11), "R$ 105.000.000.000,00");
        assert_eq!(currency(704_313_849.4), "R$ 704.313.849,40");
    }

    #[test]
    fn negative_values_keep_sign_but_not_negative_zero() {
        assert_eq!(grouped(-1500.0, 0), "-1.500");
        assert_eq!(grouped(-0.001, 2), "0,00");
    }

    #[test]
    fn missing_and_non_finite_render_placeholder() {
        assert_eq!(ValueFormat::Integer.full(None), MISSING);
        assert_eq!(ValueFormat::Currency.compact(Some(f64::NAN)), MISSING);
        assert_eq!(grouped(f64::INFINITY, 0), MISSING);
    }

    #[test]
    fn compact_labels_pick_a_unit() {
        assert_eq!(ValueFormat::Integer.compact(Some(743_596.0)), "743,6 mil");
        assert_eq!(ValueFormat::Integer.compact(Some(1_501_643.0)), "1,5 mi");
        assert_eq!(ValueFormat::Integer.compact(Some(512.0)), "512");
        assert_eq!(
            ValueFormat::Currency.compact(Some(45_232_930_366.0)),
            "R$ 45,2 bi"
        );
        assert_eq!(ValueFormat::Percent.compact(Some(6.05)), "6,05 %");
    }

    #[test]
    fn compact_rounding_carries_into_the_next_unit() {
        assert_eq!(ValueFormat::Integer.compact(Some(999_960.0)), "1,0 mi");
        assert_eq!(ValueFormat::Integer.compact(Some(999_960_000.0)), "1,0 bi");
        assert_eq!(ValueFormat::Integer.compact(Some(999.6)), "1,0 mil");
        assert_eq!(ValueFormat::Integer.compact(Some(999_940.0)), "999,9 mil");
        assert_eq!(ValueFormat::Currency.compact(Some(-999_960.0)), "R$ -1,0 mi");
    }

    #[test]
    fn full_rendering_per_format() {
        assert_eq!(ValueFormat::Integer.full(Some(186_173.0)), "186.173");
        assert_eq!(ValueFormat::Percent.full(Some(3.47)), "3,47 %");
        assert_eq!(
            ValueFormat::Currency.full(Some(6_045_855_298.0)),
            "R$ 6.045.855.298,00"
        );
    }
}
