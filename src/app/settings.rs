//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and the popup renderer consume the same source of truth.

use super::state::AppState;
use crate::config::BAR_GAPS;

/// Toggle values as shown in the popup.
pub const ON: &str = "Sim";
pub const OFF: &str = "Não";

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle: reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => *label,
        }
    }

    /// Current value as shown on the right of the row.
    pub fn value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => (if get(state) { ON } else { OFF }).into(),
            Self::Cycle { value, .. } => value(state),
        }
    }

    /// Toggle or advance the item.
    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
        persist(state);
    }
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Cycle {
        label: "Métrica Padrão",
        value: |s| s.config.default_metric.label().to_string(),
        cycle: |s| {
            s.config.default_metric = s.config.default_metric.next();
            s.status_message = Some(format!(
                "Métrica padrão: {}",
                s.config.default_metric.label()
            ));
        },
    },
    SettingsItem::Toggle {
        label: "Rótulos de Valor",
        get: |s| s.config.value_labels,
        set: |s, v| s.config.value_labels = v,
    },
    SettingsItem::Cycle {
        label: "Espaço entre Barras",
        value: |s| format!("{} linha(s)", s.config.bar_gap),
        cycle: |s| {
            let idx = BAR_GAPS
                .iter()
                .position(|&g| g == s.config.bar_gap)
                .unwrap_or(0);
            s.config.bar_gap = BAR_GAPS[(idx + 1) % BAR_GAPS.len()];
            s.status_message = Some(format!("Espaço entre barras: {}", s.config.bar_gap));
        },
    },
];

fn persist(state: &mut AppState) {
    let Some(path) = state.config_path.clone() else {
        return;
    };
    if let Err(e) = state.config.save_to(&path) {
        tracing::warn!("config save failed: {e:#}");
        state.status_message = Some(format!("Não foi possível salvar as configurações: {e}"));
    }
}
