use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

/// A control inside the filter form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterControl {
    Checkbox {
        name: String,
        value: String,
        checked: bool,
    },
    Radio {
        name: String,
        value: String,
        checked: bool,
    },
    Select {
        name: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

/// Collects the active filter values, keyed by control name.
///
/// Checked checkboxes accumulate into a list; selects and checked radios set a
/// single value, a later one overwriting an earlier one. A checkbox that
/// arrives after a single value under the same name turns it into a list.
pub fn collect_filters(controls: &[FilterControl]) -> BTreeMap<String, FilterValue> {
    let mut filters = BTreeMap::new();

    for control in controls {
        match control {
            FilterControl::Checkbox {
                name,
                value,
                checked: true,
            } => {
                let mut values = match filters.remove(name) {
                    Some(FilterValue::Many(values)) => values,
                    Some(FilterValue::One(existing)) => vec![existing],
                    None => Vec::new(),
                };
                values.push(value.clone());
                filters.insert(name.clone(), FilterValue::Many(values));
            }
            FilterControl::Radio {
                name,
                value,
                checked: true,
            }
            | FilterControl::Select { name, value } => {
                filters.insert(name.clone(), FilterValue::One(value.clone()));
            }
            FilterControl::Checkbox { checked: false, .. }
            | FilterControl::Radio { checked: false, .. } => {}
        }
    }

    filters
}

/// Collects and logs the active filters. Nothing is filtered server-side.
pub fn apply_filters(controls: &[FilterControl]) -> BTreeMap<String, FilterValue> {
    let filters = collect_filters(controls);
    info!(
        "Applied filters: {}",
        serde_json::to_string(&filters).unwrap_or_default()
    );
    filters
}
