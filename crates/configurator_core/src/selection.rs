//! Caller-owned selection state and the change records produced when the
//! engine corrects it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Map from option id to the selected value id.
///
/// A missing key means "nothing selected" for that option. The caller owns
/// the authoritative state; engine operations read it and return proposed
/// updates rather than mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    selected: HashMap<String, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected value id for `option_id`, if any.
    pub fn selected(&self, option_id: &str) -> Option<&str> {
        self.selected.get(option_id).map(String::as_str)
    }

    /// Set the selection for an option, replacing any previous value.
    pub fn select(&mut self, option_id: impl Into<String>, value_id: impl Into<String>) {
        self.selected.insert(option_id.into(), value_id.into());
    }

    /// Clear the selection for an option.
    pub fn clear(&mut self, option_id: &str) {
        self.selected.remove(option_id);
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Iterate `(option_id, value_id)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            selected: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Why the reconciler replaced (or filled in) a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeReason {
    /// The option had no selection at all.
    NothingSelected,
    /// The previously selected value is no longer visible.
    SelectionHidden,
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeReason::NothingSelected => f.write_str("no value selected"),
            ChangeReason::SelectionHidden => f.write_str("selected value no longer visible"),
        }
    }
}

/// One correction proposed by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub option_id: String,
    /// `None` when nothing was selected before the correction.
    pub old_value_id: Option<String>,
    pub new_value_id: String,
    pub reason: ChangeReason,
}

impl fmt::Display for SelectionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.old_value_id {
            Some(old) => write!(
                f,
                "option '{}': '{}' -> '{}' ({})",
                self.option_id, old, self.new_value_id, self.reason
            ),
            None => write!(
                f,
                "option '{}': selected '{}' ({})",
                self.option_id, self.new_value_id, self.reason
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_means_nothing_selected() {
        let mut state = SelectionState::new();
        assert_eq!(state.selected("trim"), None);

        state.select("trim", "sport");
        assert_eq!(state.selected("trim"), Some("sport"));

        state.clear("trim");
        assert_eq!(state.selected("trim"), None);
    }

    #[test]
    fn serializes_as_plain_map() {
        let state: SelectionState = [("trim", "sport")].into_iter().collect();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"trim":"sport"}"#);
    }

    #[test]
    fn change_display_includes_reason() {
        let change = SelectionChange {
            option_id: "trim".to_string(),
            old_value_id: Some("sport".to_string()),
            new_value_id: "standard".to_string(),
            reason: ChangeReason::SelectionHidden,
        };
        let text = change.to_string();
        assert!(text.contains("selected value no longer visible"));
        assert!(text.contains("'sport' -> 'standard'"));
    }
}
