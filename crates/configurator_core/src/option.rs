//! Option and value definitions - the authored catalog.

use crate::RuleSet;
use serde::{Deserialize, Serialize};

/// The full set of authored option definitions.
///
/// Passed wholesale into every engine call as a read-only snapshot. The
/// engine never mutates a catalog; authoring surfaces construct and edit it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub options: Vec<OptionDef>,
}

impl Catalog {
    /// Look up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// What selecting a value of this option does to its target components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManipulationType {
    /// Selections show or hide target components.
    #[default]
    Visibility,
    /// Selections recolor target components' flat base material.
    Material,
}

/// Baseline state applied to a visibility option's targets before the
/// selected value's override list is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultBehavior {
    #[default]
    Show,
    Hide,
}

impl DefaultBehavior {
    /// The baseline visibility this behavior establishes.
    pub fn baseline_visible(self) -> bool {
        matches!(self, DefaultBehavior::Show)
    }
}

/// A user-configurable choice with an ordered, non-empty list of values.
///
/// Option order is authored and carries meaning: options are presented in
/// order, and when several options target the same component the later
/// option wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDef {
    /// Unique identifier across the catalog.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manipulation: ManipulationType,
    /// Named scene components this option is permitted to affect, in
    /// authored order. Matching against component names is exact and
    /// case-insensitive, never substring.
    #[serde(default)]
    pub target_components: Vec<String>,
    /// Only meaningful when `manipulation` is [`ManipulationType::Visibility`].
    #[serde(default)]
    pub default_behavior: DefaultBehavior,
    /// When present and enabled, gates whether this option is shown at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<RuleSet>,
    /// Ordered, non-empty. The first visible value is the fallback target
    /// when the current selection becomes invalid.
    pub values: Vec<OptionValue>,
}

impl OptionDef {
    /// Look up a value by id within this option.
    pub fn value(&self, value_id: &str) -> Option<&OptionValue> {
        self.values.iter().find(|v| v.id == value_id)
    }

    /// `true` if `name` matches one of this option's target component
    /// entries (exact, case-insensitive).
    pub fn targets_component(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.target_components
            .iter()
            .any(|t| t.to_lowercase() == lowered)
    }
}

/// One concrete choice within an [`OptionDef`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionValue {
    /// Unique within the owning option.
    pub id: String,
    pub name: String,
    /// Hex color applied to targets when the owning option's manipulation is
    /// [`ManipulationType::Material`]. Parsed at apply time; an unparseable
    /// string is a definition error and has no effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Targets forced visible when the owning option's default behavior is
    /// [`DefaultBehavior::Hide`]. Entries outside `target_components` are
    /// ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_components: Option<Vec<String>>,
    /// Targets forced hidden when the owning option's default behavior is
    /// [`DefaultBehavior::Show`]. Entries outside `target_components` are
    /// ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_components: Option<Vec<String>>,
    /// When present and enabled, gates whether this value can be selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<RuleSet>,
}

impl OptionValue {
    /// Create a bare value with no color, overrides, or conditions.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            visible_components: None,
            hidden_components: None,
            conditional_logic: None,
        }
    }
}
