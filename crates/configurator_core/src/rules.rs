//! Conditional-visibility rule types.
//!
//! A [`RuleSet`] gates an option or a value on other options' current
//! selections. Rule sets never reference their own owning option; the schema
//! crate rejects catalogs that violate this.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the per-rule results of a [`RuleSet`] are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogicOperator {
    /// Every rule must hold.
    #[default]
    And,
    /// At least one rule must hold.
    Or,
}

/// Comparison applied by a single [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    /// Selected value id equals the rule value. Requires [`RuleValue::One`].
    Equals,
    /// Selected value id differs from the rule value. Requires [`RuleValue::One`].
    NotEquals,
    /// Selected value id is a member of the rule value set. Requires [`RuleValue::Many`].
    In,
    /// Selected value id is not a member of the rule value set. Requires [`RuleValue::Many`].
    NotIn,
}

/// The right-hand side of a rule: a single value id or a set of value ids.
///
/// The shape must match the operator (`Equals`/`NotEquals` take `One`,
/// `In`/`NotIn` take `Many`). A mismatched shape makes the rule evaluate to
/// `false`; the schema validator reports it as a definition error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    One(String),
    Many(Vec<String>),
}

impl RuleValue {
    /// The single value id, if this is the scalar shape.
    pub fn as_one(&self) -> Option<&str> {
        match self {
            RuleValue::One(v) => Some(v),
            RuleValue::Many(_) => None,
        }
    }

    /// The value id set, if this is the set shape.
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            RuleValue::One(_) => None,
            RuleValue::Many(vs) => Some(vs),
        }
    }
}

/// A single condition against another option's current selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier for this rule, assigned by the authoring surface.
    pub id: Uuid,
    /// The option whose selection this rule inspects. Must reference a
    /// different option than the one owning the rule set.
    pub option_id: String,
    pub operator: RuleOperator,
    pub value: RuleValue,
}

impl Rule {
    /// Create a rule with a fresh id.
    pub fn new(option_id: impl Into<String>, operator: RuleOperator, value: RuleValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            option_id: option_id.into(),
            operator,
            value,
        }
    }
}

/// An ordered group of [`Rule`]s combined with a [`LogicOperator`].
///
/// A disabled rule set, or one with no rules, places no restriction at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// When `false`, the rule set is ignored and the gated option/value is
    /// always visible.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub operator: LogicOperator,
    pub rules: Vec<Rule>,
}

fn default_enabled() -> bool {
    true
}

impl RuleSet {
    /// Create an enabled rule set.
    pub fn new(operator: LogicOperator, rules: Vec<Rule>) -> Self {
        Self {
            enabled: true,
            operator,
            rules,
        }
    }
}
