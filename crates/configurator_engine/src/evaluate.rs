//! The rule evaluator: a pure boolean over a rule set and the current
//! selections.

use configurator_core::{LogicOperator, Rule, RuleOperator, RuleSet, RuleValue, SelectionState};

/// Evaluate a conditional-visibility rule set against the current selections.
///
/// An absent, disabled, or empty rule set places no restriction and returns
/// `true`. Individual rules evaluate against the referenced option's current
/// selection; a rule whose prerequisite option has nothing selected is
/// `false` regardless of operator — an unset prerequisite never satisfies a
/// condition. Results combine per the rule set's [`LogicOperator`].
///
/// Never panics. A rule whose value shape does not match its operator (for
/// example `In` with a scalar value) evaluates to `false`; the schema crate
/// reports such rules as definition errors.
pub fn evaluate_rule_set(rule_set: Option<&RuleSet>, selections: &SelectionState) -> bool {
    let Some(rule_set) = rule_set else {
        return true;
    };
    if !rule_set.enabled || rule_set.rules.is_empty() {
        return true;
    }

    match rule_set.operator {
        LogicOperator::And => rule_set
            .rules
            .iter()
            .all(|rule| evaluate_rule(rule, selections)),
        LogicOperator::Or => rule_set
            .rules
            .iter()
            .any(|rule| evaluate_rule(rule, selections)),
    }
}

/// Evaluate one rule against the referenced option's current selection.
fn evaluate_rule(rule: &Rule, selections: &SelectionState) -> bool {
    let Some(selected) = selections.selected(&rule.option_id) else {
        return false;
    };

    match (rule.operator, &rule.value) {
        (RuleOperator::Equals, RuleValue::One(value)) => selected == value,
        (RuleOperator::NotEquals, RuleValue::One(value)) => selected != value,
        (RuleOperator::In, RuleValue::Many(values)) => values.iter().any(|v| v == selected),
        (RuleOperator::NotIn, RuleValue::Many(values)) => values.iter().all(|v| v != selected),
        // Value shape does not match the operator. Definition error; the
        // rule contributes no match rather than crashing the evaluation.
        _ => false,
    }
}
