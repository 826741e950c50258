//! The selection consistency corrector.
//!
//! [`reconcile`] is a single deterministic pass; [`stabilize`] is the
//! explicit bounded loop for catalogs with chains of dependent options.

use crate::{visible_options, visible_values, RECONCILE_MAX_ITERATIONS};
use configurator_core::{Catalog, ChangeReason, SelectionChange, SelectionState};
use thiserror::Error;

/// Result of one [`reconcile`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The corrected selection map, for the caller to adopt as authoritative.
    pub selections: SelectionState,
    /// One entry per corrected option. Empty when `selections` was already
    /// consistent.
    pub changes: Vec<SelectionChange>,
}

/// Detect selections that reference now-invisible values and propose
/// deterministic replacements.
///
/// For every option visible under `selections`: if its current selection is
/// among its visible values it is left untouched; otherwise the first visible
/// value in authored order is selected. An option with no visible values is
/// left as-is — a stale selection stays in the map, inert, rather than being
/// forced into an invalid state.
///
/// This is a single pass, not a fixed point: correcting option A does not
/// re-run resolution for options that depend on A within the same call.
/// Callers needing convergence use [`stabilize`].
pub fn reconcile(catalog: &Catalog, selections: &SelectionState) -> ReconcileOutcome {
    let mut updated = selections.clone();
    let mut changes = Vec::new();

    for option in visible_options(catalog, selections) {
        let current = selections.selected(&option.id);
        let visible = visible_values(option, selections);

        if let Some(current) = current {
            if visible.iter().any(|v| v.id == current) {
                continue;
            }
        }
        let Some(fallback) = visible.first() else {
            continue;
        };

        changes.push(SelectionChange {
            option_id: option.id.clone(),
            old_value_id: current.map(str::to_string),
            new_value_id: fallback.id.clone(),
            reason: match current {
                None => ChangeReason::NothingSelected,
                Some(_) => ChangeReason::SelectionHidden,
            },
        });
        updated.select(option.id.clone(), fallback.id.clone());
    }

    ReconcileOutcome {
        selections: updated,
        changes,
    }
}

/// Result of a successful [`stabilize`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableOutcome {
    pub selections: SelectionState,
    /// Every correction made across all passes, in the order applied.
    pub changes: Vec<SelectionChange>,
    /// Number of [`reconcile`] passes run, including the final no-change pass.
    pub iterations: u32,
}

/// The selection map kept changing past the iteration cap.
#[derive(Debug, Clone, Error)]
pub enum StabilizeError {
    /// A cycle in the rule graph is making corrections oscillate. The
    /// catalog should have been rejected at authoring time; see the schema
    /// crate's cycle detector.
    #[error(
        "configuration could not stabilize after {iterations} reconcile passes \
         ({pending} corrections still pending)"
    )]
    DidNotConverge { iterations: u32, pending: usize },
}

/// Run [`reconcile`] until no corrections remain, up to
/// [`RECONCILE_MAX_ITERATIONS`] passes.
///
/// A chain of dependent options converges in one pass per link. Hitting the
/// cap means the rule graph is cycling; the caller gets
/// [`StabilizeError::DidNotConverge`] rather than a silent infinite loop.
pub fn stabilize(
    catalog: &Catalog,
    selections: &SelectionState,
) -> Result<StableOutcome, StabilizeError> {
    let mut current = selections.clone();
    let mut all_changes = Vec::new();

    for iteration in 1..=RECONCILE_MAX_ITERATIONS {
        let outcome = reconcile(catalog, &current);
        if outcome.changes.is_empty() {
            return Ok(StableOutcome {
                selections: outcome.selections,
                changes: all_changes,
                iterations: iteration,
            });
        }
        all_changes.extend(outcome.changes);
        current = outcome.selections;
    }

    // One probe pass to count what is still pending for the error report.
    let pending = reconcile(catalog, &current).changes.len();
    Err(StabilizeError::DidNotConverge {
        iterations: RECONCILE_MAX_ITERATIONS,
        pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use configurator_core::{
        LogicOperator, ManipulationType, OptionDef, OptionValue, Rule, RuleOperator, RuleSet,
        RuleValue,
    };

    fn requires(option_id: &str, value: &str) -> RuleSet {
        RuleSet::new(
            LogicOperator::And,
            vec![Rule::new(
                option_id,
                RuleOperator::Equals,
                RuleValue::One(value.to_string()),
            )],
        )
    }

    fn option(id: &str, value_ids: &[&str]) -> OptionDef {
        OptionDef {
            id: id.to_string(),
            name: id.to_string(),
            manipulation: ManipulationType::Visibility,
            target_components: Vec::new(),
            default_behavior: Default::default(),
            conditional_logic: None,
            values: value_ids.iter().map(|v| OptionValue::new(*v, *v)).collect(),
        }
    }

    #[test]
    fn consistent_selections_untouched() {
        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"])],
        };
        let selections: SelectionState = [("trim", "sport")].into_iter().collect();

        let outcome = reconcile(&catalog, &selections);
        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.selections, selections);
    }

    #[test]
    fn unselected_option_gets_first_visible_value() {
        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"])],
        };
        let outcome = reconcile(&catalog, &SelectionState::new());

        assert_eq!(outcome.selections.selected("trim"), Some("standard"));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].reason, ChangeReason::NothingSelected);
        assert_eq!(outcome.changes[0].old_value_id, None);
    }

    #[test]
    fn hidden_selection_falls_back_to_first_visible() {
        // "blue" requires trim=sport; current selections have trim=standard.
        let mut color = option("color", &["red", "green", "blue"]);
        color.values[2].conditional_logic = Some(requires("trim", "sport"));

        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"]), color],
        };
        let selections: SelectionState = [("trim", "standard"), ("color", "blue")]
            .into_iter()
            .collect();

        let outcome = reconcile(&catalog, &selections);
        // First in authored order, never a later visible value.
        assert_eq!(outcome.selections.selected("color"), Some("red"));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].reason, ChangeReason::SelectionHidden);
        assert_eq!(outcome.changes[0].old_value_id.as_deref(), Some("blue"));
    }

    #[test]
    fn option_with_no_visible_values_left_inert() {
        let mut finish = option("finish", &["matte"]);
        finish.values[0].conditional_logic = Some(requires("trim", "sport"));

        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"]), finish],
        };
        let selections: SelectionState = [("trim", "standard"), ("finish", "matte")]
            .into_iter()
            .collect();

        let outcome = reconcile(&catalog, &selections);
        assert!(outcome.changes.is_empty());
        // The stale selection stays in the map, inert.
        assert_eq!(outcome.selections.selected("finish"), Some("matte"));
    }

    #[test]
    fn invisible_option_not_corrected() {
        let mut spoiler = option("spoiler", &["none", "carbon"]);
        spoiler.conditional_logic = Some(requires("trim", "sport"));

        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"]), spoiler],
        };
        let selections: SelectionState = [("trim", "standard")].into_iter().collect();

        let outcome = reconcile(&catalog, &selections);
        assert_eq!(outcome.changes.len(), 0);
        assert_eq!(outcome.selections.selected("spoiler"), None);
    }

    #[test]
    fn single_pass_does_not_chase_dependents() {
        // wheels depends on trim's corrected value; one pass must not see it.
        let mut wheels = option("wheels", &["steel", "alloy"]);
        wheels.values[1].conditional_logic = Some(requires("trim", "standard"));

        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"]), wheels],
        };
        // Nothing selected: trim gets "standard", but wheels is evaluated
        // against the ORIGINAL (empty) selections, so "alloy" is invisible.
        let outcome = reconcile(&catalog, &SelectionState::new());
        assert_eq!(outcome.selections.selected("trim"), Some("standard"));
        assert_eq!(outcome.selections.selected("wheels"), Some("steel"));
    }

    #[test]
    fn stabilize_converges_dependency_chain() {
        // a -> b -> c: each later option's second value requires the earlier
        // option's first value, so corrections cascade one pass per link.
        let mut b = option("b", &["b1", "b2"]);
        b.conditional_logic = Some(requires("a", "a1"));
        let mut c = option("c", &["c1", "c2"]);
        c.conditional_logic = Some(requires("b", "b1"));

        let catalog = Catalog {
            options: vec![option("a", &["a1", "a2"]), b, c],
        };

        let outcome = stabilize(&catalog, &SelectionState::new()).unwrap();
        assert_eq!(outcome.selections.selected("a"), Some("a1"));
        assert_eq!(outcome.selections.selected("b"), Some("b1"));
        assert_eq!(outcome.selections.selected("c"), Some("c1"));
        assert!(outcome.iterations <= RECONCILE_MAX_ITERATIONS);
        assert_eq!(outcome.changes.len(), 3);
    }

    #[test]
    fn stabilize_reports_live_cycle() {
        // Two options whose only values exclude each other's current
        // selection: every pass flips both, forever.
        let mut a = option("a", &["a1", "a2"]);
        a.values[0].conditional_logic = Some(requires("b", "b2"));
        a.values[1].conditional_logic = Some(requires("b", "b1"));
        let mut b = option("b", &["b1", "b2"]);
        b.values[0].conditional_logic = Some(requires("a", "a2"));
        b.values[1].conditional_logic = Some(requires("a", "a1"));

        let catalog = Catalog { options: vec![a, b] };
        let selections: SelectionState = [("a", "a1"), ("b", "b1")].into_iter().collect();

        let err = stabilize(&catalog, &selections).unwrap_err();
        let StabilizeError::DidNotConverge { iterations, .. } = err;
        assert_eq!(iterations, RECONCILE_MAX_ITERATIONS);
    }

    #[test]
    fn stabilize_noop_on_consistent_state() {
        let catalog = Catalog {
            options: vec![option("trim", &["standard", "sport"])],
        };
        let selections: SelectionState = [("trim", "sport")].into_iter().collect();

        let outcome = stabilize(&catalog, &selections).unwrap();
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.selections, selections);
    }
}
