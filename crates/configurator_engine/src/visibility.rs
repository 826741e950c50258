//! The visibility resolver: which options, and which values within an
//! option, may currently be shown.

use crate::evaluate_rule_set;
use configurator_core::{Catalog, OptionDef, OptionValue, SelectionState};

/// The options currently visible under `selections`, in authored order.
///
/// An option with no conditional logic is always visible. The result is a
/// subsequence of `catalog.options`; this resolver never re-sorts — authored
/// order carries both UI order and override precedence.
pub fn visible_options<'a>(catalog: &'a Catalog, selections: &SelectionState) -> Vec<&'a OptionDef> {
    catalog
        .options
        .iter()
        .filter(|option| evaluate_rule_set(option.conditional_logic.as_ref(), selections))
        .collect()
}

/// The values of `option` currently visible under `selections`, in authored
/// order.
///
/// Value visibility is independent of whether the owning option is itself
/// visible; callers that need both must also check [`visible_options`].
pub fn visible_values<'a>(
    option: &'a OptionDef,
    selections: &SelectionState,
) -> Vec<&'a OptionValue> {
    option
        .values
        .iter()
        .filter(|value| evaluate_rule_set(value.conditional_logic.as_ref(), selections))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use configurator_core::{
        LogicOperator, ManipulationType, Rule, RuleOperator, RuleSet, RuleValue,
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

    fn option(id: &str, values: Vec<OptionValue>) -> OptionDef {
        OptionDef {
            id: id.to_string(),
            name: id.to_string(),
            manipulation: ManipulationType::Visibility,
            target_components: Vec::new(),
            default_behavior: Default::default(),
            conditional_logic: None,
            values,
        }
    }

    fn plain_values(ids: &[&str]) -> Vec<OptionValue> {
        ids.iter().map(|id| OptionValue::new(*id, *id)).collect()
    }

    #[test]
    fn unconditional_options_always_visible() {
        let catalog = Catalog {
            options: vec![
                option("trim", plain_values(&["standard", "sport"])),
                option("color", plain_values(&["red"])),
            ],
        };
        let visible = visible_options(&catalog, &SelectionState::new());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn conditional_option_tracks_prerequisite() {
        let mut spoiler = option("spoiler", plain_values(&["none", "carbon"]));
        spoiler.conditional_logic = Some(requires("trim", "sport"));

        let catalog = Catalog {
            options: vec![option("trim", plain_values(&["standard", "sport"])), spoiler],
        };

        let standard: SelectionState = [("trim", "standard")].into_iter().collect();
        let ids: Vec<&str> = visible_options(&catalog, &standard)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["trim"]);

        let sport: SelectionState = [("trim", "sport")].into_iter().collect();
        let ids: Vec<&str> = visible_options(&catalog, &sport)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["trim", "spoiler"]);
    }

    #[test]
    fn authored_order_never_resorted() {
        let catalog = Catalog {
            options: vec![
                option("zeta", plain_values(&["a"])),
                option("alpha", plain_values(&["a"])),
                option("mid", plain_values(&["a"])),
            ],
        };
        let ids: Vec<&str> = visible_options(&catalog, &SelectionState::new())
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn value_visibility_is_independent_of_option_visibility() {
        // The option itself is gated off, but its values still resolve.
        let mut opt = option("color", plain_values(&["red", "blue"]));
        opt.conditional_logic = Some(requires("trim", "sport"));
        opt.values[1].conditional_logic = Some(requires("trim", "sport"));

        let standard: SelectionState = [("trim", "standard")].into_iter().collect();
        let ids: Vec<&str> = visible_values(&opt, &standard)
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, ["red"]);
    }

    #[test]
    fn gated_value_appears_once_prerequisite_met() {
        let mut opt = option("color", plain_values(&["red", "blue"]));
        opt.values[1].conditional_logic = Some(requires("trim", "sport"));

        let standard: SelectionState = [("trim", "standard")].into_iter().collect();
        let ids: Vec<&str> = visible_values(&opt, &standard)
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, ["red"]);

        let sport: SelectionState = [("trim", "sport")].into_iter().collect();
        let ids: Vec<&str> = visible_values(&opt, &sport)
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, ["red", "blue"]);
    }
}
