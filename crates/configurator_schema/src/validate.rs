//! Catalog validation logic
//!
//! Two layers: [`validate_catalog`] enforces the structural invariants the
//! engine relies on and fails hard; [`validate_catalog_rules`] is the
//! advisory definition-error pass — descriptive strings for the authoring
//! UI, never blocking evaluation.

use crate::CatalogError;
use configurator_core::{
    Catalog, Color, ManipulationType, OptionDef, RuleOperator, RuleSet, RuleValue,
};
use std::collections::HashSet;

/// Validate that the catalog is structurally sound.
///
/// Rejects duplicate option ids, duplicate value ids within an option,
/// options with no values, and rules that reference their own owning option.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut option_ids = HashSet::new();

    for option in &catalog.options {
        if !option_ids.insert(option.id.as_str()) {
            return Err(CatalogError::ValidationError(format!(
                "Duplicate option id '{}'",
                option.id
            )));
        }

        if option.values.is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "Option '{}' has no values",
                option.id
            )));
        }

        let mut value_ids = HashSet::new();
        for value in &option.values {
            if !value_ids.insert(value.id.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "Option '{}' has duplicate value id '{}'",
                    option.id, value.id
                )));
            }
        }

        for (rule_set, place) in rule_sets_of(option) {
            for rule in &rule_set.rules {
                if rule.option_id == option.id {
                    return Err(CatalogError::ValidationError(format!(
                        "Rule {} in {} references its own option '{}'",
                        rule.id, place, option.id
                    )));
                }
            }
        }
    }

    Ok(())
}

/// The advisory definition-error pass.
///
/// Returns one descriptive string per problem: a rule referencing an unknown
/// option, a rule value id not found in the referenced option's value set, a
/// rule value shape that does not match its operator, and unparseable color
/// strings on material option values. The engine treats every flagged rule
/// as `false` and every flagged color as a no-op; this pass exists so the
/// authoring surface can say why.
pub fn validate_catalog_rules(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    for option in &catalog.options {
        for (rule_set, place) in rule_sets_of(option) {
            validate_rule_set(catalog, rule_set, &place, &mut errors);
        }

        if option.manipulation == ManipulationType::Material {
            for value in &option.values {
                if let Some(raw) = &value.color {
                    if Color::parse_hex(raw).is_none() {
                        errors.push(format!(
                            "Option '{}' value '{}' has unparseable color '{}'",
                            option.id, value.id, raw
                        ));
                    }
                }
            }
        }
    }

    errors
}

/// Every rule set an option carries, with a human-readable location.
fn rule_sets_of(option: &OptionDef) -> Vec<(&RuleSet, String)> {
    let mut sets = Vec::new();
    if let Some(rs) = &option.conditional_logic {
        sets.push((rs, format!("option '{}'", option.id)));
    }
    for value in &option.values {
        if let Some(rs) = &value.conditional_logic {
            sets.push((rs, format!("option '{}' value '{}'", option.id, value.id)));
        }
    }
    sets
}

fn validate_rule_set(catalog: &Catalog, rule_set: &RuleSet, place: &str, errors: &mut Vec<String>) {
    for rule in &rule_set.rules {
        let Some(referenced) = catalog.option(&rule.option_id) else {
            errors.push(format!(
                "Rule {} in {} references unknown option '{}'",
                rule.id, place, rule.option_id
            ));
            continue;
        };

        let value_ids: Vec<&str> = match (rule.operator, &rule.value) {
            (RuleOperator::Equals | RuleOperator::NotEquals, RuleValue::One(v)) => {
                vec![v.as_str()]
            }
            (RuleOperator::In | RuleOperator::NotIn, RuleValue::Many(vs)) => {
                vs.iter().map(String::as_str).collect()
            }
            (RuleOperator::Equals | RuleOperator::NotEquals, RuleValue::Many(_)) => {
                errors.push(format!(
                    "Rule {} in {} uses {:?} with a value set; expected a single value",
                    rule.id, place, rule.operator
                ));
                continue;
            }
            (RuleOperator::In | RuleOperator::NotIn, RuleValue::One(_)) => {
                errors.push(format!(
                    "Rule {} in {} uses {:?} with a single value; expected a value set",
                    rule.id, place, rule.operator
                ));
                continue;
            }
        };

        for value_id in value_ids {
            if referenced.value(value_id).is_none() {
                errors.push(format!(
                    "Rule {} in {} references value '{}' not found in option '{}'",
                    rule.id, place, value_id, rule.option_id
                ));
            }
        }
    }
}
