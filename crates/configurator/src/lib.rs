//! Rule-driven product configurator engine.
//!
//! Single import for the whole engine: catalog data model, rule evaluation,
//! visibility resolution, selection reconciliation, component mapping, and
//! authoring-time validation.
//!
//! The expected control flow on every selection change:
//!
//! ```rust,ignore
//! use configurator::{stabilize, apply_configuration};
//!
//! // 1. Correct selections the change may have invalidated.
//! let outcome = stabilize(&catalog, &selections)?;
//! selections = outcome.selections;
//!
//! // 2. Map the consistent state onto the scene.
//! let mutations = apply_configuration(&components, &catalog, &selections);
//! // hand `mutations` to the renderer
//! ```

pub use configurator_core::{
    Catalog, ChangeReason, Color, ComponentMutation, ComponentSet, DefaultBehavior,
    LogicOperator, ManipulationType, OptionDef, OptionValue, Rule, RuleOperator, RuleSet,
    RuleValue, SceneComponent, SelectionChange, SelectionState,
};
pub use configurator_engine::{
    apply_configuration, evaluate_rule_set, reconcile, stabilize, visible_options, visible_values,
    ReconcileOutcome, StabilizeError, StableOutcome, RECONCILE_MAX_ITERATIONS,
};
pub use configurator_schema::{
    find_rule_cycles, load_catalog, load_catalog_from_bytes, parse_catalog, save_catalog,
    validate_catalog, validate_catalog_rules, CatalogError,
};
