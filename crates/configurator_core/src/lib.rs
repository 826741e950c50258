//! Core data structures for the product configurator
//!
//! This crate provides the fundamental types for representing a configurable
//! product and the scene it drives:
//! - `Catalog` - The full set of authored option definitions
//! - `OptionDef` / `OptionValue` - A user-facing choice and its concrete values
//! - `RuleSet` / `Rule` - Conditional visibility expressions
//! - `SelectionState` - The caller-owned map of current selections
//! - `SceneComponent` / `ComponentSet` - Named render targets, flat-indexed by name
//! - `Color` - Flat base color parsed from hex notation

mod color;
mod component;
mod option;
mod rules;
mod selection;

pub use color::Color;
pub use component::{ComponentMutation, ComponentSet, SceneComponent};
pub use option::{Catalog, DefaultBehavior, ManipulationType, OptionDef, OptionValue};
pub use rules::{LogicOperator, Rule, RuleOperator, RuleSet, RuleValue};
pub use selection::{ChangeReason, SelectionChange, SelectionState};
