//! The component mapper: from resolved configuration state to an ordered
//! list of component mutations.

use crate::{visible_options, visible_values};
use configurator_core::{
    Catalog, Color, ComponentMutation, ComponentSet, DefaultBehavior, ManipulationType, OptionDef,
    OptionValue, SelectionState,
};

/// Map the resolved configuration onto the known scene components.
///
/// Deterministic and idempotent. Every pass starts from each component's
/// original state (the reset phase), so side effects from a previous pass
/// never leak into the next one. Visible options are then applied in
/// authored order; when several options touch the same component, the last
/// option wins — an intentional precedence rule, not an accident.
///
/// Options whose selection is unset, or whose selected value is not
/// currently visible, are skipped entirely: their targets keep whatever
/// state the reset and earlier options left them in. Target entries naming
/// unknown components are ignored. Nothing here panics on malformed data.
///
/// Returns the final `{visible, color}` state per known component, in
/// component-set insertion order, for the renderer to apply atomically.
pub fn apply_configuration(
    components: &ComponentSet,
    catalog: &Catalog,
    selections: &SelectionState,
) -> Vec<ComponentMutation> {
    // Reset phase: every component starts from its as-loaded state.
    let mut states: Vec<(bool, Option<Color>)> = components
        .iter()
        .map(|c| (c.original_visible, c.original_color))
        .collect();

    for option in visible_options(catalog, selections) {
        let Some(selected) = resolve_selected_value(option, selections) else {
            continue;
        };

        match option.manipulation {
            ManipulationType::Visibility => {
                apply_visibility(components, &mut states, option, selected);
            }
            ManipulationType::Material => {
                apply_material(components, &mut states, option, selected);
            }
        }
    }

    components
        .iter()
        .zip(states)
        .map(|(component, (visible, color))| ComponentMutation {
            component: component.name.clone(),
            visible,
            color,
        })
        .collect()
}

/// The option's selected value, provided it is set and currently visible.
fn resolve_selected_value<'a>(
    option: &'a OptionDef,
    selections: &SelectionState,
) -> Option<&'a OptionValue> {
    let selected = selections.selected(&option.id)?;
    visible_values(option, selections)
        .into_iter()
        .find(|v| v.id == selected)
}

/// Baseline every target to the option's default behavior, then invert the
/// selected value's override list.
fn apply_visibility(
    components: &ComponentSet,
    states: &mut [(bool, Option<Color>)],
    option: &OptionDef,
    selected: &OptionValue,
) {
    let baseline = option.default_behavior.baseline_visible();

    for target in &option.target_components {
        if let Some((idx, _)) = components.get(target) {
            states[idx].0 = baseline;
        }
    }

    // The override list is the opposite-direction set: values list the
    // components to show under a Hide default, and to hide under a Show
    // default. Entries outside the option's target set are ignored.
    let overrides = match option.default_behavior {
        DefaultBehavior::Hide => selected.visible_components.as_deref(),
        DefaultBehavior::Show => selected.hidden_components.as_deref(),
    };
    let Some(overrides) = overrides else {
        return;
    };

    for name in overrides {
        if !option.targets_component(name) {
            continue;
        }
        if let Some((idx, _)) = components.get(name) {
            states[idx].0 = !baseline;
        }
    }
}

/// Set the selected value's color on every color-capable target.
fn apply_material(
    components: &ComponentSet,
    states: &mut [(bool, Option<Color>)],
    option: &OptionDef,
    selected: &OptionValue,
) {
    let Some(raw) = selected.color.as_deref() else {
        return;
    };
    // Unparseable color strings are definition errors reported by the
    // schema validator; here they simply have no effect.
    let Some(color) = Color::parse_hex(raw) else {
        return;
    };

    for target in &option.target_components {
        if let Some((idx, component)) = components.get(target) {
            if component.original_color.is_some() {
                states[idx].1 = Some(color);
            }
        }
    }
}
