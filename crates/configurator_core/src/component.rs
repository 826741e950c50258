//! Named scene components and the mutation instructions emitted against them.
//!
//! Components are created and destroyed by the external scene loader. The
//! engine only proposes mutations; it never owns component lifetime.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named render target with its baseline (as-loaded) state.
///
/// `original_color` is `None` when the component's material has no flat base
/// color to set; material options then have no effect on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneComponent {
    pub name: String,
    pub original_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_color: Option<Color>,
}

impl SceneComponent {
    /// A visible component without a recolorable material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_visible: true,
            original_color: None,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.original_visible = visible;
        self
    }

    /// Mark the component's material as supporting a flat base color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.original_color = Some(color);
        self
    }
}

/// Flat, pre-indexed table of scene components.
///
/// Built once after asset load. Lookup is by lowercased name, which makes the
/// engine's exact case-insensitive matching a single hash probe instead of a
/// scene-graph walk per evaluation. Insertion order is preserved and drives
/// the order of emitted mutations.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    components: Vec<SceneComponent>,
    by_name: HashMap<String, usize>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component. A component whose lowercased name collides with an
    /// existing entry replaces it in place, keeping the original position.
    pub fn insert(&mut self, component: SceneComponent) {
        let key = component.name.to_lowercase();
        match self.by_name.get(&key) {
            Some(&idx) => self.components[idx] = component,
            None => {
                self.by_name.insert(key, self.components.len());
                self.components.push(component);
            }
        }
    }

    /// Exact, case-insensitive lookup. Returns the component's position and
    /// data, or `None` if no component carries that name.
    pub fn get(&self, name: &str) -> Option<(usize, &SceneComponent)> {
        let idx = *self.by_name.get(&name.to_lowercase())?;
        Some((idx, &self.components[idx]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneComponent> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromIterator<SceneComponent> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = SceneComponent>>(iter: I) -> Self {
        let mut set = Self::new();
        for component in iter {
            set.insert(component);
        }
        set
    }
}

/// Final state for one component after an apply pass.
///
/// The renderer applies these atomically before the next frame. `color` is
/// `None` for components without a recolorable material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMutation {
    /// The component's name as loaded (original casing).
    pub component: String,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}
