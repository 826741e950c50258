//! Rule-graph cycle detection.
//!
//! The engine survives a live cycle only through its bounded reconcile loop;
//! prevention belongs here, at authoring time. An authoring surface should
//! refuse to save a rule set that closes a cycle.

use configurator_core::Catalog;
use std::collections::HashMap;

/// Find cycles in the option-reference graph.
///
/// An edge `a -> b` exists when any rule in option `a`'s conditional logic,
/// or in any of its values' conditional logic, references option `b`.
/// Disabled rule sets still contribute edges — the author can re-enable them
/// without re-validating.
///
/// Each cycle is returned as the option-id path that closes it, e.g.
/// `["a", "b"]` for `a -> b -> a`. References to unknown options contribute
/// no edge (the definition-error pass reports those). Returns an empty list
/// for an acyclic catalog.
pub fn find_rule_cycles(catalog: &Catalog) -> Vec<Vec<String>> {
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();

    for option in &catalog.options {
        let rule_sets = option
            .conditional_logic
            .iter()
            .chain(option.values.iter().filter_map(|v| v.conditional_logic.as_ref()));

        let out = edges.entry(option.id.as_str()).or_default();
        for rule_set in rule_sets {
            for rule in &rule_set.rules {
                let target = rule.option_id.as_str();
                if catalog.option(target).is_some() && !out.contains(&target) {
                    out.push(target);
                }
            }
        }
    }

    let mut walk = CycleWalk {
        edges: &edges,
        marks: HashMap::new(),
        path: Vec::new(),
        cycles: Vec::new(),
    };
    // Catalog order keeps the output deterministic.
    for option in &catalog.options {
        if walk.mark(option.id.as_str()) == Mark::White {
            walk.visit(option.id.as_str());
        }
    }
    walk.cycles
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Gray,
    Black,
}

struct CycleWalk<'a> {
    edges: &'a HashMap<&'a str, Vec<&'a str>>,
    marks: HashMap<&'a str, Mark>,
    path: Vec<&'a str>,
    cycles: Vec<Vec<String>>,
}

impl<'a> CycleWalk<'a> {
    fn mark(&self, node: &str) -> Mark {
        self.marks.get(node).copied().unwrap_or(Mark::White)
    }

    // Depth-first, three-color. Recursion depth is bounded by the option
    // count, which authoring keeps small.
    fn visit(&mut self, node: &'a str) {
        self.marks.insert(node, Mark::Gray);
        self.path.push(node);

        if let Some(targets) = self.edges.get(node) {
            for &target in targets {
                match self.mark(target) {
                    Mark::White => self.visit(target),
                    Mark::Gray => {
                        // Back edge: the path from `target` to here closes
                        // a cycle.
                        let start = self
                            .path
                            .iter()
                            .position(|&p| p == target)
                            .unwrap_or(0);
                        self.cycles
                            .push(self.path[start..].iter().map(|s| s.to_string()).collect());
                    }
                    Mark::Black => {}
                }
            }
        }

        self.path.pop();
        self.marks.insert(node, Mark::Black);
    }
}
