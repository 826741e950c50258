//! Configuration resolution engine.
//!
//! Four operations, leaves first:
//! - [`evaluate_rule_set`] - pure boolean over a rule set and the current selections
//! - [`visible_options`] / [`visible_values`] - which options and values may be shown
//! - [`reconcile`] / [`stabilize`] - deterministic correction of invalid selections
//! - [`apply_configuration`] - map the resolved state to component mutations
//!
//! Everything here is a pure, synchronous function over plain data from
//! `configurator_core`. No I/O, no internal state, no panics on malformed
//! definitions: an unresolvable piece degrades to "no effect" and the rest of
//! the configuration keeps working.

mod apply;
mod evaluate;
mod reconcile;
mod visibility;

pub use apply::apply_configuration;
pub use evaluate::evaluate_rule_set;
pub use reconcile::{reconcile, stabilize, ReconcileOutcome, StabilizeError, StableOutcome};
pub use visibility::{visible_options, visible_values};

/// Maximum number of [`reconcile`] passes [`stabilize`] runs before giving up.
///
/// A selection map that keeps producing corrections past this many passes is
/// assumed to be cycling through a loop in the rule graph. The cap guarantees
/// termination; the caller gets [`StabilizeError::DidNotConverge`] instead of
/// a hang. Legitimate dependency chains converge in one pass per link, so a
/// catalog deep enough to hit this cap honestly would need a ten-option
/// prerequisite chain corrected in a single call.
pub const RECONCILE_MAX_ITERATIONS: u32 = 10;
