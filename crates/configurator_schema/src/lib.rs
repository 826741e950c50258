//! Catalog loading and authoring-time validation
//!
//! This crate is the authoring surface's side of the engine contract. It
//! loads catalogs from JSON, enforces the structural invariants the engine
//! relies on (unique ids, non-empty value lists, no self-referencing rules),
//! and provides two advisory passes the engine itself never runs:
//! definition-error reporting and rule-graph cycle detection.
//!
//! # Example
//!
//! ```rust,ignore
//! use configurator_schema::{load_catalog, validate_catalog_rules, find_rule_cycles};
//!
//! let catalog = load_catalog("catalog.json".as_ref())?;
//!
//! // Advisory: descriptive strings for the authoring UI.
//! for problem in validate_catalog_rules(&catalog) {
//!     eprintln!("{problem}");
//! }
//!
//! // Reject catalogs whose rule graph cycles.
//! assert!(find_rule_cycles(&catalog).is_empty());
//! ```

mod cycles;
mod validate;

pub use cycles::find_rule_cycles;
pub use validate::{validate_catalog, validate_catalog_rules};

use configurator_core::Catalog;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;

    parse_catalog(&content)
}

/// Parse a catalog from a JSON string
///
/// Runs structural validation after parsing; a catalog that violates the
/// engine's invariants is rejected here, before it can reach evaluation.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog =
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Save a catalog to a JSON file
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let content = serde_json::to_string_pretty(catalog)
        .map_err(|e| CatalogError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| CatalogError::IoError(e.to_string()))?;

    Ok(())
}

/// Load a catalog from bytes
pub fn load_catalog_from_bytes(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let catalog: Catalog =
        serde_json::from_slice(bytes).map_err(|e| CatalogError::ParseError(e.to_string()))?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}
