//! `[[plugins]]` entries.
//!
//! # Example
//!
//! ```toml
//! [[plugins]]
//! name = "tailwind"
//!
//! [[plugins]]
//! name = "sitemap"
//! options = { changefreq = "weekly" }
//! ```
//!
//! Entries are resolved through the [`PluginRegistry`] in file order. The
//! option table is handed to the plugin's factory untouched.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::plugin::{PluginError, PluginRef, PluginRegistry};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

const FIELD: FieldPath = FieldPath::new("plugins");

/// One plugin factory invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub options: toml::Table,
}

impl PluginEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: toml::Table::new(),
        }
    }
}

/// Validate plugin entries against `registry`.
///
/// Unknown names and rejected options are errors. A plugin listed twice is
/// a warning since the external build would run it twice.
pub fn validate(entries: &[PluginEntry], registry: &PluginRegistry, diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (i, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            diag.error(FIELD, format!("plugin #{} has an empty name", i + 1));
            continue;
        }

        match registry.create(&entry.name, &entry.options) {
            Ok(_) => {}
            Err(PluginError::Unknown(name)) => diag.error_with_hint(
                FIELD,
                format!("unknown plugin '{name}'"),
                format!("available plugins: {}", registry.names().join(", ")),
            ),
            Err(e) => diag.error(FIELD, e.to_string()),
        }

        if !seen.insert(entry.name.as_str()) {
            diag.warn(FIELD, format!("'{}' is listed more than once", entry.name));
        }
    }
}

/// Resolve entries into plugin refs, keeping their order.
pub fn resolve(
    entries: &[PluginEntry],
    registry: &PluginRegistry,
) -> Result<Vec<PluginRef>, PluginError> {
    entries
        .iter()
        .map(|entry| registry.create(&entry.name, &entry.options))
        .collect()
}
