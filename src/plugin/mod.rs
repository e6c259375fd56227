//! Build plugins as opaque capabilities.
//!
//! # Module Structure
//!
//! ```text
//! plugin/
//! ├── context    # BuildContext, BuildPlan, Stage
//! ├── registry   # name -> factory lookup
//! ├── sitemap    # built-in `sitemap`
//! └── tailwind   # built-in `tailwind`
//! ```
//!
//! A plugin never renders anything. Its `apply` adds [`Stage`]s to the
//! [`BuildContext`], telling the external build what to run and with which
//! settings.

mod context;
mod registry;
mod sitemap;
mod tailwind;

pub use context::{BuildContext, BuildPlan, Hook, Stage};
pub use registry::{PluginFactory, PluginRegistry};
pub use sitemap::{ChangeFreq, SitemapPlugin};
pub use tailwind::TailwindPlugin;

use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{fmt, sync::Arc};
use thiserror::Error;

/// Plugin-related errors
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("unknown plugin '{0}'")]
    Unknown(String),

    #[error("invalid options for plugin '{plugin}': {reason}")]
    InvalidOptions { plugin: &'static str, reason: String },

    #[error("plugin '{plugin}' cannot run: {reason}")]
    Requirement { plugin: &'static str, reason: String },
}

/// A build capability configured by quire and executed elsewhere.
pub trait Plugin: fmt::Debug + Send + Sync {
    /// Registry name, e.g. `sitemap`.
    fn name(&self) -> &'static str;

    /// Options exactly as supplied in the config file.
    fn options(&self) -> &toml::Table;

    /// Contribute this plugin's stages to the build.
    fn apply(&self, ctx: &mut BuildContext<'_>) -> Result<(), PluginError>;
}

/// Shared handle to a [`Plugin`].
///
/// Two refs are equal when they name the same plugin with the same options.
#[derive(Clone)]
pub struct PluginRef(Arc<dyn Plugin>);

impl PluginRef {
    pub fn new<P: Plugin + 'static>(plugin: P) -> Self {
        Self(Arc::new(plugin))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn options(&self) -> &toml::Table {
        self.0.options()
    }

    pub fn apply(&self, ctx: &mut BuildContext<'_>) -> Result<(), PluginError> {
        self.0.apply(ctx)
    }
}

impl fmt::Debug for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for PluginRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.options() == other.options()
    }
}

impl Serialize for PluginRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PluginRef", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("options", self.options())?;
        state.end()
    }
}

/// Deserialize a plugin's option table into its typed options.
fn parse_options<T>(plugin: &'static str, options: &toml::Table) -> Result<T, PluginError>
where
    T: serde::de::DeserializeOwned,
{
    toml::Value::Table(options.clone())
        .try_into()
        .map_err(|e: toml::de::Error| PluginError::InvalidOptions {
            plugin,
            reason: e.message().to_string(),
        })
}
