//! Plugin lookup by name.

use super::{PluginError, PluginRef, SitemapPlugin, TailwindPlugin};
use rustc_hash::FxHashMap;

/// Builds a plugin from its option table, validating the options.
pub type PluginFactory = fn(&toml::Table) -> Result<PluginRef, PluginError>;

/// Registry of known plugin factories.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    factories: FxHashMap<&'static str, PluginFactory>,
}

impl PluginRegistry {
    /// Create an empty registry without any plugins registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with `tailwind` and `sitemap`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(TailwindPlugin::NAME, |options| {
            TailwindPlugin::from_options(options).map(PluginRef::new)
        });
        registry.register(SitemapPlugin::NAME, |options| {
            SitemapPlugin::from_options(options).map(PluginRef::new)
        });
        registry
    }

    /// Register a factory, replacing any previous one with the same name.
    pub fn register(&mut self, name: &'static str, factory: PluginFactory) {
        self.factories.insert(name, factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Invoke the factory registered under `name`.
    pub fn create(&self, name: &str, options: &toml::Table) -> Result<PluginRef, PluginError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| PluginError::Unknown(name.to_string()))?;
        factory(options)
    }
}
