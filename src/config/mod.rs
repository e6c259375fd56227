//! Project configuration management for `quire.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── markdown   # [markdown]
//! │   ├── plugins    # [[plugins]]
//! │   ├── site       # [site]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! Loading is split in three steps so every problem is reported at once:
//! parse (unknown fields are collected, not fatal), [`ProjectConfig::validate`]
//! (collects diagnostics), then [`ProjectConfig::compose`] (builds the
//! immutable [`SiteConfig`]).

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{MarkdownSection, PluginEntry, RehypeEntry, SiteSection, ThemeSection};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    compose::{SiteConfig, compose},
    log,
    plugin::PluginRegistry,
};
use anyhow::{Result, bail};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing quire.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Deployment URL, base path, output directory
    #[serde(default)]
    pub site: SiteSection,

    /// Plugin factory invocations, in order
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,

    /// Markdown transforms (absent: no transforms)
    #[serde(default)]
    pub markdown: Option<MarkdownSection>,

    /// Theme tokens
    #[serde(default)]
    pub theme: ThemeSection,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file, then applies CLI
    /// overrides. Validation is left to the caller.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file '{}' not found. Run 'quire init' to create one.",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path, cli.strict)?;
        config.config_path = config_path;
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if strict {
                bail!("Aborted due to unknown config fields (--strict)");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global CLI overrides (`--site-url`, `--base`, `--output`).
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(url) = &cli.site_url {
            self.site.url = Some(url.clone());
        }
        Self::update_option(&mut self.site.base, cli.base.as_ref());
        Self::update_option(&mut self.site.out_dir, cli.output.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation & composition
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once. Warnings are
    /// printed even when validation succeeds.
    pub fn validate(&self, registry: &PluginRegistry) -> Result<(), ConfigError> {
        let diag = self.diagnostics(registry);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every section check without printing anything.
    pub fn diagnostics(&self, registry: &PluginRegistry) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::plugins::validate(&self.plugins, registry, &mut diag);
        if let Some(markdown) = &self.markdown {
            markdown.validate(&mut diag);
        }
        self.theme.validate(&mut diag);

        diag
    }

    /// Resolve plugins and compose the build descriptor.
    pub fn compose(&self, registry: &PluginRegistry) -> Result<SiteConfig, ConfigError> {
        let plugins = section::plugins::resolve(&self.plugins, registry)?;
        compose(
            self.site.settings()?,
            plugins,
            self.markdown.as_ref().map(MarkdownSection::to_pipeline),
            self.theme.to_tokens(),
        )
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a valid `[site]` section prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ProjectConfig {
    let config = format!("[site]\nurl = \"https://blog.example.com\"\n{extra}");
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
