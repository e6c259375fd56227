//! Built-in `sitemap` plugin.
//!
//! # Options
//!
//! ```toml
//! [[plugins]]
//! name = "sitemap"
//! options = { filename = "sitemap-index.xml", changefreq = "weekly", priority = 0.7, exclude = ["/drafts/"] }
//! ```

use super::{BuildContext, Hook, Plugin, PluginError, parse_options};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Sitemap `<changefreq>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SitemapOptions {
    filename: String,
    changefreq: Option<ChangeFreq>,
    priority: Option<f64>,
    /// Path prefixes (under the base path) left out of the sitemap.
    exclude: Vec<String>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            filename: "sitemap-index.xml".into(),
            changefreq: None,
            priority: None,
            exclude: Vec::new(),
        }
    }
}

/// Sitemap emission after the build finishes.
#[derive(Debug)]
pub struct SitemapPlugin {
    raw: toml::Table,
    options: SitemapOptions,
}

impl SitemapPlugin {
    pub const NAME: &'static str = "sitemap";

    pub fn from_options(raw: &toml::Table) -> Result<Self, PluginError> {
        let options: SitemapOptions = parse_options(Self::NAME, raw)?;
        let invalid = |reason: String| PluginError::InvalidOptions {
            plugin: Self::NAME,
            reason,
        };

        if options.filename.trim().is_empty()
            || options.filename.contains(['/', '\\', ':', '?', '#'])
        {
            return Err(invalid(format!(
                "filename '{}' must be a plain file name",
                options.filename
            )));
        }
        if let Some(priority) = options.priority
            && !(0.0..=1.0).contains(&priority)
        {
            return Err(invalid(format!("priority {priority} is outside 0.0..=1.0")));
        }
        if let Some(prefix) = options.exclude.iter().find(|p| !p.starts_with('/')) {
            return Err(invalid(format!("exclude entry '{prefix}' must start with '/'")));
        }

        Ok(Self {
            raw: raw.clone(),
            options,
        })
    }
}

impl Plugin for SitemapPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn options(&self) -> &toml::Table {
        &self.raw
    }

    fn apply(&self, ctx: &mut BuildContext<'_>) -> Result<(), PluginError> {
        let config = ctx.config();
        let requirement = |reason: String| PluginError::Requirement {
            plugin: Self::NAME,
            reason,
        };

        let output = config
            .url_for(&self.options.filename)
            .map_err(|e| requirement(format!("cannot resolve sitemap URL: {e}")))?;
        let exclude = self
            .options
            .exclude
            .iter()
            .map(|prefix| config.url_for(prefix).map(String::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| requirement(format!("cannot resolve exclude prefix: {e}")))?;

        let settings = json!({
            "baseUrl": config.base_url().as_str(),
            "filename": self.options.filename,
            "location": output.as_str(),
            "changefreq": self.options.changefreq,
            "priority": self.options.priority,
            "exclude": exclude,
        });
        ctx.add_stage(Self::NAME, Hook::PostBuild, settings);
        Ok(())
    }
}
