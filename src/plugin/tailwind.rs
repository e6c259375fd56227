//! Built-in `tailwind` plugin.
//!
//! # Options
//!
//! ```toml
//! [[plugins]]
//! name = "tailwind"
//! options = { apply_base_styles = true, config_file = "tailwind.config.mjs" }
//! ```

use super::{BuildContext, Hook, Plugin, PluginError, parse_options};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TailwindOptions {
    /// Inject the framework's base layer.
    apply_base_styles: bool,
    /// Framework config the external build reads.
    config_file: PathBuf,
}

impl Default for TailwindOptions {
    fn default() -> Self {
        Self {
            apply_base_styles: true,
            config_file: "tailwind.config.mjs".into(),
        }
    }
}

/// Utility-first CSS generation driven by the theme tokens.
#[derive(Debug)]
pub struct TailwindPlugin {
    raw: toml::Table,
    options: TailwindOptions,
}

impl TailwindPlugin {
    pub const NAME: &'static str = "tailwind";

    pub fn from_options(raw: &toml::Table) -> Result<Self, PluginError> {
        let options: TailwindOptions = parse_options(Self::NAME, raw)?;
        if options.config_file.as_os_str().is_empty() {
            return Err(PluginError::InvalidOptions {
                plugin: Self::NAME,
                reason: "config_file must not be empty".into(),
            });
        }
        Ok(Self {
            raw: raw.clone(),
            options,
        })
    }
}

impl Plugin for TailwindPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn options(&self) -> &toml::Table {
        &self.raw
    }

    fn apply(&self, ctx: &mut BuildContext<'_>) -> Result<(), PluginError> {
        let theme = ctx.config().theme();
        // Without content globs the framework purges every class.
        if theme.content().is_empty() {
            return Err(PluginError::Requirement {
                plugin: Self::NAME,
                reason: "theme.content lists no files to scan".into(),
            });
        }

        let settings = json!({
            "configFile": self.options.config_file,
            "applyBaseStyles": self.options.apply_base_styles,
            "content": theme.content(),
            "theme": {
                "extend": {
                    "fontFamily": theme.font_families(),
                    "colors": theme.colors(),
                }
            },
        });
        ctx.add_stage(Self::NAME, Hook::Styles, settings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{SiteSettings, ThemeTokens, compose};
    use crate::plugin::PluginRef;
    use std::collections::BTreeMap;

    fn theme(content: Vec<String>) -> ThemeTokens {
        ThemeTokens::new(
            content,
            BTreeMap::from([("inter".into(), vec!["Inter".into(), "sans-serif".into()])]),
            BTreeMap::from([("primary".into(), "#2563eb".into())]),
        )
    }

    fn plan_for(plugin: TailwindPlugin, theme: ThemeTokens) -> Result<serde_json::Value, PluginError> {
        let site = compose(
            SiteSettings::new("https://blog.example.com", "/", "./dist"),
            vec![PluginRef::new(plugin)],
            None,
            theme,
        )
        .unwrap();
        let mut ctx = BuildContext::new(&site);
        site.plugins()[0].apply(&mut ctx)?;
        Ok(ctx.finish().stages[0].settings.clone())
    }

    #[test]
    fn test_defaults() {
        let plugin = TailwindPlugin::from_options(&toml::Table::new()).unwrap();
        assert!(plugin.options.apply_base_styles);
        assert_eq!(plugin.options.config_file, PathBuf::from("tailwind.config.mjs"));
        assert!(plugin.options().is_empty());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let raw: toml::Table = "purge = true".parse().unwrap();
        let err = TailwindPlugin::from_options(&raw).unwrap_err();
        assert!(matches!(err, PluginError::InvalidOptions { plugin: "tailwind", .. }));
    }

    #[test]
    fn test_apply_carries_theme_tokens() {
        let plugin = TailwindPlugin::from_options(&toml::Table::new()).unwrap();
        let settings = plan_for(plugin, theme(vec!["./src/**/*.astro".into()])).unwrap();
        assert_eq!(settings["content"][0], "./src/**/*.astro");
        assert_eq!(settings["theme"]["extend"]["colors"]["primary"], "#2563eb");
        assert_eq!(settings["theme"]["extend"]["fontFamily"]["inter"][1], "sans-serif");
        assert_eq!(settings["applyBaseStyles"], true);
    }

    #[test]
    fn test_apply_requires_content() {
        let plugin = TailwindPlugin::from_options(&toml::Table::new()).unwrap();
        let err = plan_for(plugin, theme(vec![])).unwrap_err();
        assert!(matches!(err, PluginError::Requirement { plugin: "tailwind", .. }));
    }
}
