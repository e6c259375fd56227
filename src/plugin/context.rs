//! Build context and the plan it produces.

use super::PluginError;
use crate::compose::SiteConfig;
use serde::Serialize;

/// When the external build runs a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hook {
    /// While generating stylesheets.
    Styles,
    /// After every page has been written.
    PostBuild,
}

/// One unit of work contributed by a plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub plugin: &'static str,
    pub hook: Hook,
    pub settings: serde_json::Value,
}

/// Ordered stages for the external build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildPlan {
    pub stages: Vec<Stage>,
}

impl BuildPlan {
    /// Stages registered for `hook`, in plugin order.
    pub fn stages_for(&self, hook: Hook) -> impl Iterator<Item = &Stage> {
        self.stages.iter().filter(move |s| s.hook == hook)
    }
}

/// What a plugin sees while applying itself.
pub struct BuildContext<'a> {
    config: &'a SiteConfig,
    plan: BuildPlan,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            plan: BuildPlan::default(),
        }
    }

    /// Apply every plugin of `config` in order and return the plan.
    pub fn prepare(config: &'a SiteConfig) -> Result<BuildPlan, PluginError> {
        let mut ctx = Self::new(config);
        for plugin in config.plugins() {
            crate::debug!("plan"; "applying {}", plugin.name());
            plugin.apply(&mut ctx)?;
        }
        Ok(ctx.finish())
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    pub fn add_stage(&mut self, plugin: &'static str, hook: Hook, settings: serde_json::Value) {
        self.plan.stages.push(Stage {
            plugin,
            hook,
            settings,
        });
    }

    pub fn finish(self) -> BuildPlan {
        self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{SiteSettings, ThemeTokens, compose};
    use crate::plugin::PluginRegistry;

    #[test]
    fn test_prepare_follows_plugin_order() {
        let registry = PluginRegistry::with_builtins();
        let plugins = ["sitemap", "tailwind"]
            .iter()
            .map(|name| registry.create(name, &toml::Table::new()).unwrap())
            .collect();
        let theme = ThemeTokens::new(vec!["./src/**/*.md".into()], Default::default(), Default::default());
        let site = compose(
            SiteSettings::new("https://blog.example.com", "/", "./dist"),
            plugins,
            None,
            theme,
        )
        .unwrap();

        let plan = BuildContext::prepare(&site).unwrap();
        let order: Vec<_> = plan.stages.iter().map(|s| s.plugin).collect();
        assert_eq!(order, ["sitemap", "tailwind"]);
        assert_eq!(plan.stages_for(Hook::Styles).count(), 1);
        assert_eq!(plan.stages_for(Hook::PostBuild).count(), 1);
    }

    #[test]
    fn test_prepare_without_plugins() {
        let site = compose(
            SiteSettings::new("https://blog.example.com", "/", "./dist"),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        assert!(BuildContext::prepare(&site).unwrap().stages.is_empty());
    }

    #[test]
    fn test_hook_serializes_kebab_case() {
        assert_eq!(serde_json::to_value(Hook::PostBuild).unwrap(), "post-build");
    }
}
