//! `quire check`: load, validate and compose.

use crate::{
    cli::Cli,
    compose::SiteConfig,
    config::ProjectConfig,
    debug, log,
    plugin::{BuildContext, BuildPlan, Hook, PluginRegistry},
    utils::plural::plural_count,
};
use anyhow::Result;

/// Load quire.toml and compose the descriptor, failing on any diagnostic.
pub fn load_site(cli: &Cli, registry: &PluginRegistry) -> Result<SiteConfig> {
    let config = ProjectConfig::load(cli)?;
    debug!("config"; "loaded {}", config.config_path.display());

    config.validate(registry)?;
    let site = config.compose(registry)?;
    debug!("config"; "composed descriptor for {}", site.base_url());
    Ok(site)
}

/// Validate the project and print a short summary.
///
/// The plugins are applied once as well, so requirement failures surface
/// here rather than in the external build.
pub fn check_project(site: &SiteConfig) -> Result<()> {
    let plan = BuildContext::prepare(site)?;

    log!("check"; "site {} -> {}", site.base_url(), site.output_directory().display());
    log!(
        "check";
        "{} ({}), {}",
        plural_count(site.plugins().len(), "plugin"),
        site.plugin_names().collect::<Vec<_>>().join(", "),
        stage_summary(&plan)
    );
    log!("check"; "{}", markdown_summary(site));
    log!(
        "check";
        "theme: {}, {}",
        plural_count(site.theme().font_families().len(), "font stack"),
        plural_count(site.theme().colors().len(), "color")
    );
    Ok(())
}

fn stage_summary(plan: &BuildPlan) -> String {
    format!(
        "styles: {}, post-build: {}",
        plural_count(plan.stages_for(Hook::Styles).count(), "stage"),
        plural_count(plan.stages_for(Hook::PostBuild).count(), "stage")
    )
}

fn markdown_summary(site: &SiteConfig) -> String {
    match site.markdown() {
        Some(markdown) => format!(
            "remark: {}, rehype: {}",
            plural_count(markdown.remark_steps().len(), "step"),
            plural_count(markdown.rehype_steps().len(), "step")
        ),
        None => "markdown: no transforms".to_string(),
    }
}
