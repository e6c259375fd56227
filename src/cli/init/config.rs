//! Configuration file generation.
//!
//! Creates quire.toml and ignore files for new projects.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use crate::config::{MarkdownSection, SiteSection, ThemeSection};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Plugins enabled in a fresh project.
const DEFAULT_PLUGINS: &[&str] = &["tailwind", "sitemap"];

/// Generate quire.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# quire configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteSection::template_with_header());
    out.push('\n');

    // [[plugins]] entries
    out.push_str("# Plugins, applied in the order listed.\n");
    for name in DEFAULT_PLUGINS {
        out.push_str(&format!("[[plugins]]\nname = \"{name}\"\n\n"));
    }

    // [markdown] section
    out.push_str(&MarkdownSection::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeSection::template_with_header());
    out.push_str("\n# [theme.font_family]\n# inter = [\"Inter\", \"sans-serif\"]\n");
    out.push_str("\n# [theme.colors]\n# primary = \"#2563eb\"\n");

    out
}

/// Write default config to `root/config_name`
pub fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(config_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/dist/`), only when it lies inside `root`
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let mut patterns = Vec::new();
    if let Some(relative) = inside_root(output_dir) {
        patterns.push(format!("/{}/", relative.display()));
    }
    patterns.push(".DS_Store".to_string());

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Normalize a relative `path` that stays below the project root.
///
/// `./dist` -> `dist`, `a/../dist` -> `dist`; `../public`, `/srv/www` and `.`
/// give `None`.
fn inside_root(path: &Path) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => relative.push(part),
            Component::ParentDir => {
                if !relative.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!relative.as_os_str().is_empty()).then_some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, ProjectConfig};
    use crate::plugin::PluginRegistry;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let template = generate_config_template();
        assert!(template.contains("[site]"));
        assert!(template.contains("[markdown]"));

        let config = ProjectConfig::from_str(&template).unwrap();
        assert!(config.site.url.is_none());
        assert_eq!(config.site, SiteSection::default());
        assert_eq!(config.plugins.len(), 2);
        assert_eq!(config.markdown, Some(MarkdownSection::default()));
        assert_eq!(config.theme, ThemeSection::default());

        // only the URL is left for the user to fill in
        let diag: ConfigDiagnostics = config.diagnostics(&PluginRegistry::with_builtins());
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.url"]);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), Path::new("quire.toml")).unwrap();

        let content = fs::read_to_string(temp.path().join("quire.toml")).unwrap();
        assert!(content.contains("[[plugins]]"));
        assert!(content.contains("[theme]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("./dist")).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/dist/"));
        assert!(!content.contains("/./"));
        assert!(temp.path().join(".ignore").exists());
    }

    #[test]
    fn test_ignore_files_skip_output_outside_root() {
        for output in ["../public", "/srv/www", ".", "dist/../.."] {
            let temp = TempDir::new().unwrap();
            write_ignore_files(temp.path(), Path::new(output)).unwrap();

            let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
            assert_eq!(content, ".DS_Store", "unexpected pattern for `{output}`");
        }
    }

    #[test]
    fn test_ignore_files_normalize_output() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("build/../site/out")).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert_eq!(content, "/site/out/\n.DS_Store");
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
