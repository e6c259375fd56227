//! Build descriptor composition.
//!
//! [`compose`] turns validated inputs into the one immutable [`SiteConfig`]
//! the external build consumes. It performs no I/O and never mutates its
//! inputs; plugin-specific options are checked by each plugin's factory
//! before a [`PluginRef`] exists.
//!
//! ```ignore
//! let site = compose(
//!     SiteSettings::new("https://blog.example.com", "/", "./dist"),
//!     vec![tailwind, sitemap],
//!     Some(MarkdownPipeline::default().with_math()),
//!     ThemeTokens::default(),
//! )?;
//! assert_eq!(site.base_url().as_str(), "https://blog.example.com/");
//! ```

mod markdown;
mod theme;

pub use markdown::{MATH_REHYPE, MATH_REMARK, MarkdownPipeline, RehypeStep, TransformRef};
pub use theme::{ThemeTokens, is_valid_color};

use crate::config::{ConfigError, FieldPath};
use crate::plugin::PluginRef;
use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Site-level inputs of [`compose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Absolute deployment URL.
    pub site: String,
    /// Path the site is served under, starting with `/`.
    pub base_path: String,
    /// Where the external build writes its output.
    pub output_directory: PathBuf,
}

impl SiteSettings {
    pub fn new(
        site: impl Into<String>,
        base_path: impl Into<String>,
        output_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            site: site.into(),
            base_path: base_path.into(),
            output_directory: output_directory.into(),
        }
    }
}

/// The composed build descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    site: String,
    base_path: String,
    output_directory: PathBuf,
    plugins: Vec<PluginRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    markdown: Option<MarkdownPipeline>,
    theme: ThemeTokens,
    #[serde(skip)]
    site_url: Url,
}

/// Merge the inputs into one [`SiteConfig`].
///
/// Plugin and transform order is kept exactly as given. An absent markdown
/// pipeline means markdown content is rendered without transforms.
///
/// # Errors
///
/// - [`ConfigError::MissingField`] if `site` or `output_directory` is empty
/// - [`ConfigError::InvalidUrl`] if `site` is not an absolute http(s) URL
/// - [`ConfigError::InvalidBasePath`] if `base_path` does not start with `/`
pub fn compose(
    settings: SiteSettings,
    plugins: Vec<PluginRef>,
    markdown: Option<MarkdownPipeline>,
    theme: ThemeTokens,
) -> Result<SiteConfig, ConfigError> {
    if settings.site.trim().is_empty() {
        return Err(ConfigError::MissingField(FieldPath::new("site.url")));
    }
    let site_url = check_site_url(&settings.site)?;
    check_base_path(&settings.base_path)?;
    if settings.output_directory.as_os_str().is_empty() {
        return Err(ConfigError::MissingField(FieldPath::new("site.out_dir")));
    }

    Ok(SiteConfig {
        site: settings.site,
        base_path: settings.base_path,
        output_directory: settings.output_directory,
        plugins,
        markdown,
        theme,
        site_url,
    })
}

/// Parse `url` and require an http(s) scheme with a host.
pub fn check_site_url(url: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    if url.trim() != url {
        return Err(invalid("URL must not have leading or trailing whitespace".into()));
    }
    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL must have a valid host".into()));
    }
    Ok(parsed)
}

pub fn check_base_path(base: &str) -> Result<(), ConfigError> {
    if base.starts_with('/') {
        Ok(())
    } else {
        Err(ConfigError::InvalidBasePath(base.to_string()))
    }
}

impl SiteConfig {
    /// Site URL exactly as configured.
    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.name())
    }

    pub fn markdown(&self) -> Option<&MarkdownPipeline> {
        self.markdown.as_ref()
    }

    pub fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    /// Site origin joined with the base path, always ending in `/`.
    ///
    /// `https://example.com` + `/blog` -> `https://example.com/blog/`
    pub fn base_url(&self) -> Url {
        let mut url = self.site_url.clone();
        if self.base_path.ends_with('/') {
            url.set_path(&self.base_path);
        } else {
            url.set_path(&format!("{}/", self.base_path));
        }
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Absolute URL of `path` under the base path.
    ///
    /// Fails when `path` resolves outside the base URL, e.g. `../x` or a
    /// path that parses as its own scheme (`javascript:x`).
    pub fn url_for(&self, path: &str) -> Result<Url, ConfigError> {
        let base = self.base_url();
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: path.to_string(),
            reason,
        };

        let url = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        if !url.as_str().starts_with(base.as_str()) {
            return Err(invalid(format!("resolves outside of {base}")));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginRegistry;
    use std::collections::BTreeMap;

    fn settings(site: &str, base: &str) -> SiteSettings {
        SiteSettings::new(site, base, "./dist")
    }

    fn plugins(names: &[&str]) -> Vec<PluginRef> {
        let registry = PluginRegistry::with_builtins();
        names
            .iter()
            .map(|name| registry.create(name, &toml::Table::new()).unwrap())
            .collect()
    }

    #[test]
    fn test_compose_valid() {
        let site = compose(
            settings("https://blog.example.com", "/"),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        assert_eq!(site.site(), "https://blog.example.com");
        assert_eq!(site.base_path(), "/");
        assert!(site.markdown().is_none());
    }

    #[test]
    fn test_compose_returns_inputs_unchanged() {
        let markdown = MarkdownPipeline::new(
            vec![TransformRef::new("remark-gfm")],
            vec![RehypeStep::bare("rehype-slug")],
        );
        let theme = ThemeTokens::new(
            vec!["./src/**/*.md".into()],
            BTreeMap::from([("inter".into(), vec!["Inter".into(), "sans-serif".into()])]),
            BTreeMap::from([("accent".into(), "#06b6d4".into())]),
        );
        let input_plugins = plugins(&["tailwind", "sitemap"]);

        let site = compose(
            SiteSettings::new("https://x.com/blog", "/blog/", "out/site"),
            input_plugins.clone(),
            Some(markdown.clone()),
            theme.clone(),
        )
        .unwrap();

        assert_eq!(site.site(), "https://x.com/blog");
        assert_eq!(site.base_path(), "/blog/");
        assert_eq!(site.output_directory(), Path::new("out/site"));
        assert_eq!(site.plugins(), &input_plugins[..]);
        assert_eq!(site.markdown(), Some(&markdown));
        assert_eq!(site.theme(), &theme);
    }

    #[test]
    fn test_compose_rejects_relative_url() {
        let err = compose(settings("not-a-url", "/"), vec![], None, ThemeTokens::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_compose_rejects_base_without_slash() {
        let err = compose(
            settings("https://x.com", "no-leading-slash"),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBasePath(ref b) if b == "no-leading-slash"));
    }

    #[test]
    fn test_compose_missing_fields() {
        let err = compose(settings("", "/"), vec![], None, ThemeTokens::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(f) if f.as_str() == "site.url"));

        let err = compose(
            SiteSettings::new("https://x.com", "/", ""),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(f) if f.as_str() == "site.out_dir"));
    }

    #[test]
    fn test_plugin_order_preserved() {
        let site = compose(
            settings("https://x.com", "/"),
            plugins(&["sitemap", "tailwind"]),
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        let names: Vec<_> = site.plugin_names().collect();
        assert_eq!(names, ["sitemap", "tailwind"]);
    }

    #[test]
    fn test_check_site_url() {
        assert!(check_site_url("https://blog.example.com").is_ok());
        assert!(check_site_url("http://localhost:4321").is_ok());
        assert!(check_site_url("ftp://example.com").is_err());
        assert!(check_site_url("mailto:me@example.com").is_err());
        assert!(check_site_url("/relative/path").is_err());
    }

    #[test]
    fn test_check_site_url_rejects_surrounding_whitespace() {
        for url in [" https://x.com ", "https://x.com\n", "\thttps://x.com"] {
            let err = compose(settings(url, "/"), vec![], None, ThemeTokens::default())
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidUrl { url: ref u, .. } if u == url),
                "expected `{url:?}` to be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_and_url_for() {
        let site = compose(
            settings("https://example.com", "/blog"),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        assert_eq!(site.base_url().as_str(), "https://example.com/blog/");
        assert_eq!(
            site.url_for("/posts/hello/").unwrap().as_str(),
            "https://example.com/blog/posts/hello/"
        );

        let root = compose(
            settings("https://example.com/", "/"),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        assert_eq!(root.base_url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_url_for_stays_under_base() {
        let site = compose(
            settings("https://x.com", "/blog"),
            vec![],
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        for path in ["javascript:alert", "c:sitemap.xml", "../etc/", "/drafts/../../x"] {
            assert!(
                matches!(site.url_for(path), Err(ConfigError::InvalidUrl { .. })),
                "expected `{path}` to be rejected"
            );
        }
        assert_eq!(
            site.url_for("/drafts/../posts/").unwrap().as_str(),
            "https://x.com/blog/posts/"
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let site = compose(
            settings("https://example.com", "/"),
            plugins(&["tailwind"]),
            None,
            ThemeTokens::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&site).unwrap();
        assert_eq!(json["site"], "https://example.com");
        assert_eq!(json["basePath"], "/");
        assert_eq!(json["outputDirectory"], "./dist");
        assert_eq!(json["plugins"][0]["name"], "tailwind");
        assert!(json.get("markdown").is_none());
        assert!(json.get("siteUrl").is_none());
    }
}
