//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://blog.example.com"   # Absolute deployment URL (required)
//! base = "/"                         # Path the site is served under
//! out_dir = "./dist"                 # Build output directory (relative to site root)
//! ```

use crate::compose::{SiteSettings, check_base_path, check_site_url};
use crate::config::{ConfigDiagnostics, ConfigError};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the site is deployed and where the build writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSection {
    /// Absolute URL the site is deployed to.
    #[config(inline_doc = "required, e.g. https://blog.example.com")]
    pub url: Option<String>,

    /// Path the site is served under, must start with "/".
    #[config(default = "/")]
    pub base: String,

    /// Build output directory (relative to site root, "~" is expanded).
    #[config(default = "./dist")]
    pub out_dir: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: None,
            base: "/".into(),
            out_dir: "./dist".into(),
        }
    }
}

impl SiteSection {
    /// Validate site settings.
    ///
    /// # Checks
    /// - `url` is set and is an absolute http(s) URL with a host
    /// - `base` starts with `/`
    /// - `out_dir` is not empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.configured_url() {
            None => diag.error_with_hint(
                Self::FIELDS.url,
                format!("{} is required", Self::FIELDS.url),
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            ),
            Some(url) => {
                if let Err(ConfigError::InvalidUrl { reason, .. }) = check_site_url(url) {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {reason}"),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if check_base_path(&self.base).is_err() {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base path '{}' must start with '/'", self.base),
                format!("try \"/{}\"", self.base.trim_start_matches('/')),
            );
        }

        if self.out_dir.as_os_str().is_empty() {
            diag.error(Self::FIELDS.out_dir, "output directory must not be empty");
        }
    }

    /// The site URL, treating a blank value as unset.
    fn configured_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Output directory with `~` expanded.
    pub fn expanded_out_dir(&self) -> PathBuf {
        expand_tilde(&self.out_dir)
    }

    /// Site inputs for composition.
    pub fn settings(&self) -> Result<SiteSettings, ConfigError> {
        let url = self
            .configured_url()
            .ok_or(ConfigError::MissingField(Self::FIELDS.url))?;
        Ok(SiteSettings::new(url, self.base.clone(), self.expanded_out_dir()))
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
