//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! content = ["./src/**/*.{astro,html,md,mdx}"]
//!
//! [theme.font_family]
//! inter = ["Inter", "sans-serif"]
//!
//! [theme.colors]
//! primary = "#2563eb"
//! secondary = "#64748b"
//! ```

use crate::compose::{ThemeTokens, is_valid_color};
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default glob: every source file type the CSS framework can find classes in.
pub const DEFAULT_CONTENT: &str = "./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}";

/// Theme tokens for the CSS framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSection {
    /// Files scanned for class names (glob patterns).
    pub content: Vec<String>,

    /// Font stacks by name, in fallback order.
    #[config(status = hidden)]
    pub font_family: BTreeMap<String, Vec<String>>,

    /// Semantic color names to CSS color values.
    #[config(status = hidden)]
    pub colors: BTreeMap<String, String>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            content: vec![DEFAULT_CONTENT.into()],
            font_family: BTreeMap::new(),
            colors: BTreeMap::new(),
        }
    }
}

impl ThemeSection {
    /// Validate theme tokens.
    ///
    /// # Checks
    /// - content globs are not empty strings
    /// - every font stack lists at least one font
    /// - `#`-prefixed colors are well-formed hex
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.content.iter().any(|glob| glob.trim().is_empty()) {
            diag.error(Self::FIELDS.content, "content globs must not be empty");
        }
        if self.content.is_empty() {
            diag.warn(
                Self::FIELDS.content,
                "no content globs, CSS classes will not be discovered",
            );
        }

        for (name, stack) in &self.font_family {
            if stack.is_empty() || stack.iter().any(|font| font.trim().is_empty()) {
                diag.error_with_hint(
                    Self::FIELDS.font_family,
                    format!("font stack '{name}' must list non-empty font names"),
                    format!("e.g. {name} = [\"Inter\", \"sans-serif\"]"),
                );
            }
        }

        for (name, value) in &self.colors {
            if !is_valid_color(value) {
                diag.error_with_hint(
                    Self::FIELDS.colors,
                    format!("color '{name}' has invalid value '{value}'"),
                    "use #rgb, #rrggbb or #rrggbbaa",
                );
            }
        }
    }

    pub fn to_tokens(&self) -> ThemeTokens {
        ThemeTokens::new(
            self.content.clone(),
            self.font_family.clone(),
            self.colors.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(content: &str) -> ConfigDiagnostics {
        let section: ThemeSection = toml::from_str(content).unwrap();
        let mut diag = ConfigDiagnostics::new();
        section.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let theme = ThemeSection::default();
        assert_eq!(theme.content, [DEFAULT_CONTENT]);
        assert!(theme.font_family.is_empty());
        assert!(theme.colors.is_empty());
    }

    #[test]
    fn test_tokens() {
        let section: ThemeSection = toml::from_str(
            r##"
[font_family]
inter = ["Inter", "sans-serif"]

[colors]
primary = "#2563eb"
accent = "#06b6d4"
"##,
        )
        .unwrap();
        let tokens = section.to_tokens();
        assert_eq!(tokens.content(), [DEFAULT_CONTENT]);
        assert_eq!(tokens.colors()["accent"], "#06b6d4");
        assert_eq!(tokens.font_families()["inter"].len(), 2);
    }

    #[test]
    fn test_validate_bad_tokens() {
        let diag = validate(
            r##"
content = [""]
[font_family]
mono = []
[colors]
primary = "#25"
"##,
        );
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["theme.content", "theme.font_family", "theme.colors"]);
    }

    #[test]
    fn test_validate_empty_content_warns() {
        let diag = validate("content = []");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
