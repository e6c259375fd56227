//! Theme tokens handed to the CSS framework.

use serde::Serialize;
use std::collections::BTreeMap;

/// Font stacks, semantic colors and the globs scanned for class names.
///
/// Maps are sorted so the emitted descriptor is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    content: Vec<String>,
    font_families: BTreeMap<String, Vec<String>>,
    colors: BTreeMap<String, String>,
}

impl ThemeTokens {
    pub fn new(
        content: Vec<String>,
        font_families: BTreeMap<String, Vec<String>>,
        colors: BTreeMap<String, String>,
    ) -> Self {
        Self {
            content,
            font_families,
            colors,
        }
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn font_families(&self) -> &BTreeMap<String, Vec<String>> {
        &self.font_families
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }
}

/// Check a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` literal.
///
/// Values not starting with `#` (named colors, `rgb(...)`, CSS variables)
/// are passed through to the CSS framework unchecked.
pub fn is_valid_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !value.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let tokens = ThemeTokens::new(
            vec!["./src/**/*.md".into()],
            BTreeMap::from([(
                "inter".to_string(),
                vec!["Inter".to_string(), "sans-serif".to_string()],
            )]),
            BTreeMap::from([("primary".to_string(), "#2563eb".to_string())]),
        );
        assert_eq!(tokens.content(), ["./src/**/*.md"]);
        assert_eq!(tokens.font_families()["inter"], ["Inter", "sans-serif"]);
        assert_eq!(tokens.colors().get("primary").map(String::as_str), Some("#2563eb"));
        assert!(!tokens.colors().contains_key("accent"));
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#2563eb"));
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#06b6d4cc"));
        assert!(is_valid_color("rebeccapurple"));
        assert!(is_valid_color("var(--accent)"));

        assert!(!is_valid_color("#2563e"));
        assert!(!is_valid_color("#zzzzzz"));
        assert!(!is_valid_color("   "));
    }
}
