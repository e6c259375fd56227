//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 plugins)
/// - `plural_s(1)` -> `""` (1 plugin)
/// - `plural_s(5)` -> `"s"` (5 plugins)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "color")` -> `"0 colors"`
/// - `plural_count(1, "color")` -> `"1 color"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
