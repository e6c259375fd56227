//! Configuration section definitions.
//!
//! Each module corresponds to a section in `quire.toml`:
//!
//! | Module     | TOML Section    | Purpose                            |
//! |------------|-----------------|------------------------------------|
//! | `site`     | `[site]`        | Deployment URL, base path, output  |
//! | `plugins`  | `[[plugins]]`   | Ordered plugin factory invocations |
//! | `markdown` | `[markdown]`    | remark/rehype transform pipeline   |
//! | `theme`    | `[theme]`       | Font stacks, colors, content globs |

pub mod markdown;
pub mod plugins;
pub mod site;
pub mod theme;

pub use markdown::{MarkdownSection, RehypeEntry};
pub use plugins::PluginEntry;
pub use site::SiteSection;
pub use theme::ThemeSection;
