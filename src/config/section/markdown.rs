//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! math = true                          # Append remark-math and rehype-katex
//! remark = ["remark-gfm"]              # Markdown-tree transforms, in order
//! rehype = [
//!     "rehype-slug",                   # HTML-tree transforms, in order
//!     { name = "rehype-autolink-headings", options = { behavior = "wrap" } },
//! ]
//! ```
//!
//! Leaving the section out means markdown is rendered without transforms.

use crate::compose::{MarkdownPipeline, RehypeStep, TransformRef};
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// A rehype transform, optionally with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RehypeEntry {
    /// Just the transform name.
    Simple(String),
    /// Transform with options.
    Full {
        name: String,
        #[serde(default)]
        options: toml::Table,
    },
}

impl RehypeEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(name) | Self::Full { name, .. } => name,
        }
    }

    fn to_step(&self) -> RehypeStep {
        match self {
            Self::Simple(name) => RehypeStep::bare(name.clone()),
            Self::Full { name, options } => {
                RehypeStep::new(TransformRef::new(name.clone()), options.clone())
            }
        }
    }
}

/// Markdown transform pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownSection {
    /// Enable math rendering (remark-math + rehype-katex).
    pub math: bool,

    /// Transforms applied to the markdown tree, in order.
    pub remark: Vec<String>,

    /// Transforms applied to the HTML tree, in order.
    pub rehype: Vec<RehypeEntry>,
}

impl MarkdownSection {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.remark.iter().any(|name| name.trim().is_empty()) {
            diag.error(Self::FIELDS.remark, "transform names must not be empty");
        }
        if self.rehype.iter().any(|entry| entry.name().trim().is_empty()) {
            diag.error(Self::FIELDS.rehype, "transform names must not be empty");
        }
    }

    /// Build the pipeline, appending the math transforms when enabled.
    pub fn to_pipeline(&self) -> MarkdownPipeline {
        let pipeline = MarkdownPipeline::new(
            self.remark.iter().cloned().map(TransformRef::new).collect(),
            self.rehype.iter().map(RehypeEntry::to_step).collect(),
        );
        if self.math { pipeline.with_math() } else { pipeline }
    }
}
