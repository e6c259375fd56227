//! Markdown transform pipeline.
//!
//! Two ordered stages: `remark` transforms run on the markdown syntax tree,
//! `rehype` transforms run on the HTML tree afterwards. The transforms
//! themselves belong to the external build; here they are only named.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transform pair enabled by `markdown.math`.
pub const MATH_REMARK: &str = "remark-math";
pub const MATH_REHYPE: &str = "rehype-katex";

/// Opaque reference to a markdown transform by package name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformRef(String);

impl TransformRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransformRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rehype transform with the options it is invoked with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RehypeStep {
    pub transform: TransformRef,
    pub options: toml::Table,
}

impl RehypeStep {
    pub fn new(transform: TransformRef, options: toml::Table) -> Self {
        Self { transform, options }
    }

    /// Step without options.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(TransformRef::new(name), toml::Table::new())
    }
}

/// Ordered markdown transforms, applied sequentially.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownPipeline {
    remark_steps: Vec<TransformRef>,
    rehype_steps: Vec<RehypeStep>,
}

impl MarkdownPipeline {
    pub fn new(remark_steps: Vec<TransformRef>, rehype_steps: Vec<RehypeStep>) -> Self {
        Self {
            remark_steps,
            rehype_steps,
        }
    }

    pub fn remark_steps(&self) -> &[TransformRef] {
        &self.remark_steps
    }

    pub fn rehype_steps(&self) -> &[RehypeStep] {
        &self.rehype_steps
    }

    pub fn is_empty(&self) -> bool {
        self.remark_steps.is_empty() && self.rehype_steps.is_empty()
    }

    /// Append the math transforms unless they are already listed.
    pub fn with_math(mut self) -> Self {
        if !self.remark_steps.iter().any(|t| t.name() == MATH_REMARK) {
            self.remark_steps.push(TransformRef::new(MATH_REMARK));
        }
        if !self
            .rehype_steps
            .iter()
            .any(|s| s.transform.name() == MATH_REHYPE)
        {
            self.rehype_steps.push(RehypeStep::bare(MATH_REHYPE));
        }
        self
    }
}
