//! Extension bundles and resolution by logical name.
//!
//! An extension contributes element kinds (block and inline rules) and
//! renderer overrides. Extensions are applied in registration order;
//! later registrations shadow earlier ones for the same kind name.

use std::sync::Arc;

use crate::block::BlockRule;
use crate::error::ExtensionError;
use crate::inline::InlineRule;
use crate::render::{HtmlRenderFn, MarkdownRenderFn};

pub struct Extension {
    pub name: &'static str,
    pub blocks: Vec<Arc<dyn BlockRule>>,
    pub inlines: Vec<Arc<dyn InlineRule>>,
    pub html_overrides: Vec<(&'static str, HtmlRenderFn)>,
    pub markdown_overrides: Vec<(&'static str, MarkdownRenderFn)>,
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Extension {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            blocks: Vec::new(),
            inlines: Vec::new(),
            html_overrides: Vec::new(),
            markdown_overrides: Vec::new(),
        }
    }

    pub fn with_block(mut self, rule: Arc<dyn BlockRule>) -> Self {
        self.blocks.push(rule);
        self
    }

    pub fn with_inline(mut self, rule: Arc<dyn InlineRule>) -> Self {
        self.inlines.push(rule);
        self
    }

    pub fn with_html_override(mut self, kind: &'static str, render: HtmlRenderFn) -> Self {
        self.html_overrides.push((kind, render));
        self
    }

    pub fn with_markdown_override(mut self, kind: &'static str, render: MarkdownRenderFn) -> Self {
        self.markdown_overrides.push((kind, render));
        self
    }
}

/// The entry-point table mapping logical names to extension factories.
/// `load("gfm.strikethrough")` is the moral equivalent of importing a
/// module by name and calling its `make_extension`.
static FACTORIES: &[(&str, fn() -> Extension)] = &[
    ("gfm", crate::extensions::gfm::extension),
    ("gfm.strikethrough", crate::extensions::gfm::strikethrough),
];

/// Resolve an extension by logical name.
pub fn load(name: &str) -> Result<Extension, ExtensionError> {
    FACTORIES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, factory)| factory())
        .ok_or_else(|| ExtensionError::Unknown(name.to_string()))
}
