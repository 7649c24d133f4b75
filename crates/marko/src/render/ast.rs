//! The AST renderer: serializes the document through the On-AST contract
//! (`element` + `children` + per-kind fields).
//!
//! Deliberately non-delegating — per-element render methods and overrides
//! never participate, so extensions get generic serialization of their
//! kinds for free through the `fields`/`text` hooks on custom elements.

use serde_json::Value;

use crate::ast::Document;
use crate::error::RenderError;

#[derive(Debug, Default)]
pub struct AstRenderer;

impl AstRenderer {
    pub fn new() -> Self {
        Self
    }

    /// A pure function of the document: equal documents produce deep-equal
    /// values, independent of any previous parses or registered overrides.
    pub fn render(&self, doc: &Document) -> Result<Value, RenderError> {
        Ok(serde_json::to_value(doc).expect("document serialization is infallible"))
    }

    /// The serialized document as a JSON string.
    pub fn render_string(&self, doc: &Document) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(&self.render(doc)?)
            .expect("value serialization is infallible"))
    }
}
