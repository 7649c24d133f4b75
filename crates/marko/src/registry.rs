//! Priority-ordered collections of block and inline element kinds.
//!
//! Rules are registered in descending priority order; among equal
//! priorities, registration order is preserved, which is also the pinned
//! tie-break for equal-priority inline matches. A rule whose `replaces`
//! flag is set takes the slot of an already-registered rule with the same
//! kind name instead of being inserted alongside it.

use std::sync::Arc;

use log::{debug, warn};

use crate::block::BlockRule;
use crate::inline::InlineRule;

#[derive(Clone)]
pub struct ElementRegistry {
    blocks: Vec<Arc<dyn BlockRule>>,
    inlines: Vec<Arc<dyn InlineRule>>,
}

impl ElementRegistry {
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            inlines: Vec::new(),
        }
    }

    /// The default CommonMark element set.
    pub fn commonmark() -> Self {
        let mut registry = Self::empty();
        crate::block::register_defaults(&mut registry);
        crate::inline::register_defaults(&mut registry);
        registry
    }

    pub fn blocks(&self) -> &[Arc<dyn BlockRule>] {
        &self.blocks
    }

    pub fn inlines(&self) -> &[Arc<dyn InlineRule>] {
        &self.inlines
    }

    pub fn add_block(&mut self, rule: Arc<dyn BlockRule>) {
        if rule.replaces() {
            if let Some(index) = self.blocks.iter().position(|r| r.kind() == rule.kind()) {
                warn!("block kind `{}` overridden", rule.kind());
                self.blocks[index] = rule;
                return;
            }
        }
        debug!(
            "registering block kind `{}` at priority {}",
            rule.kind(),
            rule.priority()
        );
        let index = insertion_point(self.blocks.iter().map(|r| r.priority()), rule.priority());
        self.blocks.insert(index, rule);
    }

    pub fn add_inline(&mut self, rule: Arc<dyn InlineRule>) {
        if rule.replaces() {
            if let Some(index) = self.inlines.iter().position(|r| r.kind() == rule.kind()) {
                warn!("inline kind `{}` overridden", rule.kind());
                self.inlines[index] = rule;
                return;
            }
        }
        debug!(
            "registering inline kind `{}` at priority {}",
            rule.kind(),
            rule.priority()
        );
        let index = insertion_point(self.inlines.iter().map(|r| r.priority()), rule.priority());
        self.inlines.insert(index, rule);
    }
}

/// First index whose priority is strictly lower than `priority`, keeping the
/// list sorted descending and insertion stable among equals.
fn insertion_point(priorities: impl Iterator<Item = u8>, priority: u8) -> usize {
    let mut index = 0;
    for existing in priorities {
        if existing < priority {
            break;
        }
        index += 1;
    }
    index
}
