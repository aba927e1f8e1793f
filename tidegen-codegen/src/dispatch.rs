//! Conditional dispatch chains.
//!
//! A chain renders as one `if`, then `else if` per further block, an optional
//! `else` fallback, and a single closing brace:
//!
//! ```text
//! if (<cond>) {
//!     <body>
//! } else if (<cond>) {
//!     <body>
//! }
//! ```

use eyre::{Result, ensure};
use tidegen_core::HintEntry;

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    grouping::KeyGroup,
};

/// One guarded block of a dispatch chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBlock {
    pub condition: String,
    pub body: Vec<String>,
}

impl ConditionalBlock {
    pub fn new(condition: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            condition: condition.into(),
            body,
        }
    }
}

/// Mutually exclusive conditional blocks, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchChain {
    blocks: Vec<ConditionalBlock>,
    fallback: Option<Vec<String>>,
}

impl DispatchChain {
    /// Create a chain; at least one block is required.
    pub fn new(blocks: Vec<ConditionalBlock>) -> Result<Self> {
        ensure!(!blocks.is_empty(), "dispatch chain needs at least one block");
        Ok(Self {
            blocks,
            fallback: None,
        })
    }

    /// Close the chain with an unconditional `else` block.
    pub fn with_fallback(mut self, body: Vec<String>) -> Self {
        self.fallback = Some(body);
        self
    }

    pub fn blocks(&self) -> &[ConditionalBlock] {
        &self.blocks
    }

    pub fn fallback(&self) -> Option<&[String]> {
        self.fallback.as_deref()
    }

    /// Render the chain with 4-space body indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::c();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for DispatchChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::with_capacity(self.blocks.len() * 2 + 3);

        for (index, block) in self.blocks.iter().enumerate() {
            let header = if index == 0 {
                format!("if ({}) {{", block.condition)
            } else {
                format!("}} else if ({}) {{", block.condition)
            };
            fragments.push(CodeFragment::Line(header));
            fragments.push(CodeFragment::indented_lines(block.body.iter().cloned()));
        }

        if let Some(fallback) = &self.fallback {
            fragments.push(CodeFragment::line("} else {"));
            fragments.push(CodeFragment::indented_lines(fallback.iter().cloned()));
        }

        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

/// Completion dispatch: one block per keyword group, testing the first input character.
pub fn keyword_dispatch(groups: &[KeyGroup]) -> Result<DispatchChain> {
    ensure!(!groups.is_empty(), "keyword dispatch needs at least one group");

    let blocks = groups
        .iter()
        .map(|group| {
            ConditionalBlock::new(
                format!("buf[0] == '{}'", group.key),
                group
                    .members
                    .iter()
                    .map(|keyword| format!("linenoiseAddCompletion(lc, \"{}\");", keyword))
                    .collect(),
            )
        })
        .collect();

    DispatchChain::new(blocks)
}

/// Hint dispatch: one block per entry, matching the whole buffer case-insensitively.
pub fn hint_dispatch(entries: &[HintEntry]) -> Result<DispatchChain> {
    ensure!(!entries.is_empty(), "hint dispatch needs at least one entry");

    let blocks = entries
        .iter()
        .map(|entry| {
            ConditionalBlock::new(
                format!("!strcasecmp(buf, \"{}\")", entry.command),
                vec![
                    format!("*color = {};", entry.color),
                    format!("*bold = {};", entry.bold),
                    format!("return \"{}\";", entry.text),
                ],
            )
        })
        .collect();

    DispatchChain::new(blocks)
}
