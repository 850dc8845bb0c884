//! Block tag tokenizer and tree.
//!
//! Recognizes `{% name markup %}` tags on a single line, with optional `-`
//! whitespace-control dashes (accepted, not interpreted). A tag whose name is
//! registered opens a block, and `{% end<name> %}` closes it. Blocks nest.
//! All other text, including unregistered tags, is kept verbatim.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use gate_blocks::{HandlerRegistry, RenderContext};

use crate::config::FailurePolicy;
use crate::error::{Error, Result};
use crate::pipeline::{BlockFailure, Rendered};

/// Matches one tag: name and single-line markup.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{%-?[ \t]*([A-Za-z_]\w*)[ \t]*([^\n]*?)[ \t]*-?%\}").expect("Invalid tag regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Block(Block),
}

/// A registered block tag and everything up to its closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub tag: String,
    pub markup: String,
    /// 1-based line of the opening tag
    pub line: usize,
    pub children: Vec<Node>,
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    document: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Parse `source` into text and block nodes.
    ///
    /// `document` names the source in errors.
    ///
    /// # Errors
    ///
    /// - [`Error::UnclosedBlock`] when a block has no closing tag
    /// - [`Error::UnexpectedEndTag`] for a closing tag with nothing open
    /// - [`Error::MismatchedEndTag`] when blocks of different tags interleave
    pub fn parse(document: &str, source: &str, registry: &HandlerRegistry) -> Result<Self> {
        let mut root: Vec<Node> = Vec::new();
        let mut open: Vec<Block> = Vec::new();
        let mut cursor = 0;
        let mut lines = LineCounter::default();

        for caps in TAG_REGEX.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str();
            let markup = caps.get(2).map_or("", |m| m.as_str());
            let line = lines.line_at(source, whole.start());

            if registry.contains(name) {
                push_text(current(&mut root, &mut open), &source[cursor..whole.start()]);
                open.push(Block {
                    tag: name.to_string(),
                    markup: markup.to_string(),
                    line,
                    children: Vec::new(),
                });
            } else if let Some(opened) = name
                .strip_prefix("end")
                .filter(|opened| registry.contains(opened))
            {
                push_text(current(&mut root, &mut open), &source[cursor..whole.start()]);
                match open.pop() {
                    Some(block) if block.tag == opened => {
                        current(&mut root, &mut open).push(Node::Block(block));
                    }
                    Some(block) => {
                        return Err(Error::MismatchedEndTag {
                            document: document.to_string(),
                            expected: format!("end{}", block.tag),
                            found: name.to_string(),
                            line,
                        });
                    }
                    None => {
                        return Err(Error::UnexpectedEndTag {
                            document: document.to_string(),
                            tag: name.to_string(),
                            line,
                        });
                    }
                }
            } else {
                continue;
            }
            cursor = whole.end();
        }

        if let Some(block) = open.pop() {
            return Err(Error::UnclosedBlock {
                document: document.to_string(),
                tag: block.tag,
                line: block.line,
            });
        }
        push_text(&mut root, &source[cursor..]);

        Ok(Self {
            document: document.to_string(),
            nodes: root,
        })
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Render every block, innermost first, with its registered handler.
    pub fn render(
        &self,
        registry: &HandlerRegistry,
        context: &RenderContext<'_>,
        policy: FailurePolicy,
    ) -> Result<Rendered> {
        let mut renderer = Renderer {
            document: &self.document,
            registry,
            context,
            policy,
            failures: Vec::new(),
        };
        let content = renderer.render_nodes(&self.nodes)?;
        Ok(Rendered {
            content,
            failures: renderer.failures,
        })
    }
}

struct Renderer<'a> {
    document: &'a str,
    registry: &'a HandlerRegistry,
    context: &'a RenderContext<'a>,
    policy: FailurePolicy,
    failures: Vec<BlockFailure>,
}

impl Renderer<'_> {
    fn render_nodes(&mut self, nodes: &[Node]) -> Result<String> {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Block(block) => out.push_str(&self.render_block(block)?),
            }
        }
        Ok(out)
    }

    fn render_block(&mut self, block: &Block) -> Result<String> {
        let inner = self.render_nodes(&block.children)?;
        let handler = self
            .registry
            .get(&block.tag)
            .ok_or_else(|| Error::UnregisteredTag(block.tag.clone()))?;

        match handler.render(&block.markup, &inner, self.context) {
            Ok(rendered) => Ok(rendered),
            Err(source) => match self.policy {
                FailurePolicy::Abort => Err(Error::Block {
                    document: self.document.to_string(),
                    line: block.line,
                    tag: block.tag.clone(),
                    markup: block.markup.clone(),
                    source,
                }),
                FailurePolicy::Skip => {
                    warn!(
                        document = self.document,
                        line = block.line,
                        markup = %block.markup,
                        error = %source,
                        "Skipping block that failed to render"
                    );
                    self.failures.push(BlockFailure {
                        document: self.document.to_string(),
                        line: block.line,
                        markup: block.markup.clone(),
                        message: source.to_string(),
                    });
                    Ok(String::new())
                }
            },
        }
    }
}

fn current<'a>(root: &'a mut Vec<Node>, open: &'a mut [Block]) -> &'a mut Vec<Node> {
    match open.last_mut() {
        Some(block) => &mut block.children,
        None => root,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Tracks line numbers for increasing offsets, scanning each byte once.
#[derive(Default)]
struct LineCounter {
    offset: usize,
    newlines: usize,
}

impl LineCounter {
    /// 1-based line of `offset`. Offsets must not decrease between calls.
    fn line_at(&mut self, source: &str, offset: usize) -> usize {
        self.newlines += source[self.offset..offset].matches('\n').count();
        self.offset = offset;
        self.newlines + 1
    }
}
