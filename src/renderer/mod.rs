//! Node renderer
//!
//! Turns each markdown node, with its children already rendered, into
//! styled and indented terminal text. Headings, emphasis and code become
//! capability sequences; paragraphs, lists and breaks become a fixed-indent
//! layout.

use tracing::trace;

use crate::buffer::Buffer;
use crate::capability::{emit, Capabilities, Capability};
use crate::entity;
use crate::escape::{escape_text, INDENT, NEWLINE_INDENT};

/// Delimiter written around code spans and code blocks
pub const FENCE: &[u8] = b"~~~~";

/// Heading colors by level, in the `setf` palette
const HEADING_COLORS: [u8; 3] = [2, 3, 1];

/// A markdown node as handed over by the parser.
///
/// Container kinds carry their already-rendered child text. The text is
/// borrowed from the parser for the duration of one `render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Heading { level: u8, text: &'a [u8] },
    Paragraph { text: &'a [u8] },
    List { text: &'a [u8] },
    ListItem { ordered: bool, text: &'a [u8] },
    Emphasis { text: &'a [u8] },
    Strong { text: &'a [u8] },
    CodeSpan { text: &'a [u8] },
    CodeBlock { text: &'a [u8] },
    LineBreak,
    Text { text: &'a [u8] },
    /// Raw entity source, starting at `&`
    Entity { text: &'a [u8] },
    /// Links, images, block quotes, rules, HTML, tables, ...
    Other,
}

impl Node<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "list item",
            Node::Emphasis { .. } => "emphasis",
            Node::Strong { .. } => "strong emphasis",
            Node::CodeSpan { .. } => "code span",
            Node::CodeBlock { .. } => "code block",
            Node::LineBreak => "line break",
            Node::Text { .. } => "text",
            Node::Entity { .. } => "entity",
            Node::Other => "other",
        }
    }
}

/// Whether a node's markup was rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Consumed,
    /// Nothing was written; the parser should render the markup literally
    NotConsumed,
}

/// Renders nodes into an output buffer using a capability backend
pub struct Renderer<'a> {
    caps: &'a dyn Capabilities,
}

impl<'a> Renderer<'a> {
    pub fn new(caps: &'a dyn Capabilities) -> Self {
        Self { caps }
    }

    /// Render one node into `out`.
    ///
    /// Only emphasis and strong emphasis can report `NotConsumed`.
    pub fn render(&self, out: &mut Buffer, node: Node<'_>) -> Outcome {
        trace!(kind = node.kind(), "render");

        match node {
            Node::Heading { level, text } => self.heading(out, level, text),
            Node::Paragraph { text } => paragraph(out, text),
            Node::List { text } => list(out, text),
            Node::ListItem { ordered, text } => list_item(out, ordered, text),
            Node::Emphasis { text } => return self.emphasis(out, text, &[Capability::Bold]),
            Node::Strong { text } => {
                return self.emphasis(out, text, &[Capability::Bold, Capability::Underline])
            }
            Node::CodeSpan { text } | Node::CodeBlock { text } => code(out, text),
            Node::LineBreak => out.put(NEWLINE_INDENT),
            Node::Text { text } => escape_text(out, text),
            Node::Entity { text } => entity_text(out, text),
            // Unsupported kinds render to nothing.
            Node::Other => {}
        }

        Outcome::Consumed
    }

    fn emit(&self, out: &mut Buffer, cap: Capability) {
        emit(out, self.caps, cap);
    }

    fn heading(&self, out: &mut Buffer, level: u8, text: &[u8]) {
        out.putc(b'\n');

        if level == 3 {
            out.put(b"  ");
        }
        if let Some(&color) = HEADING_COLORS.get(usize::from(level).wrapping_sub(1)) {
            self.emit(out, Capability::Foreground(color));
        }

        self.emit(out, Capability::Underline);
        self.emit(out, Capability::Bold);
        out.put(text);
        self.emit(out, Capability::Reset);
        out.put(NEWLINE_INDENT);
    }

    fn emphasis(&self, out: &mut Buffer, text: &[u8], styles: &[Capability]) -> Outcome {
        if text.is_empty() {
            return Outcome::NotConsumed;
        }

        for &style in styles {
            self.emit(out, style);
        }
        out.put(text);
        self.emit(out, Capability::Reset);

        Outcome::Consumed
    }
}

fn paragraph(out: &mut Buffer, text: &[u8]) {
    if !out.is_empty() {
        out.put(NEWLINE_INDENT);
    }
    out.put(text);
    out.put(NEWLINE_INDENT);
}

fn list(out: &mut Buffer, text: &[u8]) {
    out.put(INDENT);
    out.put(text);
    out.put(NEWLINE_INDENT);
}

fn list_item(out: &mut Buffer, ordered: bool, text: &[u8]) {
    out.put(if ordered { b"# " } else { b"* " });

    let end = text.iter().rposition(|&b| b != b'\n').map_or(0, |pos| pos + 1);
    escape_text(out, &text[..end]);
}

fn code(out: &mut Buffer, text: &[u8]) {
    out.put(FENCE);
    out.put(NEWLINE_INDENT);
    escape_text(out, text);
    out.put(FENCE);
    out.put(NEWLINE_INDENT);
}

fn entity_text(out: &mut Buffer, text: &[u8]) {
    match entity::decode(text) {
        Some(byte) => out.putc(byte),
        None => out.put(text),
    }
}
