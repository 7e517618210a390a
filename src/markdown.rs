//! Markdown parsing front end
//!
//! Walks `pulldown-cmark` events and drives the `Renderer` bottom-up: each
//! container collects its rendered children in its own buffer, and when the
//! container closes that text is handed to the renderer and written into
//! the enclosing container (or the document).

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};
use tracing::trace;

use crate::buffer::{Buffer, OUTPUT_UNIT};
use crate::renderer::{Node, Outcome, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Heading(u8),
    Paragraph,
    List { ordered: bool },
    Item { ordered: bool },
    Emphasis,
    Strong,
    CodeBlock,
    /// Rendered to nothing, children included
    Other,
}

#[derive(Debug)]
struct Frame {
    container: Container,
    /// Source span of the whole container
    source: Range<usize>,
    children: Buffer,
    /// Whether the last thing written here was inline content
    ends_inline: bool,
}

struct Walk<'r, 'o> {
    renderer: &'r Renderer<'r>,
    out: &'o mut Buffer,
    stack: Vec<Frame>,
}

/// Parse `input` and render the whole document into `out`.
///
/// Bytes that are not valid UTF-8 are replaced before parsing.
pub fn render(out: &mut Buffer, input: &[u8], renderer: &Renderer<'_>) {
    let source = String::from_utf8_lossy(input);
    let mut walk = Walk {
        renderer,
        out,
        stack: Vec::new(),
    };

    for (event, range) in Parser::new_ext(&source, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(tag) => walk.open(container(&tag), range),
            Event::End(_) => walk.close(&source),
            Event::Text(text) => walk.text(&text, source.get(range).unwrap_or_default()),
            Event::Code(code) => walk.inline(Node::CodeSpan {
                text: code.as_bytes(),
            }),
            Event::SoftBreak => walk.inline(Node::Text { text: b"\n" }),
            Event::HardBreak => walk.inline(Node::LineBreak),
            _ => walk.inline(Node::Other),
        }
    }

    // Balanced events leave nothing open; flush defensively if they did not.
    while !walk.stack.is_empty() {
        walk.close(&source);
    }
}

fn container(tag: &Tag<'_>) -> Container {
    match tag {
        Tag::Heading { level, .. } => Container::Heading(*level as u8),
        Tag::Paragraph => Container::Paragraph,
        Tag::List(start) => Container::List {
            ordered: start.is_some(),
        },
        Tag::Item => Container::Item { ordered: false },
        Tag::Emphasis => Container::Emphasis,
        Tag::Strong => Container::Strong,
        Tag::CodeBlock(_) => Container::CodeBlock,
        _ => Container::Other,
    }
}

impl Walk<'_, '_> {
    fn target(&mut self) -> &mut Buffer {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut *self.out,
        }
    }

    fn mark(&mut self, inline: bool) {
        if let Some(frame) = self.stack.last_mut() {
            frame.ends_inline = inline;
        }
    }

    fn open(&mut self, container: Container, source: Range<usize>) {
        let container = match (container, self.stack.last()) {
            (
                Container::Item { .. },
                Some(Frame {
                    container: Container::List { ordered },
                    ..
                }),
            ) => Container::Item { ordered: *ordered },
            _ => container,
        };

        self.stack.push(Frame {
            container,
            source,
            children: Buffer::new(OUTPUT_UNIT),
            ends_inline: false,
        });
    }

    fn text(&mut self, text: &str, raw: &str) {
        if let Some(frame) = self.stack.last_mut() {
            if frame.container == Container::CodeBlock {
                frame.children.put(text.as_bytes());
                return;
            }
        }

        if raw.starts_with('&') && raw != text {
            self.inline(Node::Entity {
                text: raw.as_bytes(),
            });
        } else {
            self.inline(Node::Text {
                text: text.as_bytes(),
            });
        }
    }

    fn inline(&mut self, node: Node<'_>) {
        let renderer = self.renderer;
        renderer.render(self.target(), node);
        self.mark(true);
    }

    fn close(&mut self, source: &str) {
        let Some(mut frame) = self.stack.pop() else {
            return;
        };

        let is_item = matches!(frame.container, Container::Item { .. });
        if is_item && frame.ends_inline {
            // Tight item text ends on its raw source line terminator.
            frame.children.putc(b'\n');
        }

        let text = frame.children.as_bytes();
        let node = match frame.container {
            Container::Heading(level) => Node::Heading { level, text },
            Container::Paragraph => Node::Paragraph { text },
            Container::List { .. } => Node::List { text },
            Container::Item { ordered } => Node::ListItem { ordered, text },
            Container::Emphasis => Node::Emphasis { text },
            Container::Strong => Node::Strong { text },
            Container::CodeBlock => Node::CodeBlock { text },
            Container::Other => Node::Other,
        };

        let renderer = self.renderer;
        if node == Node::Other {
            trace!(source = ?frame.source, "container dropped with its children");
        }
        let outcome = renderer.render(self.target(), node);

        if outcome == Outcome::NotConsumed {
            let markup = source.get(frame.source.clone()).unwrap_or_default();
            renderer.render(
                self.target(),
                Node::Text {
                    text: markup.as_bytes(),
                },
            );
        }

        if is_item {
            // Each item ends its line; the next item starts at the list indent.
            renderer.render(self.target(), Node::Text { text: b"\n" });
        }

        let inline = matches!(
            frame.container,
            Container::Emphasis | Container::Strong | Container::Other
        );
        self.mark(inline);
    }
}
