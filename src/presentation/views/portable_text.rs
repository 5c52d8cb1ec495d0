//! Structured content → HTML.
//!
//! Every block, list and link is rendered through a [`NodeKind`]. A node kind
//! either has an override registered in [`Serializers`] or falls back to the
//! default markup. Rendering is pure and never fails: unknown block kinds and
//! unknown marks use a generic fallback.

use crate::application::ports::ImageUrlBuilderPort;
use crate::domain::content::{ContentBlock, HeadingLevel, ImageRef, ListKind, Mark, Span};
use maud::{Markup, html};

const BODY_IMAGE_WIDTH: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Normal,
    Blockquote,
    BulletList,
    NumberList,
    ListItem,
    Link,
    Image,
    Unknown,
}

impl NodeKind {
    const COUNT: usize = 14;

    pub const fn heading(level: HeadingLevel) -> Self {
        match level.get() {
            1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            _ => Self::H6,
        }
    }

    const fn list(kind: ListKind) -> Self {
        match kind {
            ListKind::Bullet => Self::BulletList,
            ListKind::Number => Self::NumberList,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Inputs handed to a node renderer.
#[derive(Debug)]
pub struct NodeProps<'a> {
    /// Already rendered inner markup.
    pub children: Markup,
    /// Target of a [`NodeKind::Link`].
    pub href: Option<&'a str>,
    /// Resolved URL of a [`NodeKind::Image`]; `None` when the asset reference
    /// could not be resolved.
    pub image_url: Option<String>,
    pub alt: Option<&'a str>,
    /// Original type name of a [`NodeKind::Unknown`] node.
    pub kind: Option<&'a str>,
}

impl Default for NodeProps<'_> {
    fn default() -> Self {
        Self {
            children: html! {},
            href: None,
            image_url: None,
            alt: None,
            kind: None,
        }
    }
}

pub type NodeRenderer = fn(NodeProps<'_>) -> Markup;

/// Per-kind overrides. Kinds without an override use the default markup.
#[derive(Debug, Clone, Copy)]
pub struct Serializers {
    overrides: [Option<NodeRenderer>; NodeKind::COUNT],
}

impl Default for Serializers {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializers {
    pub const fn new() -> Self {
        Self {
            overrides: [None; NodeKind::COUNT],
        }
    }

    #[must_use]
    pub const fn with(mut self, kind: NodeKind, renderer: NodeRenderer) -> Self {
        self.overrides[kind.index()] = Some(renderer);
        self
    }

    pub const fn get(&self, kind: NodeKind) -> Option<NodeRenderer> {
        self.overrides[kind.index()]
    }

    fn render(&self, kind: NodeKind, props: NodeProps<'_>) -> Markup {
        match self.get(kind) {
            Some(renderer) => renderer(props),
            None => default_node(kind, props),
        }
    }
}

fn default_node(kind: NodeKind, props: NodeProps<'_>) -> Markup {
    let NodeProps {
        children,
        href,
        image_url,
        alt,
        kind: unknown_kind,
    } = props;

    match kind {
        NodeKind::H1 => html! { h1 { (children) } },
        NodeKind::H2 => html! { h2 { (children) } },
        NodeKind::H3 => html! { h3 { (children) } },
        NodeKind::H4 => html! { h4 { (children) } },
        NodeKind::H5 => html! { h5 { (children) } },
        NodeKind::H6 => html! { h6 { (children) } },
        NodeKind::Normal => html! { p { (children) } },
        NodeKind::Blockquote => html! { blockquote { (children) } },
        NodeKind::BulletList => html! { ul { (children) } },
        NodeKind::NumberList => html! { ol { (children) } },
        NodeKind::ListItem => html! { li { (children) } },
        NodeKind::Link => html! { a href=[href] { (children) } },
        NodeKind::Image => html! {
            @if let Some(url) = image_url {
                figure { img src=(url) alt=(alt.unwrap_or_default()) loading="lazy"; }
            }
        },
        NodeKind::Unknown => html! {
            div.unknown-block data-kind=[unknown_kind] { (children) }
        },
    }
}

struct ListEntry<'b> {
    kind: ListKind,
    level: u8,
    spans: &'b [Span],
}

pub struct PortableTextRenderer<'a> {
    serializers: &'a Serializers,
    images: &'a ImageUrlBuilderPort,
}

impl<'a> PortableTextRenderer<'a> {
    pub const fn new(serializers: &'a Serializers, images: &'a ImageUrlBuilderPort) -> Self {
        Self {
            serializers,
            images,
        }
    }

    pub fn render(&self, blocks: &[ContentBlock]) -> Markup {
        let mut rendered = Vec::with_capacity(blocks.len());
        let mut index = 0;

        while index < blocks.len() {
            if let ContentBlock::ListItem { .. } = &blocks[index] {
                let run: Vec<ListEntry<'_>> = blocks[index..]
                    .iter()
                    .map_while(|block| match block {
                        ContentBlock::ListItem {
                            kind,
                            level,
                            children,
                        } => Some(ListEntry {
                            kind: *kind,
                            level: *level,
                            spans: children,
                        }),
                        _ => None,
                    })
                    .collect();
                index += run.len();
                rendered.push(self.render_list(&run));
                continue;
            }

            rendered.push(self.render_block(&blocks[index]));
            index += 1;
        }

        html! { @for block in &rendered { (block) } }
    }

    fn render_block(&self, block: &ContentBlock) -> Markup {
        match block {
            ContentBlock::Heading { level, children } => {
                self.text_node(NodeKind::heading(*level), children)
            }
            ContentBlock::Paragraph { children } => self.text_node(NodeKind::Normal, children),
            ContentBlock::Blockquote { children } => self.text_node(NodeKind::Blockquote, children),
            ContentBlock::ListItem { kind, level, children } => self.render_list(&[ListEntry {
                kind: *kind,
                level: *level,
                spans: children,
            }]),
            ContentBlock::Image { image } => self.image_node(image),
            ContentBlock::Unknown { kind, children } => self.serializers.render(
                NodeKind::Unknown,
                NodeProps {
                    children: self.spans(children),
                    kind: Some(kind.as_str()),
                    ..NodeProps::default()
                },
            ),
        }
    }

    fn text_node(&self, kind: NodeKind, spans: &[Span]) -> Markup {
        self.serializers.render(
            kind,
            NodeProps {
                children: self.spans(spans),
                ..NodeProps::default()
            },
        )
    }

    fn image_node(&self, image: &ImageRef) -> Markup {
        self.serializers.render(
            NodeKind::Image,
            NodeProps {
                image_url: self.images.url(image, Some(BODY_IMAGE_WIDTH)),
                alt: image.alt.as_deref(),
                ..NodeProps::default()
            },
        )
    }

    /// Groups a run of list items into `ul`/`ol` elements by kind. Deeper
    /// levels nest inside the preceding item of the shallower level.
    fn render_list(&self, items: &[ListEntry<'_>]) -> Markup {
        let Some(base) = items.iter().map(|item| item.level).min() else {
            return html! {};
        };

        let mut lists = Vec::new();
        let mut index = 0;
        while index < items.len() {
            let kind = items[index].kind;
            let mut list_items = Vec::new();

            while index < items.len() {
                let item = &items[index];
                if item.level == base && item.kind != kind {
                    break;
                }

                // An item deeper than `base` with no parent gets an empty one.
                let (own, nested_start) = if item.level == base {
                    (Some(item), index + 1)
                } else {
                    (None, index)
                };
                let nested_end = items[nested_start..]
                    .iter()
                    .position(|next| next.level <= base)
                    .map_or(items.len(), |offset| nested_start + offset);
                let nested = &items[nested_start..nested_end];

                let children = html! {
                    @if let Some(own) = own { (self.spans(own.spans)) }
                    @if !nested.is_empty() { (self.render_list(nested)) }
                };
                list_items.push(self.serializers.render(
                    NodeKind::ListItem,
                    NodeProps {
                        children,
                        ..NodeProps::default()
                    },
                ));
                index = nested_end;
            }

            lists.push(self.serializers.render(
                NodeKind::list(kind),
                NodeProps {
                    children: html! { @for item in &list_items { (item) } },
                    ..NodeProps::default()
                },
            ));
        }

        html! { @for list in &lists { (list) } }
    }

    fn spans(&self, spans: &[Span]) -> Markup {
        html! { @for span in spans { (self.span(span)) } }
    }

    /// The first mark ends up outermost.
    fn span(&self, span: &Span) -> Markup {
        span.marks
            .iter()
            .rev()
            .fold(html! { (span.text) }, |inner, mark| self.mark(mark, inner))
    }

    fn mark(&self, mark: &Mark, inner: Markup) -> Markup {
        match mark {
            Mark::Strong => html! { strong { (inner) } },
            Mark::Emphasis => html! { em { (inner) } },
            Mark::Code => html! { code { (inner) } },
            Mark::Underline => html! { span style="text-decoration: underline" { (inner) } },
            Mark::StrikeThrough => html! { del { (inner) } },
            Mark::Link { href } => self.serializers.render(
                NodeKind::Link,
                NodeProps {
                    children: inner,
                    href: Some(href.as_str()),
                    ..NodeProps::default()
                },
            ),
            Mark::Unknown(name) => html! { span data-mark=(name) { (inner) } },
        }
    }
}
