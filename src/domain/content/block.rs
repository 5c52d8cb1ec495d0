//! Structured body content.
//!
//! An article body is an ordered list of [`ContentBlock`]s. The set of block
//! kinds is closed; anything the store sends that we do not model ends up in
//! [`ContentBlock::Unknown`] so that rendering can always fall back instead
//! of failing.

use crate::domain::content::image::ImageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H1: Self = Self(1);
    pub const H2: Self = Self(2);

    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= 6 {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    Underline,
    StrikeThrough,
    Link { href: String },
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading {
        level: HeadingLevel,
        children: Vec<Span>,
    },
    Paragraph {
        children: Vec<Span>,
    },
    Blockquote {
        children: Vec<Span>,
    },
    ListItem {
        kind: ListKind,
        /// Nesting depth, starting at 1.
        level: u8,
        children: Vec<Span>,
    },
    Image {
        image: ImageRef,
    },
    Unknown {
        kind: String,
        children: Vec<Span>,
    },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            children: vec![Span::plain(text)],
        }
    }

    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            children: vec![Span::plain(text)],
        }
    }

    pub fn children(&self) -> &[Span] {
        match self {
            Self::Heading { children, .. }
            | Self::Paragraph { children }
            | Self::Blockquote { children }
            | Self::ListItem { children, .. }
            | Self::Unknown { children, .. } => children,
            Self::Image { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_bounded() {
        assert!(HeadingLevel::new(0).is_none());
        assert_eq!(HeadingLevel::new(3).map(HeadingLevel::get), Some(3));
        assert!(HeadingLevel::new(7).is_none());
    }

    #[test]
    fn image_blocks_have_no_text_children() {
        let block = ContentBlock::Image {
            image: ImageRef::new("image-abc-10x10-png"),
        };
        assert!(block.children().is_empty());
    }
}
