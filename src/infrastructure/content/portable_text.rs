//! Portable Text → [`ContentBlock`] decoding.
//!
//! Decoding never fails: anything that does not match a modelled shape is
//! kept as [`ContentBlock::Unknown`] so the renderer can fall back.

use super::documents::Reference;
use crate::domain::content::{ContentBlock, HeadingLevel, ImageRef, ListKind, Mark, Span};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(rename = "_type", default)]
    kind: Option<String>,
    style: Option<String>,
    #[serde(rename = "listItem")]
    list_item: Option<String>,
    level: Option<u8>,
    children: Option<Vec<Value>>,
    #[serde(rename = "markDefs")]
    mark_defs: Option<Vec<Value>>,
    asset: Option<Reference>,
    alt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSpan {
    #[serde(rename = "_type")]
    kind: Option<String>,
    text: Option<String>,
    marks: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawMarkDef {
    #[serde(rename = "_key")]
    key: String,
    #[serde(rename = "_type")]
    kind: String,
    href: Option<String>,
}

pub fn decode_blocks(values: Vec<Value>) -> Vec<ContentBlock> {
    values.into_iter().map(decode_block).collect()
}

pub fn decode_block(value: Value) -> ContentBlock {
    let fallback_kind = value
        .get("_type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_owned();

    let Ok(raw) = serde_json::from_value::<RawBlock>(value) else {
        return ContentBlock::Unknown {
            kind: fallback_kind,
            children: Vec::new(),
        };
    };

    // A malformed definition drops only itself; its marks resolve as unknown.
    let mark_defs: Vec<RawMarkDef> = raw
        .mark_defs
        .unwrap_or_default()
        .into_iter()
        .filter_map(|def| serde_json::from_value(def).ok())
        .collect();
    let children = decode_spans(raw.children.unwrap_or_default(), &mark_defs);

    match raw.kind.as_deref() {
        Some("block") => text_block(
            raw.style.as_deref(),
            raw.list_item.as_deref(),
            raw.level,
            children,
        ),
        Some("image") => match raw.asset.and_then(|asset| asset.reference) {
            Some(asset_ref) => ContentBlock::Image {
                image: ImageRef {
                    asset_ref,
                    alt: raw.alt,
                },
            },
            None => ContentBlock::Unknown {
                kind: fallback_kind,
                children,
            },
        },
        _ => ContentBlock::Unknown {
            kind: fallback_kind,
            children,
        },
    }
}

fn text_block(
    style: Option<&str>,
    list_item: Option<&str>,
    level: Option<u8>,
    children: Vec<Span>,
) -> ContentBlock {
    if let Some(list_item) = list_item {
        let kind = match list_item {
            "bullet" => ListKind::Bullet,
            "number" => ListKind::Number,
            other => {
                return ContentBlock::Unknown {
                    kind: format!("list:{other}"),
                    children,
                };
            }
        };
        return ContentBlock::ListItem {
            kind,
            level: level.unwrap_or(1).max(1),
            children,
        };
    }

    match style.unwrap_or("normal") {
        "normal" => ContentBlock::Paragraph { children },
        "blockquote" => ContentBlock::Blockquote { children },
        other => match heading_level(other) {
            Some(level) => ContentBlock::Heading { level, children },
            None => ContentBlock::Unknown {
                kind: other.to_owned(),
                children,
            },
        },
    }
}

fn heading_level(style: &str) -> Option<HeadingLevel> {
    let digits = style.strip_prefix('h')?;
    HeadingLevel::new(digits.parse().ok()?)
}

fn decode_spans(children: Vec<Value>, mark_defs: &[RawMarkDef]) -> Vec<Span> {
    children
        .into_iter()
        .filter_map(|child| serde_json::from_value::<RawSpan>(child).ok())
        // Inline objects other than spans carry no text to render.
        .filter(|span| span.kind.as_deref().is_none_or(|kind| kind == "span"))
        .map(|span| Span {
            text: span.text.unwrap_or_default(),
            marks: span
                .marks
                .unwrap_or_default()
                .iter()
                .map(|mark| resolve_mark(mark, mark_defs))
                .collect(),
        })
        .collect()
}

fn resolve_mark(mark: &str, mark_defs: &[RawMarkDef]) -> Mark {
    match mark {
        "strong" => Mark::Strong,
        "em" => Mark::Emphasis,
        "code" => Mark::Code,
        "underline" => Mark::Underline,
        "strike-through" => Mark::StrikeThrough,
        key => match mark_defs.iter().find(|def| def.key == key) {
            Some(RawMarkDef {
                kind, href: Some(href), ..
            }) if kind == "link" => Mark::Link { href: href.clone() },
            Some(def) => Mark::Unknown(def.kind.clone()),
            None => Mark::Unknown(key.to_owned()),
        },
    }
}
