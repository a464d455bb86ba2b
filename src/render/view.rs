//! Structural output of the render dispatcher.
//!
//! A `ViewDescription` says *what* to draw for one carousel position; the UI
//! shell decides how it looks. Body content is a flat list of [`Block`]s in
//! display order.

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::format::{FormatFamily, VisualVariant};
use super::style::ResolvedStyle;
use crate::schema::{BulletStyle, CardType, FooterLink, Icon, Orientation, StyleOverride, Trend, VisualKind, VisualPosition};
use crate::Result;

/// Everything the shell needs to draw one poster page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDescription {
    /// Format id as requested by the caller
    pub format_id: String,
    pub family: FormatFamily,
    pub strategy: CardType,
    pub variant: VisualVariant,
    pub position: Position,
    pub header: Header,
    pub body: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterView>,
    pub style: ResolvedStyle,
}

impl ViewDescription {
    /// Hex SHA-256 of the serialized view. Equal views have equal fingerprints.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// Concatenated text of all body blocks, mostly for assertions and logs
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .filter_map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// 0-based index of the current item
    pub index: usize,
    pub total: usize,
    /// Human label, e.g. `2 / 5`
    pub label: String,
}

impl Position {
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            total,
            label: format!("{} / {}", index + 1, total),
        }
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleEmphasis {
    Normal,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub emphasis: TitleEmphasis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub show_attribution: bool,
    pub links: Vec<FooterLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// One body element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Block {
    Heading {
        text: String,
        level: u8,
    },
    Paragraph {
        text: String,
    },
    Callout {
        text: String,
    },
    Quote {
        text: String,
        attribution: Option<String>,
    },
    Bullets {
        style: BulletStyle,
        items: Vec<String>,
    },
    StepMarker {
        number: usize,
        total: usize,
        completed: bool,
    },
    ActionNote {
        text: String,
    },
    Timeline {
        current: usize,
        total: usize,
    },
    StatFigure {
        display: String,
        trend: Option<Trend>,
        percentage: Option<f64>,
    },
    Meter {
        percent: f64,
    },
    Image {
        url: String,
        alt: Option<String>,
        media: VisualKind,
        position: VisualPosition,
    },
    Caption {
        text: String,
    },
    Address {
        location: String,
        address: Option<String>,
    },
    MapLink {
        url: String,
        label: String,
    },
    KeyValueGrid {
        entries: Vec<Entry>,
        orientation: Orientation,
        columns: u32,
    },
    Text {
        text: String,
    },
    Tags {
        tags: Vec<String>,
    },
    Link {
        url: String,
        label: String,
    },
    Divider,
}

impl Block {
    /// Main text carried by the block, if any
    pub fn text(&self) -> Option<String> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::Callout { text }
            | Block::Quote { text, .. }
            | Block::ActionNote { text }
            | Block::Caption { text }
            | Block::Text { text } => Some(text.clone()),
            Block::Bullets { items, .. } => Some(items.join("\n")),
            Block::StatFigure { display, .. } => Some(display.clone()),
            Block::Address { location, address } => Some(match address {
                Some(a) => format!("{}\n{}", location, a),
                None => location.clone(),
            }),
            Block::KeyValueGrid { entries, .. } => Some(
                entries
                    .iter()
                    .map(|e| format!("{}: {}", e.key, e.value))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Block::Tags { tags } => Some(tags.join(" ")),
            Block::MapLink { label, .. } | Block::Link { label, .. } => Some(label.clone()),
            Block::StepMarker { .. } | Block::Timeline { .. } | Block::Meter { .. } | Block::Image { .. } | Block::Divider => None,
        }
    }
}
