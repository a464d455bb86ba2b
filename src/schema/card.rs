//! The root `Card` entity and its discriminated body.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::item::{
    BasicItem, CardItem, ItemBase, ItemKind, KeyValueItem, ListItem, LocationItem, MediaItem, StatItem, StepItem,
    TemplateItem,
};
use super::theme::{Layout, Theme};
use crate::Error;

/// Card-level discriminant (`type` at the document root)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    Basic,
    List,
    Steps,
    Stats,
    Media,
    Location,
    KeyValue,
    Template,
}

impl CardType {
    pub const ALL: [CardType; 8] = [
        CardType::Basic,
        CardType::List,
        CardType::Steps,
        CardType::Stats,
        CardType::Media,
        CardType::Location,
        CardType::KeyValue,
        CardType::Template,
    ];

    pub const TAGS: &'static [&'static str] = &[
        "basic", "list", "steps", "stats", "media", "location", "keyValue", "template",
    ];

    pub fn tag(self) -> &'static str {
        match self {
            CardType::Basic => "basic",
            CardType::List => "list",
            CardType::Steps => "steps",
            CardType::Stats => "stats",
            CardType::Media => "media",
            CardType::Location => "location",
            CardType::KeyValue => "keyValue",
            CardType::Template => "template",
        }
    }

    /// The item tag every element of `items` must carry for this card type
    pub fn item_kind(self) -> ItemKind {
        match self {
            CardType::Basic => ItemKind::Basic,
            CardType::List => ItemKind::List,
            CardType::Steps => ItemKind::Step,
            CardType::Stats => ItemKind::Stat,
            CardType::Media => ItemKind::Media,
            CardType::Location => ItemKind::Location,
            CardType::KeyValue => ItemKind::KeyValue,
            CardType::Template => ItemKind::Template,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| Error::UnknownCardType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_attribution: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterLink>>,
}

/// Type-specific part of a card. The variant fixes the item struct, so a
/// `Steps` body can only ever hold step items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CardBody {
    Basic {
        items: Vec<BasicItem>,
    },
    List {
        items: Vec<ListItem>,
    },
    Steps {
        items: Vec<StepItem>,
    },
    Stats {
        items: Vec<StatItem>,
    },
    Media {
        items: Vec<MediaItem>,
    },
    Location {
        items: Vec<LocationItem>,
    },
    KeyValue {
        items: Vec<KeyValueItem>,
    },
    Template {
        items: Vec<TemplateItem>,
        #[serde(rename = "globalVariables", default, skip_serializing_if = "Option::is_none")]
        global_variables: Option<IndexMap<String, String>>,
    },
}

impl CardBody {
    pub fn card_type(&self) -> CardType {
        match self {
            CardBody::Basic { .. } => CardType::Basic,
            CardBody::List { .. } => CardType::List,
            CardBody::Steps { .. } => CardType::Steps,
            CardBody::Stats { .. } => CardType::Stats,
            CardBody::Media { .. } => CardType::Media,
            CardBody::Location { .. } => CardType::Location,
            CardBody::KeyValue { .. } => CardType::KeyValue,
            CardBody::Template { .. } => CardType::Template,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CardBody::Basic { items } => items.len(),
            CardBody::List { items } => items.len(),
            CardBody::Steps { items } => items.len(),
            CardBody::Stats { items } => items.len(),
            CardBody::Media { items } => items.len(),
            CardBody::Location { items } => items.len(),
            CardBody::KeyValue { items } => items.len(),
            CardBody::Template { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared base of the item at `index`
    pub fn item_base(&self, index: usize) -> Option<&ItemBase> {
        match self {
            CardBody::Basic { items } => items.get(index).map(CardItem::base),
            CardBody::List { items } => items.get(index).map(CardItem::base),
            CardBody::Steps { items } => items.get(index).map(CardItem::base),
            CardBody::Stats { items } => items.get(index).map(CardItem::base),
            CardBody::Media { items } => items.get(index).map(CardItem::base),
            CardBody::Location { items } => items.get(index).map(CardItem::base),
            CardBody::KeyValue { items } => items.get(index).map(CardItem::base),
            CardBody::Template { items, .. } => items.get(index).map(CardItem::base),
        }
    }
}

/// A validated information card.
///
/// Cards are treated as immutable values: layout overrides go through
/// [`Card::with_layout`], which returns a derived copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(flatten)]
    pub body: CardBody,
}

impl Card {
    pub fn new(title: impl Into<String>, body: CardBody) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: None,
            footer: None,
            theme: None,
            layout: None,
            body,
        }
    }

    pub fn card_type(&self) -> CardType {
        self.body.card_type()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Derived copy with `layout` replaced
    pub fn with_layout(&self, layout: Layout) -> Card {
        Card {
            layout: Some(layout),
            ..self.clone()
        }
    }

    /// Layout as the renderer sees it, with per-type constraints applied
    pub fn effective_layout(&self) -> Layout {
        let mut layout = self.layout.clone().unwrap_or_default();
        if self.card_type() == CardType::Steps {
            layout.show_numbers = Some(true);
        }
        layout
    }
}
