//! Carousel item variants.
//!
//! Every item shares an [`ItemBase`]; the variant structs add the fields
//! their card type needs. The `type` tag lives on the base and is fixed by
//! the constructor, so an item built in code always carries the right tag.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

use super::theme::StyleOverride;

/// Item-level discriminant (`type` on each element of `items`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Basic,
    Step,
    List,
    Stat,
    Media,
    Location,
    KeyValue,
    Template,
}

impl ItemKind {
    pub const TAGS: &'static [&'static str] = &[
        "basic", "step", "list", "stat", "media", "location", "keyValue", "template",
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Basic => "basic",
            ItemKind::Step => "step",
            ItemKind::List => "list",
            ItemKind::Stat => "stat",
            ItemKind::Media => "media",
            ItemKind::Location => "location",
            ItemKind::KeyValue => "keyValue",
            ItemKind::Template => "template",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "basic" => Some(ItemKind::Basic),
            "step" => Some(ItemKind::Step),
            "list" => Some(ItemKind::List),
            "stat" => Some(ItemKind::Stat),
            "media" => Some(ItemKind::Media),
            "location" => Some(ItemKind::Location),
            "keyValue" => Some(ItemKind::KeyValue),
            "template" => Some(ItemKind::Template),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Emoji,
    Symbol,
    Image,
}

impl IconKind {
    pub const TAGS: &'static [&'static str] = &["emoji", "symbol", "image"];
}

/// Icon attached to an item, tagged by how `value` is interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    #[serde(rename = "type")]
    pub kind: IconKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLink {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Fields shared by every item variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBase {
    /// Free-form numeric id; not unique, never used for ordering
    pub id: Number,
    #[serde(rename = "type")]
    kind: ItemKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ItemLink>,
}

impl ItemBase {
    pub(crate) fn new(kind: ItemKind, id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Number::from(id),
            kind,
            title: title.into(),
            description: description.into(),
            icon: None,
            highlight: None,
            style: None,
            tags: None,
            link: None,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.unwrap_or(false)
    }

    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Common access to the shared base of an item variant
pub trait CardItem {
    const KIND: ItemKind;

    fn base(&self) -> &ItemBase;

    fn base_mut(&mut self) -> &mut ItemBase;

    fn title(&self) -> &str {
        &self.base().title
    }

    fn description(&self) -> &str {
        &self.base().description
    }
}

macro_rules! card_item {
    ($ty:ty, $kind:expr) => {
        impl CardItem for $ty {
            const KIND: ItemKind = $kind;

            fn base(&self) -> &ItemBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut ItemBase {
                &mut self.base
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicItem {
    #[serde(flatten)]
    pub base: ItemBase,
}

impl BasicItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { base: ItemBase::new(Self::KIND, id, title, description) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepItem {
    #[serde(flatten)]
    pub base: ItemBase,
    pub action_step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl StepItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, action_step: impl Into<String>) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            action_step: action_step.into(),
            step_number: None,
            is_completed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletStyle {
    Disc,
    Circle,
    Square,
    Check,
    Arrow,
    Number,
}

impl BulletStyle {
    pub const TAGS: &'static [&'static str] = &["disc", "circle", "square", "check", "arrow", "number"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(flatten)]
    pub base: ItemBase,
    pub bullet_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_style: Option<BulletStyle>,
}

impl ListItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, bullet_points: Vec<String>) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            bullet_points,
            bullet_style: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub const TAGS: &'static [&'static str] = &["up", "down", "neutral"];
}

/// A statistic is either a number or a preformatted string ("3.2M")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(Number),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    #[serde(flatten)]
    pub base: ItemBase,
    pub value: StatValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl StatItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, value: StatValue) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            value,
            percentage: None,
            trend: None,
            prefix: None,
            suffix: None,
        }
    }

    /// Value with prefix and suffix applied, e.g. `$12k/mo`
    pub fn display_value(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix.as_deref().unwrap_or(""),
            self.value,
            self.suffix.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    Image,
    Video,
    Illustration,
    Chart,
}

impl VisualKind {
    pub const TAGS: &'static [&'static str] = &["image", "video", "illustration", "chart"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Background,
}

impl VisualPosition {
    pub const TAGS: &'static [&'static str] = &["top", "bottom", "left", "right", "background"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualElement {
    #[serde(rename = "type")]
    pub kind: VisualKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<VisualPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOverride>,
}

impl VisualElement {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: VisualKind::Image,
            url: url.into(),
            alt: None,
            position: None,
            style: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(flatten)]
    pub base: ItemBase,
    pub visual_element: VisualElement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, visual_element: VisualElement) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            visual_element,
            caption: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationItem {
    #[serde(flatten)]
    pub base: ItemBase,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl LocationItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            location: location.into(),
            address: None,
            map_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub const TAGS: &'static [&'static str] = &["horizontal", "vertical"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueItem {
    #[serde(flatten)]
    pub base: ItemBase,
    pub key_value: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl KeyValueItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, key_value: IndexMap<String, String>) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            key_value,
            orientation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    #[serde(flatten)]
    pub base: ItemBase,
    /// Text with `{name}` placeholders
    pub template_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<IndexMap<String, String>>,
}

impl TemplateItem {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>, template_text: impl Into<String>) -> Self {
        Self {
            base: ItemBase::new(Self::KIND, id, title, description),
            template_text: template_text.into(),
            variables: None,
        }
    }
}

card_item!(BasicItem, ItemKind::Basic);
card_item!(StepItem, ItemKind::Step);
card_item!(ListItem, ItemKind::List);
card_item!(StatItem, ItemKind::Stat);
card_item!(MediaItem, ItemKind::Media);
card_item!(LocationItem, ItemKind::Location);
card_item!(KeyValueItem, ItemKind::KeyValue);
card_item!(TemplateItem, ItemKind::Template);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fix_item_tag() {
        let step = StepItem::new(1, "A", "d", "s");
        assert_eq!(step.base().kind(), ItemKind::Step);
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["type"], "step");
        assert_eq!(json["actionStep"], "s");
    }

    fn assert_kind<T: CardItem + Serialize>(item: T) {
        assert_eq!(item.base().kind(), T::KIND);
        assert_eq!(serde_json::to_value(&item).unwrap()["type"], T::KIND.tag());
    }

    #[test]
    fn every_constructor_uses_its_kind() {
        assert_kind(BasicItem::new(1, "A", "d"));
        assert_kind(StepItem::new(1, "A", "d", "s"));
        assert_kind(ListItem::new(1, "A", "d", vec!["x".into()]));
        assert_kind(StatItem::new(1, "A", "d", StatValue::Text("3".into())));
        assert_kind(MediaItem::new(1, "A", "d", VisualElement::image("https://img.example/a.png")));
        assert_kind(LocationItem::new(1, "A", "d", "Berlin"));
        assert_kind(KeyValueItem::new(1, "A", "d", IndexMap::new()));
        assert_kind(TemplateItem::new(1, "A", "d", "{x}"));
    }

    #[test]
    fn stat_display_value_applies_affixes() {
        let mut stat = StatItem::new(1, "Revenue", "", StatValue::Number(Number::from(12)));
        stat.prefix = Some("$".into());
        stat.suffix = Some("k".into());
        assert_eq!(stat.display_value(), "$12k");

        let text = StatItem::new(2, "Users", "", StatValue::Text("3.2M".into()));
        assert_eq!(text.display_value(), "3.2M");
    }

    #[test]
    fn item_kind_tags_round_trip() {
        for tag in ItemKind::TAGS {
            let kind = ItemKind::from_tag(tag).unwrap();
            assert_eq!(kind.tag(), *tag);
        }
        assert!(ItemKind::from_tag("steps").is_none());
    }
}
