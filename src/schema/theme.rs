//! Presentation hints carried by a card: theme colors, style overrides and layout.
//!
//! Everything here is optional; renderers fall back to the template registry
//! and hard-coded defaults when a field is absent.
use serde::{Deserialize, Serialize};

/// Field-level style override used by theme regions and by individual items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

/// Visual treatment of the card surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    Flat,
    Outlined,
    Elevated,
    Glass,
}

impl CardStyle {
    pub const TAGS: &'static [&'static str] = &["flat", "outlined", "elevated", "glass"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ColorScheme {
    pub const TAGS: &'static [&'static str] = &["light", "dark", "auto"];
}

/// Optional card-level styling descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_style: Option<CardStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_style: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_style: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_style: Option<StyleOverride>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Grid,
    List,
    Carousel,
    Timeline,
}

impl LayoutType {
    pub const TAGS: &'static [&'static str] = &["grid", "list", "carousel", "timeline"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const TAGS: &'static [&'static str] = &["left", "center", "right"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Normal,
    Relaxed,
}

impl Spacing {
    pub const TAGS: &'static [&'static str] = &["compact", "normal", "relaxed"];
}

/// Frame drawn around each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStyle {
    Card,
    Minimal,
    Bordered,
}

impl ItemStyle {
    pub const TAGS: &'static [&'static str] = &["card", "minimal", "bordered"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    None,
    Fade,
    Slide,
    Zoom,
}

impl Animation {
    pub const TAGS: &'static [&'static str] = &["none", "fade", "slide", "zoom"];
}

/// Rendering hints attached to a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<LayoutType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_dividers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_icons: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl Layout {
    pub fn dividers(&self) -> bool {
        self.show_dividers.unwrap_or(false)
    }

    pub fn numbers(&self) -> bool {
        self.show_numbers.unwrap_or(false)
    }

    pub fn icons(&self) -> bool {
        self.show_icons.unwrap_or(true)
    }
}
