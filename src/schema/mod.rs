//! Content model for information cards
//!
//! A [`Card`] is a tagged union over eight card types; each type fixes the
//! item variant its `items` hold. Untrusted JSON enters through
//! [`crate::validate::validate`], never through `serde` directly.

pub mod card;
pub mod item;
pub mod theme;

pub use card::{Card, CardBody, CardType, Footer, FooterLink};
pub use item::{
    BasicItem, BulletStyle, CardItem, Icon, IconKind, ItemBase, ItemKind, ItemLink, KeyValueItem, ListItem,
    LocationItem, MediaItem, Orientation, StatItem, StatValue, StepItem, TemplateItem, Trend, VisualElement,
    VisualKind, VisualPosition,
};
pub use theme::{
    Alignment, Animation, CardStyle, ColorScheme, ItemStyle, Layout, LayoutType, Spacing, StyleOverride, Theme,
};
