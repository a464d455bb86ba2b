//! Style resolution: item override, highlight, theme, template, fallback.

use serde::Serialize;

use crate::registry::TemplateStyle;
use crate::schema::{CardStyle, ColorScheme, ItemBase, StyleOverride, Theme};

const FALLBACK_FONT_WEIGHT: &str = "normal";
const HIGHLIGHT_FONT_WEIGHT: &str = "600";

/// Fully resolved visual parameters for the current item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub template_id: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub border_color: String,
    pub border_width: f64,
    pub border_radius: f64,
    pub shadow: String,
    pub font_family: String,
    pub font_weight: String,
    pub card_style: CardStyle,
    pub color_scheme: ColorScheme,
    pub title_scale: f64,
    pub highlighted: bool,
}

/// First value any override layer supplies for a field
fn pick<T>(layers: &[&StyleOverride], field: impl Fn(&StyleOverride) -> Option<T>) -> Option<T> {
    layers.iter().copied().find_map(field)
}

fn theme_field(theme: Option<&Theme>, field: fn(&Theme) -> Option<&String>) -> Option<String> {
    theme.and_then(field).cloned()
}

impl ResolvedStyle {
    /// Merge field by field. Precedence, highest first: item `style`, theme
    /// `highlightStyle` (highlighted items only), theme `itemStyle`, theme
    /// base fields, template.
    pub fn resolve(template: &TemplateStyle, theme: Option<&Theme>, item: &ItemBase) -> Self {
        let highlighted = item.is_highlighted();
        let mut layers: Vec<&StyleOverride> = Vec::with_capacity(3);
        if let Some(style) = &item.style {
            layers.push(style);
        }
        if let Some(theme) = theme {
            if highlighted {
                if let Some(style) = &theme.highlight_style {
                    layers.push(style);
                }
            }
            if let Some(style) = &theme.item_style {
                layers.push(style);
            }
        }

        let base = |field: fn(&Theme) -> Option<&String>| theme_field(theme, field);

        let background_color = pick(&layers, |s| s.background_color.clone())
            .or_else(|| base(|t| t.background_color.as_ref()))
            .unwrap_or_else(|| template.background.to_string());
        let text_color = pick(&layers, |s| s.text_color.clone())
            .or_else(|| base(|t| t.text_color.as_ref()))
            .unwrap_or_else(|| template.text_color.to_string());
        let accent_color = base(|t| t.accent_color.as_ref())
            .or_else(|| base(|t| t.primary_color.as_ref()))
            .unwrap_or_else(|| template.accent_color.to_string());
        let border_color = pick(&layers, |s| s.border_color.clone())
            .or_else(|| base(|t| t.secondary_color.as_ref()))
            .unwrap_or_else(|| template.border_color.to_string());
        let border_width = pick(&layers, |s| s.border_width).unwrap_or(template.border_width);
        let border_radius = pick(&layers, |s| s.border_radius)
            .or_else(|| theme.and_then(|t| t.border_radius))
            .unwrap_or(template.border_radius);
        let shadow = pick(&layers, |s| s.shadow.clone()).unwrap_or_else(|| template.shadow.to_string());
        let font_family = pick(&layers, |s| s.font_family.clone())
            .or_else(|| base(|t| t.font_family.as_ref()))
            .unwrap_or_else(|| template.font_family.to_string());
        let default_weight = if highlighted { HIGHLIGHT_FONT_WEIGHT } else { FALLBACK_FONT_WEIGHT };
        let font_weight = pick(&layers, |s| s.font_weight.clone()).unwrap_or_else(|| default_weight.to_string());

        Self {
            template_id: template.id.to_string(),
            background_color,
            text_color,
            accent_color,
            border_color,
            border_width,
            border_radius,
            shadow,
            font_family,
            font_weight,
            card_style: theme.and_then(|t| t.card_style).unwrap_or(template.card_style),
            color_scheme: theme.and_then(|t| t.color_scheme).unwrap_or_default(),
            title_scale: template.title_scale,
            highlighted,
        }
    }
}
