//! Poster template catalog
//!
//! A fixed, ordered list of visual parameter sets keyed by format id. The
//! first entry is the default and is returned for any unknown id.

use serde::Serialize;

use crate::render::format::FormatFamily;
use crate::schema::CardStyle;

/// Visual parameters for one poster format
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub family: FormatFamily,
    pub background: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub border_color: &'static str,
    pub border_width: f64,
    pub border_radius: f64,
    pub shadow: &'static str,
    pub font_family: &'static str,
    pub card_style: CardStyle,
    /// Title size relative to body text
    pub title_scale: f64,
}

static CATALOG: [TemplateStyle; 6] = [
    TemplateStyle {
        id: "simple-1",
        name: "Classic",
        family: FormatFamily::Simple,
        background: "#ffffff",
        text_color: "#1f2937",
        accent_color: "#2563eb",
        border_color: "#e5e7eb",
        border_width: 1.0,
        border_radius: 12.0,
        shadow: "0 4px 12px rgba(0,0,0,0.08)",
        font_family: "Inter, sans-serif",
        card_style: CardStyle::Elevated,
        title_scale: 1.6,
    },
    TemplateStyle {
        id: "simple-2",
        name: "Bold Title",
        family: FormatFamily::Simple,
        background: "#fff7ed",
        text_color: "#111827",
        accent_color: "#ea580c",
        border_color: "#fed7aa",
        border_width: 2.0,
        border_radius: 16.0,
        shadow: "none",
        font_family: "Poppins, sans-serif",
        card_style: CardStyle::Outlined,
        title_scale: 2.4,
    },
    TemplateStyle {
        id: "simple-3",
        name: "Journal",
        family: FormatFamily::Simple,
        background: "#fdfcf7",
        text_color: "#292524",
        accent_color: "#78716c",
        border_color: "#e7e5e4",
        border_width: 0.0,
        border_radius: 4.0,
        shadow: "none",
        font_family: "Georgia, serif",
        card_style: CardStyle::Flat,
        title_scale: 1.8,
    },
    TemplateStyle {
        id: "simple-4",
        name: "Spotlight",
        family: FormatFamily::Simple,
        background: "#111827",
        text_color: "#f9fafb",
        accent_color: "#facc15",
        border_color: "#374151",
        border_width: 1.0,
        border_radius: 20.0,
        shadow: "0 10px 30px rgba(250,204,21,0.25)",
        font_family: "Montserrat, sans-serif",
        card_style: CardStyle::Elevated,
        title_scale: 2.0,
    },
    TemplateStyle {
        id: "complex-1",
        name: "Gradient Deck",
        family: FormatFamily::Complex,
        background: "linear-gradient(135deg, #6366f1 0%, #ec4899 100%)",
        text_color: "#ffffff",
        accent_color: "#fde68a",
        border_color: "rgba(255,255,255,0.3)",
        border_width: 1.0,
        border_radius: 24.0,
        shadow: "0 20px 40px rgba(99,102,241,0.35)",
        font_family: "Inter, sans-serif",
        card_style: CardStyle::Glass,
        title_scale: 2.2,
    },
    TemplateStyle {
        id: "complex-2",
        name: "Editorial",
        family: FormatFamily::Complex,
        background: "#f8fafc",
        text_color: "#0f172a",
        accent_color: "#dc2626",
        border_color: "#0f172a",
        border_width: 3.0,
        border_radius: 0.0,
        shadow: "8px 8px 0 #0f172a",
        font_family: "Playfair Display, serif",
        card_style: CardStyle::Outlined,
        title_scale: 2.6,
    },
];

/// All templates in catalog order
pub fn catalog() -> &'static [TemplateStyle] {
    &CATALOG
}

/// The default template (first catalog entry)
pub fn default_style() -> &'static TemplateStyle {
    &CATALOG[0]
}

/// Look up a template by format id; unknown ids get the default.
pub fn lookup_style(format_id: &str) -> &'static TemplateStyle {
    match CATALOG.iter().find(|s| s.id == format_id) {
        Some(style) => style,
        None => {
            log::debug!("no template '{}', using '{}'", format_id, CATALOG[0].id);
            default_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(lookup_style("simple-3").name, "Journal");
        assert_eq!(lookup_style("complex-2").family, FormatFamily::Complex);
    }

    #[test]
    fn unknown_ids_fall_back_to_first_entry() {
        assert_eq!(lookup_style("simple-99").id, "simple-1");
        assert_eq!(lookup_style("").id, catalog()[0].id);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = catalog().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }
}
