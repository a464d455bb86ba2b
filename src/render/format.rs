//! Format ids and the (card type, format family) -> visual variant table.

use serde::Serialize;

use crate::schema::CardType;

/// Poster family encoded in the id prefix (`simple-N`, `complex-N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatFamily {
    Simple,
    Complex,
}

/// A parsed format id. Anything unparseable becomes `simple-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatId {
    pub family: FormatFamily,
    /// 1-based variant number
    pub variant: u32,
}

impl Default for FormatId {
    fn default() -> Self {
        Self {
            family: FormatFamily::Simple,
            variant: 1,
        }
    }
}

impl FormatId {
    pub fn parse(id: &str) -> Self {
        let parsed = id.split_once('-').and_then(|(prefix, number)| {
            let family = match prefix {
                "simple" => FormatFamily::Simple,
                "complex" => FormatFamily::Complex,
                _ => return None,
            };
            let variant = number.parse::<u32>().ok().filter(|n| *n >= 1)?;
            Some(FormatId { family, variant })
        });
        match parsed {
            Some(format) => format,
            None => {
                log::debug!("unrecognised format id '{}', using simple-1", id);
                FormatId::default()
            }
        }
    }

    /// Pick this format's variant out of a strategy's variant list.
    /// Out-of-range numbers select the first entry.
    pub fn select(&self, variants: &[VisualVariant]) -> VisualVariant {
        let wanted = (self.variant as usize).checked_sub(1).and_then(|i| variants.get(i));
        match wanted {
            Some(v) => *v,
            None => {
                log::debug!(
                    "variant {} not available for {:?}, using the first",
                    self.variant,
                    self.family
                );
                variants.first().copied().unwrap_or(VisualVariant::Standard)
            }
        }
    }
}

/// Visual variant of a layout strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualVariant {
    Standard,
    Qa,
    LargeTitle,
    Blog,
    Marketing,
    Quote,
    Magazine,
    Timeline,
    Checklist,
    Dashboard,
    Highlight,
    Gallery,
    Polaroid,
    MapCard,
    Directory,
    Table,
    Tiles,
    Letter,
}

use FormatFamily::{Complex, Simple};
use VisualVariant::*;

/// Variants available to a strategy within a format family, in variant-number order.
pub fn variants_for(card_type: CardType, family: FormatFamily) -> &'static [VisualVariant] {
    match (card_type, family) {
        (CardType::Basic, Simple) => &[Qa, LargeTitle, Quote],
        (CardType::Basic, Complex) => &[Qa, Magazine],
        (CardType::List, Simple) => &[Standard, LargeTitle, Blog, Marketing],
        (CardType::List, Complex) => &[Standard, Blog],
        (CardType::Steps, Simple) => &[Standard, Timeline, Checklist],
        (CardType::Steps, Complex) => &[Standard, Timeline],
        (CardType::Stats, Simple) => &[Standard, Dashboard, Highlight],
        (CardType::Stats, Complex) => &[Standard, Dashboard],
        (CardType::Media, Simple) => &[Standard, Gallery, Polaroid],
        (CardType::Media, Complex) => &[Standard, Magazine],
        (CardType::Location, Simple) => &[Standard, MapCard],
        (CardType::Location, Complex) => &[Standard, Directory],
        (CardType::KeyValue, Simple) => &[Standard, Table, Tiles],
        (CardType::KeyValue, Complex) => &[Standard, Table],
        (CardType::Template, Simple) => &[Standard, Letter, Quote],
        (CardType::Template, Complex) => &[Standard, Letter],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_family_and_number() {
        assert_eq!(
            FormatId::parse("complex-2"),
            FormatId {
                family: Complex,
                variant: 2
            }
        );
        assert_eq!(FormatId::parse("simple-0"), FormatId::default());
        assert_eq!(FormatId::parse("poster"), FormatId::default());
        assert_eq!(FormatId::parse("fancy-2"), FormatId::default());
    }

    #[test]
    fn list_simple_family_has_four_variants() {
        assert_eq!(
            variants_for(CardType::List, Simple),
            &[Standard, LargeTitle, Blog, Marketing]
        );
    }

    #[test]
    fn every_table_entry_starts_with_the_default_variant() {
        for card_type in CardType::ALL {
            for family in [Simple, Complex] {
                let variants = variants_for(card_type, family);
                let expected = if card_type == CardType::Basic { Qa } else { Standard };
                assert_eq!(variants[0], expected, "{:?}/{:?}", card_type, family);
            }
        }
    }

    #[test]
    fn out_of_range_variant_selects_first() {
        let variants = variants_for(CardType::List, Simple);
        assert_eq!(FormatId::parse("simple-4").select(variants), Marketing);
        assert_eq!(FormatId::parse("simple-99").select(variants), Standard);
    }
}
