//! Render dispatcher
//!
//! `render` picks a layout strategy from the card type and a visual variant
//! from the format id, then asks the strategy to describe the current item.

pub mod format;
pub mod strategy;
pub mod style;
pub mod substitute;
pub mod view;

pub use format::{variants_for, FormatFamily, FormatId, VisualVariant};
pub use style::ResolvedStyle;
pub use substitute::substitute;
pub use view::{Block, Entry, FooterView, Header, Position, TitleEmphasis, ViewDescription};

use crate::registry;
use crate::schema::{Card, CardBody, CardItem};
use crate::{Error, Result};
use strategy::StrategyContext;

fn emphasis_for(variant: VisualVariant) -> TitleEmphasis {
    match variant {
        VisualVariant::LargeTitle | VisualVariant::Magazine | VisualVariant::Highlight => TitleEmphasis::Large,
        _ => TitleEmphasis::Normal,
    }
}

/// Describe item `index` of `card` in poster format `format_id`.
///
/// The index must already be inside `[0, len)`; the carousel owns wrapping.
/// Unknown format ids and variant numbers fall back to variant 1.
pub fn render(card: &Card, index: usize, format_id: &str) -> Result<ViewDescription> {
    let total = card.len();
    if index >= total {
        return Err(Error::IndexOutOfRange { index, len: total });
    }

    let format = FormatId::parse(format_id);
    let card_type = card.card_type();
    let variant = format.select(variants_for(card_type, format.family));
    let template = registry::lookup_style(format_id);
    let layout = card.effective_layout();
    let position = Position::new(index, total);
    let ctx = StrategyContext {
        position: &position,
        variant,
        layout: &layout,
        lead: card.description.as_deref(),
    };

    let (base, body) = match &card.body {
        CardBody::Basic { items } => (items[index].base(), strategy::basic(&items[index], &ctx)),
        CardBody::List { items } => (items[index].base(), strategy::list(&items[index], &ctx)),
        CardBody::Steps { items } => (items[index].base(), strategy::steps(&items[index], &ctx)),
        CardBody::Stats { items } => (items[index].base(), strategy::stats(&items[index], &ctx)),
        CardBody::Media { items } => (items[index].base(), strategy::media(&items[index], &ctx)),
        CardBody::Location { items } => (items[index].base(), strategy::location(&items[index], &ctx)),
        CardBody::KeyValue { items } => (items[index].base(), strategy::key_value(&items[index], &ctx)),
        CardBody::Template {
            items,
            global_variables,
        } => (
            items[index].base(),
            strategy::template(&items[index], global_variables.as_ref(), &ctx),
        ),
    };

    let theme = card.theme.as_ref();
    let header = Header {
        title: card.title.clone(),
        subtitle: card.subtitle.clone(),
        icon: base.icon.clone().filter(|_| layout.icons()),
        emphasis: emphasis_for(variant),
        style: theme.and_then(|t| t.header_style.clone()),
    };
    let footer = card.footer.as_ref().map(|f| FooterView {
        text: f.text.clone(),
        show_attribution: f.show_attribution.unwrap_or(false),
        links: f.links.clone().unwrap_or_default(),
        style: theme.and_then(|t| t.footer_style.clone()),
    });

    log::trace!(
        "rendered {} item {}/{} as {:?} ({})",
        card_type,
        index + 1,
        total,
        variant,
        template.id
    );

    Ok(ViewDescription {
        format_id: format_id.to_string(),
        family: format.family,
        strategy: card_type,
        variant,
        position,
        header,
        body,
        footer,
        style: ResolvedStyle::resolve(template, theme, base),
    })
}

/// Render every item of the card in order
pub fn render_all(card: &Card, format_id: &str) -> Result<Vec<ViewDescription>> {
    (0..card.len()).map(|i| render(card, i, format_id)).collect()
}
