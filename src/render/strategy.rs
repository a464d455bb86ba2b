//! Per-card-type layout strategies.
//!
//! Each strategy turns one item into body blocks for the selected visual
//! variant. Variants a strategy does not define render as its standard form.

use indexmap::IndexMap;

use super::format::VisualVariant;
use super::substitute::substitute;
use super::view::{Block, Entry, Position};
use crate::schema::{
    BasicItem, BulletStyle, CardItem, KeyValueItem, Layout, ListItem, LocationItem, MediaItem, Orientation, StatItem,
    StepItem, TemplateItem, VisualPosition,
};

const MAP_LINK_LABEL: &str = "Open map";

/// Inputs shared by every strategy
pub struct StrategyContext<'a> {
    pub position: &'a Position,
    pub variant: VisualVariant,
    pub layout: &'a Layout,
    /// Card-level description, used as a lead paragraph by some variants
    pub lead: Option<&'a str>,
}

fn heading(item: &impl CardItem, level: u8) -> Block {
    Block::Heading {
        text: item.title().to_string(),
        level,
    }
}

/// Paragraph for the item description, skipped when empty
fn paragraph(item: &impl CardItem) -> Option<Block> {
    let text = item.description().trim();
    if text.is_empty() {
        None
    } else {
        Some(Block::Paragraph { text: text.to_string() })
    }
}

/// Tags, link and divider shared by every strategy
fn trailing(item: &impl CardItem, ctx: &StrategyContext<'_>, body: &mut Vec<Block>) {
    let base = item.base();
    if !base.tag_list().is_empty() {
        body.push(Block::Tags {
            tags: base.tag_list().to_vec(),
        });
    }
    if let Some(link) = &base.link {
        body.push(Block::Link {
            url: link.url.clone(),
            label: link.text.clone().unwrap_or_else(|| link.url.clone()),
        });
    }
    if ctx.layout.dividers() && !ctx.position.is_last() {
        body.push(Block::Divider);
    }
}

pub fn basic(item: &BasicItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::Quote => body.push(Block::Quote {
            text: item.description().to_string(),
            attribution: Some(item.title().to_string()),
        }),
        VisualVariant::Magazine => {
            if let Some(lead) = ctx.lead {
                body.push(Block::Callout { text: lead.to_string() });
            }
            body.push(heading(item, 2));
            body.extend(paragraph(item));
        }
        VisualVariant::LargeTitle => {
            body.push(heading(item, 1));
            body.extend(paragraph(item));
        }
        _ => {
            body.push(heading(item, 2));
            body.extend(paragraph(item));
        }
    }
    trailing(item, ctx, &mut body);
    body
}

pub fn list(item: &ListItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let default_style = if ctx.layout.numbers() {
        BulletStyle::Number
    } else {
        BulletStyle::Disc
    };
    let bullets = |fallback: BulletStyle| Block::Bullets {
        style: item.bullet_style.unwrap_or(fallback),
        items: item.bullet_points.clone(),
    };

    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::LargeTitle => {
            body.push(heading(item, 1));
            body.extend(paragraph(item));
            body.push(bullets(default_style));
        }
        VisualVariant::Blog => {
            if let Some(lead) = ctx.lead.filter(|_| ctx.position.index == 0) {
                body.push(Block::Callout { text: lead.to_string() });
            }
            body.push(heading(item, 2));
            body.extend(paragraph(item));
            body.push(bullets(default_style));
        }
        VisualVariant::Marketing => {
            body.push(heading(item, 2));
            if !item.description().trim().is_empty() {
                body.push(Block::Callout {
                    text: item.description().trim().to_string(),
                });
            }
            body.push(bullets(BulletStyle::Check));
        }
        _ => {
            body.push(heading(item, 2));
            body.push(bullets(default_style));
        }
    }
    trailing(item, ctx, &mut body);
    body
}

pub fn steps(item: &StepItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let marker = Block::StepMarker {
        number: ctx.position.index + 1,
        total: ctx.position.total,
        completed: item.is_completed.unwrap_or(false),
    };
    let action = Block::ActionNote {
        text: item.action_step.clone(),
    };

    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::Timeline => {
            body.push(Block::Timeline {
                current: ctx.position.index,
                total: ctx.position.total,
            });
            body.push(marker);
            body.push(heading(item, 2));
            body.push(action);
        }
        VisualVariant::Checklist => {
            body.push(marker);
            body.push(heading(item, 3));
            body.push(action);
            body.extend(paragraph(item));
        }
        _ => {
            body.push(marker);
            body.push(heading(item, 2));
            body.extend(paragraph(item));
            body.push(action);
        }
    }
    trailing(item, ctx, &mut body);
    body
}

pub fn stats(item: &StatItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let figure = Block::StatFigure {
        display: item.display_value(),
        trend: item.trend,
        percentage: item.percentage,
    };

    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::Dashboard => {
            body.push(figure);
            if let Some(percent) = item.percentage {
                body.push(Block::Meter {
                    percent: percent.clamp(0.0, 100.0),
                });
            }
            body.push(heading(item, 3));
            body.extend(paragraph(item));
        }
        VisualVariant::Highlight => {
            body.push(figure);
            body.push(Block::Caption {
                text: item.title().to_string(),
            });
        }
        _ => {
            body.push(heading(item, 2));
            body.push(figure);
            body.extend(paragraph(item));
        }
    }
    trailing(item, ctx, &mut body);
    body
}

pub fn media(item: &MediaItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let visual = &item.visual_element;
    let image = Block::Image {
        url: visual.url.clone(),
        alt: visual.alt.clone().or_else(|| Some(item.title().to_string())),
        media: visual.kind,
        position: visual.position.unwrap_or_default(),
    };
    let caption = item.caption.as_ref().map(|text| Block::Caption { text: text.clone() });

    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::Gallery => {
            body.push(image);
            body.push(caption.unwrap_or_else(|| Block::Caption {
                text: item.title().to_string(),
            }));
        }
        VisualVariant::Polaroid => {
            body.push(image);
            body.push(Block::Caption {
                text: item.title().to_string(),
            });
            body.extend(paragraph(item));
        }
        VisualVariant::Magazine => {
            body.push(heading(item, 2));
            body.push(image);
            body.extend(paragraph(item));
            body.extend(caption);
        }
        _ => {
            let image_last = matches!(
                visual.position,
                Some(VisualPosition::Bottom) | Some(VisualPosition::Right)
            );
            let mut text = vec![heading(item, 2)];
            text.extend(paragraph(item));
            text.extend(caption);
            if image_last {
                body.extend(text);
                body.push(image);
            } else {
                body.push(image);
                body.extend(text);
            }
        }
    }
    trailing(item, ctx, &mut body);
    body
}

pub fn location(item: &LocationItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let address = Block::Address {
        location: item.location.clone(),
        address: item.address.clone(),
    };
    let map = item.map_url.as_ref().map(|url| Block::MapLink {
        url: url.clone(),
        label: MAP_LINK_LABEL.to_string(),
    });

    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::MapCard => {
            body.extend(map);
            body.push(address);
            body.push(heading(item, 3));
        }
        VisualVariant::Directory => {
            body.push(heading(item, 2));
            body.push(address);
            body.extend(map);
            body.extend(paragraph(item));
        }
        _ => {
            body.push(heading(item, 2));
            body.push(address);
            body.extend(paragraph(item));
            body.extend(map);
        }
    }
    trailing(item, ctx, &mut body);
    body
}

fn entries(map: &IndexMap<String, String>) -> Vec<Entry> {
    map.iter()
        .map(|(key, value)| Entry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

pub fn key_value(item: &KeyValueItem, ctx: &StrategyContext<'_>) -> Vec<Block> {
    let orientation = item.orientation.unwrap_or_default();
    let columns = ctx.layout.columns.filter(|c| *c > 0);

    let mut body = vec![heading(item, 2)];
    match ctx.variant {
        VisualVariant::Table => body.push(Block::KeyValueGrid {
            entries: entries(&item.key_value),
            orientation: Orientation::Horizontal,
            columns: 2,
        }),
        VisualVariant::Tiles => {
            body.push(Block::KeyValueGrid {
                entries: entries(&item.key_value),
                orientation,
                columns: columns.unwrap_or(2),
            });
            body.extend(paragraph(item));
        }
        _ => {
            body.extend(paragraph(item));
            body.push(Block::KeyValueGrid {
                entries: entries(&item.key_value),
                orientation,
                columns: columns.unwrap_or(1),
            });
        }
    }
    trailing(item, ctx, &mut body);
    body
}

pub fn template(
    item: &TemplateItem,
    global_variables: Option<&IndexMap<String, String>>,
    ctx: &StrategyContext<'_>,
) -> Vec<Block> {
    let text = substitute(&item.template_text, item.variables.as_ref(), global_variables);

    let mut body = Vec::new();
    match ctx.variant {
        VisualVariant::Letter => {
            body.push(heading(item, 2));
            body.extend(paragraph(item));
            body.push(Block::Text { text });
        }
        VisualVariant::Quote => body.push(Block::Quote {
            text,
            attribution: Some(item.title().to_string()),
        }),
        _ => {
            body.push(heading(item, 2));
            body.push(Block::Text { text });
            body.extend(paragraph(item));
        }
    }
    trailing(item, ctx, &mut body);
    body
}
