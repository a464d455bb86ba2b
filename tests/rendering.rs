//! Render dispatch over real card documents

use cardposter::render::{Block, FormatFamily, TitleEmphasis, VisualVariant};
use cardposter::schema::BulletStyle;
use cardposter::{render, render_all, validate, validate_str, Card, CardType, Error};
use serde_json::json;

fn fixture(name: &str) -> Card {
    let text = std::fs::read_to_string(format!("tests/fixtures/{}.json", name)).expect("read fixture");
    validate_str(&text).expect("valid fixture")
}

#[test]
fn steps_card_end_to_end() {
    let card = validate(&json!({
        "type": "steps",
        "title": "T",
        "items": [{"id": 1, "type": "step", "title": "A", "description": "d", "actionStep": "s"}]
    }))
    .expect("valid");

    for format in ["simple-1", "simple-2", "simple-3", "complex-1", "complex-2", "simple-99", "", "poster"] {
        let view = render(&card, 0, format).unwrap();
        assert_eq!(view.header.title, "T", "{}", format);
        assert_eq!(view.strategy, CardType::Steps);
        assert!(
            view.body.contains(&Block::ActionNote { text: "s".into() }),
            "{}: {:?}",
            format,
            view.body
        );
    }
}

#[test]
fn unknown_variant_falls_back_to_first() {
    for name in ["basic", "list"] {
        let card = fixture(name);
        let known = render(&card, 0, "simple-2").unwrap();
        let unknown = render(&card, 0, "simple-99").unwrap();

        assert_eq!(known.strategy, unknown.strategy);
        assert_eq!(known.family, FormatFamily::Simple);
        assert_ne!(known.variant, unknown.variant, "{}", name);
        assert_eq!(unknown.variant, cardposter::render::variants_for(card.card_type(), FormatFamily::Simple)[0]);
        assert_eq!(unknown, render(&card, 0, "simple-99").unwrap());
    }
}

#[test]
fn large_title_variant_emphasises_header() {
    let card = fixture("list");
    let view = render(&card, 0, "simple-2").unwrap();
    assert_eq!(view.variant, VisualVariant::LargeTitle);
    assert_eq!(view.header.emphasis, TitleEmphasis::Large);
    assert_eq!(view.body[0], Block::Heading { text: "Clothing".into(), level: 1 });
}

#[test]
fn index_outside_items_is_an_error() {
    let card = fixture("media");
    assert!(matches!(
        render(&card, 2, "simple-1"),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn template_text_is_substituted() {
    let card = fixture("template");
    let views = render_all(&card, "simple-1").unwrap();
    assert!(views[0].body.contains(&Block::Text {
        text: "Hello Ann, welcome to Platform!".into()
    }));
    assert!(views[1].body.contains(&Block::Text {
        text: "friend, your buddy is {buddy}.".into()
    }));
}

#[test]
fn unresolved_placeholders_stay_literal() {
    let card = validate(&json!({
        "type": "template",
        "title": "T",
        "items": [{
            "id": 1, "type": "template", "title": "t", "description": "",
            "templateText": "Hello {name}, you are {age}",
            "variables": {"name": "Ann"}
        }]
    }))
    .unwrap();
    let view = render(&card, 0, "simple-1").unwrap();
    assert!(view.body_text().contains("Hello Ann, you are {age}"));
}

#[test]
fn steps_are_numbered_by_position() {
    let card = fixture("steps");
    let views = render_all(&card, "simple-3").unwrap();
    for (i, view) in views.iter().enumerate() {
        assert_eq!(view.variant, VisualVariant::Checklist);
        assert!(matches!(
            view.body[0],
            Block::StepMarker { number, total: 3, .. } if number == i + 1
        ));
    }
    assert!(matches!(views[1].body[0], Block::StepMarker { completed: true, .. }));
    assert_eq!(views[2].position.label, "3 / 3");
}

#[test]
fn dashboard_meter_is_clamped() {
    let card = fixture("stats");
    let view = render(&card, 1, "simple-2").unwrap();
    assert_eq!(view.variant, VisualVariant::Dashboard);
    assert!(view.body.contains(&Block::Meter { percent: 100.0 }));
    assert!(matches!(&view.body[0], Block::StatFigure { display, .. } if display == "2.1%"));
}

#[test]
fn list_dividers_follow_layout() {
    let card = fixture("list");
    let views = render_all(&card, "simple-1").unwrap();
    assert_eq!(views[0].body.last(), Some(&Block::Divider));
    assert_ne!(views[2].body.last(), Some(&Block::Divider));
    assert!(views[1].body.contains(&Block::Bullets {
        style: BulletStyle::Check,
        items: vec!["Headlamp".into(), "Map".into(), "Compass".into()],
    }));
}

#[test]
fn location_map_card_leads_with_map() {
    let card = fixture("location");
    let view = render(&card, 0, "simple-2").unwrap();
    assert_eq!(view.variant, VisualVariant::MapCard);
    assert!(matches!(&view.body[0], Block::MapLink { url, .. } if url == "https://maps.example/ichiran"));
}

#[test]
fn key_value_keeps_entry_order() {
    let card = fixture("key_value");
    let view = render(&card, 0, "complex-2").unwrap();
    assert_eq!(view.variant, VisualVariant::Table);
    let keys: Vec<&str> = view
        .body
        .iter()
        .find_map(|b| match b {
            Block::KeyValueGrid { entries, .. } => Some(entries.iter().map(|e| e.key.as_str()).collect()),
            _ => None,
        })
        .expect("grid");
    assert_eq!(keys, ["Storage", "RAM", "CPU"]);
}

#[test]
fn theme_and_highlight_reach_resolved_style() {
    let card = fixture("basic");
    let views = render_all(&card, "simple-4").unwrap();
    assert_eq!(views[0].style.template_id, "simple-4");
    assert_eq!(views[0].style.background_color, "#111827");
    assert_eq!(views[0].style.accent_color, "#0ea5e9");
    assert!(!views[0].style.highlighted);
    assert!(views[1].style.highlighted);
    assert_eq!(views[1].style.font_weight, "600");
    assert!(views[0].header.icon.is_some());
    let footer = views[0].footer.as_ref().expect("footer");
    assert!(footer.show_attribution);
    assert_eq!(footer.links.len(), 1);
}

#[test]
fn item_style_beats_highlight_style_beats_theme() {
    let card = validate(&json!({
        "type": "basic",
        "title": "T",
        "theme": {
            "backgroundColor": "#base00",
            "itemStyle": {"backgroundColor": "#item00", "textColor": "#itemtx"},
            "highlightStyle": {"backgroundColor": "#high00"}
        },
        "items": [
            {"id": 1, "type": "basic", "title": "a", "description": ""},
            {"id": 2, "type": "basic", "title": "b", "description": "", "highlight": true},
            {"id": 3, "type": "basic", "title": "c", "description": "", "highlight": true,
             "style": {"backgroundColor": "#own000"}}
        ]
    }))
    .unwrap();
    let views = render_all(&card, "simple-1").unwrap();
    assert_eq!(views[0].style.background_color, "#item00");
    assert_eq!(views[1].style.background_color, "#high00");
    assert_eq!(views[2].style.background_color, "#own000");
    assert_eq!(views[2].style.text_color, "#itemtx");
}

#[test]
fn view_serialises_camel_case() {
    let card = fixture("media");
    let view = render(&card, 1, "simple-1").unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["formatId"], "simple-1");
    assert_eq!(json["position"]["label"], "2 / 2");
    assert_eq!(json["body"].as_array().unwrap().last().unwrap()["kind"], "image");
}
