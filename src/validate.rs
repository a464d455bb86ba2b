//! Structural validation of untrusted card JSON.
//!
//! The validator walks the raw `serde_json::Value` with a field path so a
//! failure names exactly which field is wrong. Only once the whole document
//! has been checked is it converted into the typed [`Card`].

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::{
    Alignment, Animation, BulletStyle, Card, CardStyle, CardType, ColorScheme, IconKind, ItemKind, ItemStyle,
    LayoutType, Orientation, Spacing, Trend, VisualKind, VisualPosition,
};

type Checked<T> = std::result::Result<T, ValidationError>;

/// Validate an arbitrary JSON value into a [`Card`].
pub fn validate(raw: &Value) -> Checked<Card> {
    let result = check_card(raw).and_then(|_| {
        serde_json::from_value::<Card>(raw.clone()).map_err(|e| ValidationError::SchemaViolation {
            path: "$".to_string(),
            expected: "card".to_string(),
            actual: e.to_string(),
        })
    });
    if let Err(e) = &result {
        log::debug!("card rejected: {}", e);
    }
    result
}

/// Parse `text` as JSON and validate it.
pub fn validate_str(text: &str) -> Checked<Card> {
    let raw: Value = serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    validate(&raw)
}

/// Name of the JSON kind of `v`, as reported in `actual`
pub fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn violation(path: &str, expected: &str, actual: impl Into<String>) -> ValidationError {
    ValidationError::SchemaViolation {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: actual.into(),
    }
}

fn expect_object<'a>(v: &'a Value, path: &str) -> Checked<&'a Map<String, Value>> {
    v.as_object().ok_or_else(|| violation(path, "object", json_kind(v)))
}

fn index_path(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}

/// An object under validation plus the path that leads to it
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    fn new(obj: &'a Map<String, Value>, path: String) -> Self {
        Self { obj, path }
    }

    fn child(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Present and non-null value under `key`
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str, expected: &str) -> Checked<&'a Value> {
        match self.obj.get(key) {
            None => Err(violation(&self.child(key), expected, "missing")),
            Some(v) => Ok(v),
        }
    }

    fn required_str(&self, key: &str) -> Checked<&'a str> {
        let v = self.required(key, "string")?;
        v.as_str().ok_or_else(|| violation(&self.child(key), "string", json_kind(v)))
    }

    fn optional_str(&self, key: &str) -> Checked<Option<&'a str>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| violation(&self.child(key), "string", json_kind(v))),
        }
    }

    fn optional_strs(&self, keys: &[&str]) -> Checked<()> {
        for key in keys {
            self.optional_str(key)?;
        }
        Ok(())
    }

    fn optional_bool(&self, key: &str) -> Checked<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_bool()
                .map(Some)
                .ok_or_else(|| violation(&self.child(key), "boolean", json_kind(v))),
        }
    }

    fn required_number(&self, key: &str) -> Checked<()> {
        let v = self.required(key, "number")?;
        if v.is_number() {
            Ok(())
        } else {
            Err(violation(&self.child(key), "number", json_kind(v)))
        }
    }

    fn optional_number(&self, key: &str) -> Checked<()> {
        match self.get(key) {
            Some(v) if !v.is_number() => Err(violation(&self.child(key), "number", json_kind(v))),
            _ => Ok(()),
        }
    }

    /// Non-negative integer that fits in `u32`
    fn optional_integer(&self, key: &str) -> Checked<()> {
        match self.get(key) {
            None => Ok(()),
            Some(v) => match v.as_u64() {
                Some(n) if n <= u64::from(u32::MAX) => Ok(()),
                _ => Err(violation(&self.child(key), "integer", json_kind(v))),
            },
        }
    }

    fn optional_enum(&self, key: &str, allowed: &[&str]) -> Checked<Option<&'a str>> {
        match self.optional_str(key)? {
            Some(s) if !allowed.contains(&s) => Err(violation(&self.child(key), &allowed.join("|"), format!("\"{}\"", s))),
            other => Ok(other),
        }
    }

    /// Discriminant check: missing or non-string is a schema violation,
    /// an unknown tag is an unknown variant.
    fn required_tag(&self, key: &str, allowed: &[&str]) -> Checked<&'a str> {
        let tag = self.required_str(key)?;
        if allowed.contains(&tag) {
            Ok(tag)
        } else {
            Err(ValidationError::UnknownVariant {
                path: self.child(key),
                tag: tag.to_string(),
            })
        }
    }

    fn required_array(&self, key: &str) -> Checked<&'a Vec<Value>> {
        let v = self.required(key, "array")?;
        v.as_array().ok_or_else(|| violation(&self.child(key), "array", json_kind(v)))
    }

    fn optional_array(&self, key: &str) -> Checked<Option<&'a Vec<Value>>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_array()
                .map(Some)
                .ok_or_else(|| violation(&self.child(key), "array", json_kind(v))),
        }
    }

    fn string_elements(&self, key: &str, values: &[Value]) -> Checked<()> {
        let path = self.child(key);
        for (i, v) in values.iter().enumerate() {
            if !v.is_string() {
                return Err(violation(&index_path(&path, i), "string", json_kind(v)));
            }
        }
        Ok(())
    }

    fn required_string_list(&self, key: &str) -> Checked<()> {
        let values = self.required_array(key)?;
        self.string_elements(key, values)
    }

    fn optional_string_list(&self, key: &str) -> Checked<()> {
        match self.optional_array(key)? {
            None => Ok(()),
            Some(values) => self.string_elements(key, values),
        }
    }

    fn required_object(&self, key: &str) -> Checked<Fields<'a>> {
        let v = self.required(key, "object")?;
        let path = self.child(key);
        let obj = expect_object(v, &path)?;
        Ok(Fields::new(obj, path))
    }

    fn optional_object(&self, key: &str) -> Checked<Option<Fields<'a>>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => {
                let path = self.child(key);
                let obj = expect_object(v, &path)?;
                Ok(Some(Fields::new(obj, path)))
            }
        }
    }

    /// Every value of the record must be a string
    fn check_string_map(map: &Fields<'_>) -> Checked<()> {
        for (k, v) in map.obj {
            if !v.is_string() {
                return Err(violation(&map.child(k), "string", json_kind(v)));
            }
        }
        Ok(())
    }

    fn required_string_map(&self, key: &str) -> Checked<()> {
        let map = self.required_object(key)?;
        Self::check_string_map(&map)
    }

    fn optional_string_map(&self, key: &str) -> Checked<()> {
        match self.optional_object(key)? {
            None => Ok(()),
            Some(map) => Self::check_string_map(&map),
        }
    }
}

fn check_card(raw: &Value) -> Checked<CardType> {
    let root = Fields::new(expect_object(raw, "$")?, String::new());

    let tag = root.required_tag("type", CardType::TAGS)?;
    let card_type: CardType = tag.parse().map_err(|_| ValidationError::UnknownVariant {
        path: "type".to_string(),
        tag: tag.to_string(),
    })?;

    root.required_str("title")?;
    root.optional_strs(&["subtitle", "description"])?;

    if let Some(footer) = root.optional_object("footer")? {
        check_footer(&footer)?;
    }
    if let Some(theme) = root.optional_object("theme")? {
        check_theme(&theme)?;
    }
    if let Some(layout) = root.optional_object("layout")? {
        check_layout(&layout, card_type)?;
    }
    if card_type == CardType::Template {
        root.optional_string_map("globalVariables")?;
    }

    let items = root.required_array("items")?;
    let items_path = root.child("items");
    for (i, item) in items.iter().enumerate() {
        let path = index_path(&items_path, i);
        let obj = expect_object(item, &path)?;
        check_item(&Fields::new(obj, path), card_type)?;
    }

    Ok(card_type)
}

fn check_footer(footer: &Fields<'_>) -> Checked<()> {
    footer.optional_str("text")?;
    footer.optional_bool("showAttribution")?;
    if let Some(links) = footer.optional_array("links")? {
        let links_path = footer.child("links");
        for (j, link) in links.iter().enumerate() {
            let path = index_path(&links_path, j);
            let link = Fields::new(expect_object(link, &path)?, path);
            link.required_str("text")?;
            link.required_str("url")?;
        }
    }
    Ok(())
}

fn check_style(style: &Fields<'_>) -> Checked<()> {
    style.optional_strs(&[
        "backgroundColor",
        "textColor",
        "borderColor",
        "shadow",
        "fontFamily",
        "fontWeight",
    ])?;
    style.optional_number("borderWidth")?;
    style.optional_number("borderRadius")
}

fn check_theme(theme: &Fields<'_>) -> Checked<()> {
    theme.optional_strs(&[
        "primaryColor",
        "secondaryColor",
        "backgroundColor",
        "textColor",
        "accentColor",
        "fontFamily",
    ])?;
    theme.optional_number("borderRadius")?;
    theme.optional_enum("cardStyle", CardStyle::TAGS)?;
    theme.optional_enum("colorScheme", ColorScheme::TAGS)?;
    for region in ["headerStyle", "footerStyle", "itemStyle", "highlightStyle"] {
        if let Some(style) = theme.optional_object(region)? {
            check_style(&style)?;
        }
    }
    Ok(())
}

const STATS_LAYOUTS: &[&str] = &["grid", "list"];

fn check_layout(layout: &Fields<'_>, card_type: CardType) -> Checked<()> {
    let layout_type = layout.optional_enum("type", LayoutType::TAGS)?;
    if card_type == CardType::Stats {
        if let Some(t) = layout_type.filter(|t| !STATS_LAYOUTS.contains(t)) {
            return Err(violation(&layout.child("type"), &STATS_LAYOUTS.join("|"), format!("\"{}\"", t)));
        }
    }
    layout.optional_integer("columns")?;
    layout.optional_enum("alignment", Alignment::TAGS)?;
    layout.optional_enum("spacing", Spacing::TAGS)?;
    layout.optional_enum("itemStyle", ItemStyle::TAGS)?;
    layout.optional_bool("showDividers")?;
    let show_numbers = layout.optional_bool("showNumbers")?;
    if card_type == CardType::Steps && show_numbers == Some(false) {
        return Err(violation(&layout.child("showNumbers"), "true", "false"));
    }
    layout.optional_bool("showIcons")?;
    layout.optional_enum("animation", Animation::TAGS)?;
    Ok(())
}

fn check_icon(icon: &Fields<'_>) -> Checked<()> {
    icon.required_tag("type", IconKind::TAGS)?;
    icon.required_str("value")?;
    icon.optional_str("color")?;
    Ok(())
}

fn check_visual(visual: &Fields<'_>) -> Checked<()> {
    visual.required_tag("type", VisualKind::TAGS)?;
    visual.required_str("url")?;
    visual.optional_str("alt")?;
    visual.optional_enum("position", VisualPosition::TAGS)?;
    if let Some(style) = visual.optional_object("style")? {
        check_style(&style)?;
    }
    Ok(())
}

fn check_item(item: &Fields<'_>, card_type: CardType) -> Checked<()> {
    let tag = item.required_tag("type", ItemKind::TAGS)?;
    let expected = card_type.item_kind();
    let kind = ItemKind::from_tag(tag).ok_or_else(|| ValidationError::UnknownVariant {
        path: item.child("type"),
        tag: tag.to_string(),
    })?;
    if kind != expected {
        return Err(violation(&item.child("type"), expected.tag(), format!("\"{}\"", tag)));
    }

    item.required_number("id")?;
    item.required_str("title")?;
    item.required_str("description")?;
    if let Some(icon) = item.optional_object("icon")? {
        check_icon(&icon)?;
    }
    item.optional_bool("highlight")?;
    if let Some(style) = item.optional_object("style")? {
        check_style(&style)?;
    }
    item.optional_string_list("tags")?;
    if let Some(link) = item.optional_object("link")? {
        link.required_str("url")?;
        link.optional_str("text")?;
    }

    match kind {
        ItemKind::Basic => Ok(()),
        ItemKind::Step => {
            item.required_str("actionStep")?;
            item.optional_integer("stepNumber")?;
            item.optional_bool("isCompleted")?;
            Ok(())
        }
        ItemKind::List => {
            item.required_string_list("bulletPoints")?;
            item.optional_enum("bulletStyle", BulletStyle::TAGS)?;
            Ok(())
        }
        ItemKind::Stat => {
            let value = item.required("value", "number|string")?;
            if !(value.is_number() || value.is_string()) {
                return Err(violation(&item.child("value"), "number|string", json_kind(value)));
            }
            item.optional_number("percentage")?;
            item.optional_enum("trend", Trend::TAGS)?;
            item.optional_strs(&["prefix", "suffix"])
        }
        ItemKind::Media => {
            check_visual(&item.required_object("visualElement")?)?;
            item.optional_str("caption")?;
            Ok(())
        }
        ItemKind::Location => {
            item.required_str("location")?;
            item.optional_strs(&["address", "mapUrl"])
        }
        ItemKind::KeyValue => {
            item.required_string_map("keyValue")?;
            item.optional_enum("orientation", Orientation::TAGS)?;
            Ok(())
        }
        ItemKind::Template => {
            item.required_str("templateText")?;
            item.optional_string_map("variables")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn steps_doc() -> Value {
        json!({
            "type": "steps",
            "title": "T",
            "items": [{"id": 1, "type": "step", "title": "A", "description": "d", "actionStep": "s"}]
        })
    }

    #[test]
    fn minimal_steps_card_validates() {
        let card = validate(&steps_doc()).expect("valid");
        assert_eq!(card.card_type(), CardType::Steps);
        assert_eq!(card.len(), 1);
    }

    #[test]
    fn unknown_card_type_is_unknown_variant() {
        let mut doc = steps_doc();
        doc["type"] = json!("poster");
        let err = validate(&doc).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownVariant {
                path: "type".into(),
                tag: "poster".into()
            }
        );
    }

    #[test]
    fn missing_action_step_names_path() {
        let mut doc = steps_doc();
        doc["items"][0].as_object_mut().unwrap().remove("actionStep");
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path(), Some("items[0].actionStep"));
        assert!(matches!(err, ValidationError::SchemaViolation { ref actual, .. } if actual == "missing"));
    }

    #[test]
    fn mismatched_item_tag_is_rejected() {
        let mut doc = steps_doc();
        doc["items"][0]["type"] = json!("list");
        let err = validate(&doc).unwrap_err();
        assert_eq!(
            err,
            ValidationError::SchemaViolation {
                path: "items[0].type".into(),
                expected: "step".into(),
                actual: "\"list\"".into()
            }
        );
    }

    #[test]
    fn nulls_count_as_absent_for_optional_fields() {
        let mut doc = steps_doc();
        doc["subtitle"] = Value::Null;
        doc["items"][0]["icon"] = Value::Null;
        let card = validate(&doc).expect("valid");
        assert!(card.subtitle.is_none());
    }

    #[test]
    fn root_must_be_object() {
        let err = validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.path(), Some("$"));
    }

    #[test]
    fn malformed_text_is_reported() {
        assert!(matches!(validate_str("{not json"), Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn stats_layout_restricted_to_grid_or_list() {
        let doc = json!({
            "type": "stats",
            "title": "KPIs",
            "layout": {"type": "timeline"},
            "items": [{"id": 1, "type": "stat", "title": "Users", "description": "", "value": 10}]
        });
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path(), Some("layout.type"));
    }

    #[test]
    fn steps_reject_hidden_numbers() {
        let mut doc = steps_doc();
        doc["layout"] = json!({"showNumbers": false});
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path(), Some("layout.showNumbers"));
    }

    #[test]
    fn nested_footer_link_path() {
        let mut doc = steps_doc();
        doc["footer"] = json!({"links": [{"text": "a", "url": "https://a"}, {"text": "b", "url": 3}]});
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path(), Some("footer.links[1].url"));
    }
}
