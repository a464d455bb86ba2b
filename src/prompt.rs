//! Instruction text sent to the model alongside the user's prompt.
//!
//! Length limits here are advice to the model only; the validator does not
//! enforce them.

use crate::schema::CardType;

pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_DESCRIPTION_CHARS: usize = 160;
pub const MIN_ITEMS: usize = 3;
pub const MAX_ITEMS: usize = 6;

/// One-line description of the item fields for each card type
fn item_shape(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Basic => "no extra fields",
        CardType::List => r#""bulletPoints": string[] (required), "bulletStyle"?: "disc"|"circle"|"square"|"check"|"arrow"|"number""#,
        CardType::Steps => r#""actionStep": string (required), "stepNumber"?: integer, "isCompleted"?: boolean"#,
        CardType::Stats => r#""value": number|string (required), "percentage"?: number, "trend"?: "up"|"down"|"neutral", "prefix"?: string, "suffix"?: string"#,
        CardType::Media => r#""visualElement": {"type": "image"|"video"|"illustration"|"chart", "url": string, "alt"?: string} (required), "caption"?: string"#,
        CardType::Location => r#""location": string (required), "address"?: string, "mapUrl"?: string"#,
        CardType::KeyValue => r#""keyValue": object of string to string (required), "orientation"?: "horizontal"|"vertical""#,
        CardType::Template => r#""templateText": string with {name} placeholders (required), "variables"?: object of string to string"#,
    }
}

/// Build the system prompt. With `preferred` set, the model is told to use
/// that card type; otherwise it picks the best fit.
pub fn build_system_prompt(preferred: Option<CardType>) -> String {
    let mut out = String::new();
    out.push_str("You turn the user's request into an information card. ");
    out.push_str("Reply with a single JSON object and nothing else.\n\n");
    out.push_str("Root fields: \"type\", \"title\" (string), optional \"subtitle\", \"description\", ");
    out.push_str("\"footer\" {\"text\", \"showAttribution\", \"links\": [{\"text\", \"url\"}]}, \"items\" (array).\n");
    out.push_str("Every item has \"id\" (number), \"type\", \"title\", \"description\" and may have ");
    out.push_str("\"icon\" {\"type\": \"emoji\"|\"symbol\"|\"image\", \"value\"}, \"highlight\", \"tags\".\n\n");

    match preferred {
        Some(card_type) => {
            out.push_str(&format!(
                "Use \"type\": \"{}\". Each item uses \"type\": \"{}\" and {}.\n",
                card_type,
                card_type.item_kind(),
                item_shape(card_type)
            ));
        }
        None => {
            out.push_str("Pick the card type that fits best. Card type -> item type and fields:\n");
            for card_type in CardType::ALL {
                out.push_str(&format!(
                    "- {} -> {}: {}\n",
                    card_type,
                    card_type.item_kind(),
                    item_shape(card_type)
                ));
            }
        }
    }

    out.push_str(&format!(
        "\nKeep the title under {} characters and each description under {} characters. ",
        MAX_TITLE_CHARS, MAX_DESCRIPTION_CHARS
    ));
    out.push_str(&format!("Produce between {} and {} items.", MIN_ITEMS, MAX_ITEMS));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_type_is_named() {
        let prompt = build_system_prompt(Some(CardType::Steps));
        assert!(prompt.contains("\"type\": \"steps\""));
        assert!(prompt.contains("\"type\": \"step\""));
        assert!(prompt.contains("actionStep"));
        assert!(!prompt.contains("bulletPoints"));
    }

    #[test]
    fn open_prompt_lists_every_type() {
        let prompt = build_system_prompt(None);
        for card_type in CardType::ALL {
            assert!(prompt.contains(&format!("- {} ->", card_type)), "{}", card_type);
        }
        assert!(prompt.contains(&MAX_TITLE_CHARS.to_string()));
    }
}
