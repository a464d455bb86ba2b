//! Generation boundary: a prompt goes out, untrusted JSON comes back and is
//! validated before anything else sees it.

use serde_json::Value;

use crate::schema::Card;
use crate::validate::validate;
use crate::{Error, Result};

/// Source of raw card documents, usually a language model
pub trait Generator: Send + Sync {
    /// Return the raw (unvalidated) card document for `prompt`
    fn generate(&self, prompt: &str) -> Result<Value>;
}

/// Generator that always answers with the same document
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    document: Value,
}

impl StaticGenerator {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Parse the document from text, accepting the same wrappers a model reply may carry
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::new(parse_reply(text)?))
    }
}

impl Generator for StaticGenerator {
    fn generate(&self, _prompt: &str) -> Result<Value> {
        Ok(self.document.clone())
    }
}

/// Ask `generator` for a card and validate the answer.
///
/// A blank prompt is refused before the generator is called.
pub fn generate_card(generator: &dyn Generator, prompt: &str) -> Result<Card> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(Error::Generation("prompt is empty".to_string()));
    }
    let raw = generator.generate(prompt)?;
    let card = validate(&raw)?;
    log::info!(
        "generated {} card '{}' with {} items",
        card.card_type(),
        card.title,
        card.len()
    );
    Ok(card)
}

/// Cut the first markdown code fence out of a reply, if there is one.
///
/// Text that already starts with a JSON object or array is returned as is.
pub fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with(['{', '[']) {
        return trimmed;
    }
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    let mut body = &trimmed[open + 3..];
    // an info string ("json") only counts when whitespace follows it
    let info = body.find(|c: char| !c.is_alphanumeric()).unwrap_or(body.len());
    if info > 0 && body[info..].starts_with(char::is_whitespace) {
        body = &body[info..];
    }
    let end = body.find("```").unwrap_or(body.len());
    body[..end].trim()
}

/// Parse a model reply into JSON. Replies that are not JSON are a
/// generation failure, not a validation failure.
pub fn parse_reply(text: &str) -> Result<Value> {
    serde_json::from_str(strip_fence(text))
        .map_err(|e| Error::Generation(format!("reply is not JSON: {}", e)))
}

/// Pull `choices[0].message.content` out of a chat-completion response
pub fn completion_content(response: &Value) -> Result<&str> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Generation("response has no choices[0].message.content".to_string()))
}
