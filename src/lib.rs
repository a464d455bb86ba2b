//! Cardposter
//!
//! Typed model, validation and poster layout planning for AI-generated
//! information cards.
//!
//! # Features
//!
//! - **Schema**: eight card types, each with its own item shape, plus theme and layout hints
//! - **Validation**: untrusted JSON in, a typed [`Card`] or a path-addressed [`ValidationError`] out
//! - **Rendering**: `(card type, poster format)` dispatch into a backend-neutral [`ViewDescription`]
//! - **Carousel**: wrap-around navigation over a card's items
//! - **Generation** (`http` feature, default): blocking client for a chat-completion endpoint
//!
//! # Example
//!
//! ```
//! use cardposter::{render, validate_str, Carousel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let card = validate_str(r#"{
//!     "type": "steps",
//!     "title": "Make tea",
//!     "items": [
//!         {"id": 1, "type": "step", "title": "Boil", "description": "", "actionStep": "Heat water"},
//!         {"id": 2, "type": "step", "title": "Steep", "description": "", "actionStep": "Wait 3 min"}
//!     ]
//! }"#)?;
//!
//! let mut carousel = Carousel::new(card.len())?;
//! carousel.next();
//! let view = render(&card, carousel.current(), "simple-2")?;
//! assert_eq!(view.position.label, "2 / 2");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

pub mod error;
pub use error::{Error, Result, ValidationError};

pub mod schema;
pub use schema::{Card, CardBody, CardType};

pub mod validate;
pub use validate::{validate, validate_str};

pub mod registry;

pub mod render;
pub use render::{render, render_all, FormatId, ViewDescription};

pub mod carousel;
pub use carousel::Carousel;

pub mod viewer;
pub use viewer::Viewer;

pub mod storage;

pub mod prompt;

pub mod preview;

// Model boundary; the HTTP client lives behind the `http` feature
pub mod generate;
pub use generate::{generate_card, Generator, StaticGenerator};

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub use http::HttpGenerator;

/// Poster format used when none is selected
pub const DEFAULT_FORMAT: &str = "simple-1";

/// Configuration for the generation client
///
/// Defaults target a local OpenAI-compatible endpoint. `api_key` is left
/// empty and usually filled from `CARDPOSTER_API_KEY` by the CLI.
///
/// # Examples
///
/// ```
/// let cfg = cardposter::GeneratorConfig::default();
/// assert_eq!(cfg.timeout_ms, 60000);
/// assert!(cfg.user_agent.starts_with("cardposter/"));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Chat-completion endpoint URL
    pub endpoint: String,
    /// Model name sent with every request
    pub model: String,
    /// Bearer token; empty means no Authorization header
    pub api_key: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Custom HTTP headers
    pub headers: HashMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: String::new(),
            timeout_ms: 60000,
            user_agent: concat!("cardposter/", env!("CARGO_PKG_VERSION")).to_string(),
            temperature: 0.7,
            headers: HashMap::new(),
        }
    }
}
