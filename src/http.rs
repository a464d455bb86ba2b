//! Blocking client for an OpenAI-compatible chat-completion endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{json, Value};

use crate::generate::{completion_content, parse_reply, Generator};
use crate::prompt::build_system_prompt;
use crate::schema::CardType;
use crate::{Error, GeneratorConfig, Result};

pub struct HttpGenerator {
    client: Client,
    config: GeneratorConfig,
    preferred: Option<CardType>,
}

impl HttpGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            preferred: None,
        })
    }

    /// Ask the model for a specific card type
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.preferred = Some(card_type);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": [
                {"role": "system", "content": build_system_prompt(self.preferred)},
                {"role": "user", "content": prompt},
            ],
        })
    }
}

impl Generator for HttpGenerator {
    fn generate(&self, prompt: &str) -> Result<Value> {
        let mut req = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(prompt));
        if !self.config.api_key.is_empty() {
            req = req.bearer_auth(&self.config.api_key);
        }
        for (name, value) in &self.config.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        log::debug!("POST {} (model {})", self.config.endpoint, self.config.model);
        let res = req
            .send()
            .map_err(|e| Error::Network(format!("HTTP POST failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            log::warn!("generation endpoint returned {}: {}", status, body);
            return Err(Error::Network(format!("endpoint returned {}", status)));
        }

        let response: Value = res
            .json()
            .map_err(|e| Error::Generation(format!("Failed to read response body: {}", e)))?;
        parse_reply(completion_content(&response)?)
    }
}
