//! Description Generator
//!
//! Builds a prompt from the draft, asks the text-generation service for a
//! short blurb and cleans up the reply.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::models::PlaceCardDraft;
use crate::task::TaskSlot;

/// Anything that can turn a prompt into text
pub trait TextGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Messages API client
pub struct MessagesClient {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl MessagesClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl TextGenerator for MessagesClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self
            .http
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(key) = &self.config.api_key {
            request = request
                .header("x-api-key", key)
                .header("anthropic-version", &self.config.api_version)
                .header("anthropic-dangerous-direct-browser-access", "true");
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_completion(&text)
    }
}

/// First text block of a messages response
pub fn parse_completion(body: &str) -> Result<String, GenerateError> {
    let response: MessagesResponse = serde_json::from_str(body)?;
    response
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .ok_or(GenerateError::EmptyContent)
}

pub fn build_prompt(draft: &PlaceCardDraft) -> Result<String, GenerateError> {
    let name = draft.name.as_deref().ok_or(GenerateError::MissingName)?;

    let mut prompt = String::from(
        "Write a SHORT, warm, and inviting 1-2 sentence English description for a Korean travel YouTube video info card about this place:\n",
    );
    match &draft.localized_name {
        Some(local) => prompt.push_str(&format!("Place name: {} ({})\n", name, local)),
        None => prompt.push_str(&format!("Place name: {}\n", name)),
    }
    prompt.push_str(&format!("Category: {}\n", draft.category.key()));
    if let Some(tip) = &draft.tip {
        prompt.push_str(&format!("Notes: {}\n", tip));
    }
    prompt.push_str("Write as if you personally visited. Keep it under 30 words. No hashtags.");
    Ok(prompt)
}

/// Trim and drop one wrapping quote on each side
pub fn clean_description(raw: &str) -> Option<String> {
    let is_quote = |c: char| c == '"' || c == '\'';
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(is_quote) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(is_quote) {
        text = rest;
    }
    (!text.is_empty()).then(|| text.to_string())
}

/// Generate button state
pub fn can_generate(draft: &PlaceCardDraft, slot: &TaskSlot) -> bool {
    draft.has_name() && !slot.is_running()
}

pub async fn generate_description<G: TextGenerator>(
    generator: &G,
    draft: &PlaceCardDraft,
) -> Result<String, GenerateError> {
    let prompt = build_prompt(draft)?;
    let raw = generator.complete(&prompt).await?;
    clean_description(&raw).ok_or(GenerateError::EmptyContent)
}
