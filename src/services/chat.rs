use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::settings::{ChatConfig, API_KEY_ENV};
use crate::services::http_client;

pub const NO_REPLY: &str = "Sorry, I couldn't answer right now. Please try again later.";
pub const CONNECTION_TROUBLE: &str =
    "Oops! Something went wrong. Check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Anything that can turn a conversation into the next assistant message.
pub trait ChatBackend {
    /// `Ok(None)` when the service answered without any choices.
    fn complete(&self, messages: &[Message]) -> Result<Option<Message>>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

pub struct ChatClient {
    http: Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key: String,
}

impl ChatClient {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            anyhow!(
                "No API key for the chat companion. Set {} or chat.api_key in config.toml",
                API_KEY_ENV
            )
        })?;
        Ok(Self {
            http: http_client()?,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_key,
        })
    }
}

impl ChatBackend for ChatClient {
    fn complete(&self, messages: &[Message]) -> Result<Option<Message>> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
        };
        log::debug!("sending {} messages to {}", messages.len(), self.model);
        let body = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .context("Sending chat request")?
            .text()
            .context("Reading chat response")?;

        parse_completion(&body)
    }
}

/// First choice of a completion body, if there is one.
pub fn parse_completion(body: &str) -> Result<Option<Message>> {
    let resp: CompletionResponse =
        serde_json::from_str(body).context("Parsing chat response")?;
    Ok(resp.choices.into_iter().next().map(|c| c.message))
}

pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Opens with the companion's greeting.
    pub fn new(companion_name: &str) -> Self {
        let greeting = format!(
            "Hi, I'm {} 🌸\nI'm here to listen. If you want to vent, tell me about your day \
             or just chat, I'm here for you. Make yourself at home 💜",
            companion_name
        );
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append the user's text and the reply. Blank input is ignored.
    ///
    /// Failures never break the conversation: they show up as an
    /// assistant message instead.
    pub fn send(&mut self, backend: &impl ChatBackend, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(text));

        let reply = match backend.complete(&self.messages) {
            Ok(Some(message)) => message,
            Ok(None) => {
                log::warn!("chat response had no choices");
                Message::assistant(NO_REPLY)
            }
            Err(e) => {
                log::warn!("chat request failed: {:#}", e);
                Message::assistant(CONNECTION_TROUBLE)
            }
        };
        self.messages.push(reply);
        self.messages.last()
    }
}
