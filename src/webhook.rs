use anyhow::{Result, anyhow};
use log::{info, warn};
use rand::Rng;
use serde::Serialize;

use crate::message::{MessageContent, StructuredContent};

#[derive(Serialize)]
struct WebhookRequest<'a> {
    #[serde(rename = "chatInput")]
    chat_input: &'a str,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

/// Client for the chat webhook backend.
///
/// Each outgoing message carries the text and a session id so the backend
/// can keep conversation context; clearing the chat rotates the session id
/// and the backend starts fresh.
pub struct WebhookClient {
    webhook_url: String,
    username: String,
    password: String,
    session_id: String,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(webhook_url: String, username: String, password: String) -> Result<Self> {
        if webhook_url.is_empty() {
            return Err(anyhow!(
                "Webhook URL not configured. Run `chatty settings` first."
            ));
        }

        Ok(WebhookClient {
            webhook_url,
            username,
            password,
            session_id: new_session_id(),
            client: reqwest::Client::new(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn reset_session(&mut self) {
        self.session_id = new_session_id();
        info!("Started new chat session {}", self.session_id);
    }

    pub async fn send_message(&self, message: &str) -> Result<MessageContent> {
        let request = WebhookRequest {
            chat_input: message,
            session_id: &self.session_id,
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach webhook: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Error from webhook ({status}): {body}"));
        }

        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read webhook response: {e}"))?;
        Ok(parse_response_body(&body))
    }
}

/// Unwraps the webhook's response formats: a JSON body with an `output` key
/// becomes structured text, other JSON passes through as-is, and a non-JSON
/// body is taken as plain text.
fn parse_response_body(body: &str) -> MessageContent {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            if let Some(output) = value.get("output").and_then(|v| v.as_str()) {
                return MessageContent::Structured(StructuredContent {
                    text: Some(output.to_string()),
                    extra: Default::default(),
                });
            }
            serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Webhook response did not match a known shape: {e}");
                MessageContent::Text(body.to_string())
            })
        }
        Err(_) => MessageContent::Text(body.to_string()),
    }
}

/// 16 random bytes, hex-encoded.
fn new_session_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes[..]);
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
