//! Chat transcript and send flow.
//!
//! The transcript is append-only and lives only as long as the chat screen;
//! it is never persisted. Sending routes through the gateway chat operation,
//! whose failure is the one upstream error a user actually sees.

use serde_json::json;

use crate::error::Result;
use crate::gateway::Gateway;
use crate::types::{ChatMessage, Role, Topic, clock_label};

pub const WELCOME_MESSAGE: &str =
    "Namaste! I am your Ayurvedic guide. How may I assist you today on your wellness journey?";

/// Ordered, append-only message sequence with monotonically increasing ids.
#[derive(Default)]
pub struct Transcript {
    next_id: u64,
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Self::default();
        transcript.push(Role::Assistant, WELCOME_MESSAGE, Some(Topic::General));
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: &str) -> &ChatMessage {
        let topic = Topic::classify(content);
        self.push(Role::User, content, Some(topic))
    }

    pub fn push_assistant(&mut self, content: &str) -> &ChatMessage {
        let topic = Topic::classify(content);
        self.push(Role::Assistant, content, Some(topic))
    }

    fn push(&mut self, role: Role, content: &str, topic: Option<Topic>) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content: content.to_string(),
            timestamp: clock_label(),
            topic,
        });
        self.messages.last().expect("just pushed")
    }
}

/// Append the user's message and ask the gateway for a reply.
///
/// On success the reply is appended and returned. On failure the transcript
/// keeps the user's message and the error propagates so the caller can show
/// a distinct notification; nothing is silently degraded here.
pub async fn send(
    gateway: &Gateway,
    transcript: &mut Transcript,
    input: &str,
) -> Result<ChatMessage> {
    transcript.push_user(input);

    let body = json!({ "messages": transcript.messages() });
    let reply = gateway.chat(&body).await?;
    Ok(transcript.push_assistant(&reply).clone())
}
