use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Coarse topic tag attached to transcript messages for display grouping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Dosha,
    Herbs,
    Lifestyle,
    General,
}

impl Topic {
    /// Keyword classification of a user prompt.
    pub fn classify(input: &str) -> Topic {
        let lower = input.to_lowercase();
        if ["vata", "pitta", "kapha"].iter().any(|k| lower.contains(k)) {
            Topic::Dosha
        } else if ["herb", "ashwagandha", "turmeric"]
            .iter()
            .any(|k| lower.contains(k))
        {
            Topic::Herbs
        } else if ["routine", "yoga", "sleep"].iter().any(|k| lower.contains(k)) {
            Topic::Lifestyle
        } else {
            Topic::General
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
}

/// Wall-clock HH:MM label for a transcript entry. Local time when the offset
/// is known, UTC otherwise.
pub fn clock_label() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let format = format_description!("[hour]:[minute]");
    now.format(&format).unwrap_or_else(|_| "00:00".to_string())
}
