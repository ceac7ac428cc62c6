//! Local-only chat thread. Messages never leave the tab.

use chrono::{DateTime, Duration, Utc};

use crate::models::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: usize,
    pub text: String,
    pub sender: Role,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
}

impl ChatThread {
    /// Thread pre-filled with a short pickup conversation ending a little before `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let seed = [
            (
                Role::Ngo,
                "Hello! I'm interested in your food donation. When can we collect it?",
                60,
            ),
            (
                Role::Donor,
                "Hi! The food is available for pickup anytime today between 2 PM to 6 PM.",
                58,
            ),
            (
                Role::Ngo,
                "Great! We'll send someone at 3 PM. Could you share the exact address?",
                56,
            ),
        ];
        let messages = seed
            .into_iter()
            .enumerate()
            .map(|(i, (sender, text, minutes_ago))| ChatMessage {
                id: i + 1,
                text: text.to_string(),
                sender,
                sent_at: now - Duration::minutes(minutes_ago),
            })
            .collect();
        Self { messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a message. Blank text is ignored and returns `false`.
    pub fn send(&mut self, sender: Role, text: &str, now: DateTime<Utc>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: self.messages.len() + 1,
            text: text.to_string(),
            sender,
            sent_at: now,
        });
        true
    }
}
