//! Scripted live-chat agent.
//!
//! The session is a small state machine: a user message moves it to
//! `AgentTyping` and hands back a [`PendingReply`] (ticket + delay). The view
//! sleeps for the delay inside its own scope and then calls
//! [`ChatSession::deliver`] with the ticket. Unknown tickets are ignored, so
//! a reply can never land in a session that no longer expects it.

use std::collections::BTreeSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const REPLY_DELAY_MIN_MS: u64 = 1_500;
pub const REPLY_DELAY_MAX_MS: u64 = 2_500;

pub const FALLBACK_REPLY: &str = "Thank you for your message. Let me help you with that.";

/// Keyword groups in priority order; the first group with a hit wins.
const SCRIPT: [(&[&str], &str); 4] = [
    (
        &["property", "listing"],
        "I'd be happy to help you with property-related questions. Are you looking to rent, buy, or list a property?",
    ),
    (
        &["problem", "issue"],
        "I understand you're experiencing an issue. Can you provide more details about what's happening so I can assist you better?",
    ),
    (
        &["payment", "billing"],
        "For billing and payment inquiries, I can help you right away. What specific payment question do you have?",
    ),
    (
        &["hello", "hi"],
        "Hello! Welcome to Findmyhome. I'm here to help with any questions you might have about our platform.",
    ),
];

pub const QUICK_REPLIES: [&str; 4] = [
    "I need help with my listing",
    "Payment question",
    "Technical issue",
    "Account problem",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub timestamp: String,
    pub sender: Sender,
    pub sender_name: String,
    pub kind: MessageKind,
}

impl ChatMessage {
    fn new(text: &str, timestamp: &str, sender: Sender, sender_name: &str, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            timestamp: timestamp.to_string(),
            sender,
            sender_name: sender_name.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub avatar: &'static str,
    pub online: bool,
}

pub const SUPPORT_AGENT: AgentProfile = AgentProfile {
    name: "Sarah Wilson",
    title: "Customer Support Specialist",
    avatar: "https://images.unsplash.com/photo-1494790108755-2616b95b2b7e?w=100",
    online: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AgentTyping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: u64,
    pub delay_ms: u64,
}

/// Pick the scripted reply for a user message.
pub fn scripted_reply(input: &str) -> &'static str {
    let lowered = input.to_lowercase();
    SCRIPT
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: BTreeSet<u64>,
    replies: Vec<(u64, &'static str)>,
    next_ticket: u64,
    rng: StdRng,
}

impl ChatSession {
    /// New session seeded for reply delays, opened with the welcome transcript.
    pub fn new(seed: u64, timestamp: &str) -> Self {
        let messages = vec![
            ChatMessage::new(
                "Welcome to Findmyhome Support!",
                timestamp,
                Sender::Agent,
                "System",
                MessageKind::System,
            ),
            ChatMessage::new(
                "Hi! I'm Sarah, your customer support specialist. How can I help you today?",
                timestamp,
                Sender::Agent,
                SUPPORT_AGENT.name,
                MessageKind::Text,
            ),
        ];
        Self {
            messages,
            pending: BTreeSet::new(),
            replies: Vec::new(),
            next_ticket: 1,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> ChatState {
        if self.pending.is_empty() {
            ChatState::Idle
        } else {
            ChatState::AgentTyping
        }
    }

    /// Append a user message and schedule the agent's reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str, timestamp: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(
            text,
            timestamp,
            Sender::User,
            "You",
            MessageKind::Text,
        ));

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending.insert(ticket);
        self.replies.push((ticket, scripted_reply(text)));

        let delay_ms = self.rng.gen_range(REPLY_DELAY_MIN_MS..REPLY_DELAY_MAX_MS);
        tracing::debug!(ticket, delay_ms, "agent reply scheduled");
        Some(PendingReply { ticket, delay_ms })
    }

    /// Append the reply for `ticket`. Returns `false` for unknown tickets.
    pub fn deliver(&mut self, ticket: u64, timestamp: &str) -> bool {
        if !self.pending.remove(&ticket) {
            tracing::debug!(ticket, "stale agent reply dropped");
            return false;
        }
        let Some(index) = self.replies.iter().position(|(t, _)| *t == ticket) else {
            return false;
        };
        let (_, reply) = self.replies.remove(index);
        self.messages.push(ChatMessage::new(
            reply,
            timestamp,
            Sender::Agent,
            SUPPORT_AGENT.name,
            MessageKind::Text,
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_groups_pick_scripted_replies() {
        assert!(scripted_reply("I have a PAYMENT question").starts_with("For billing"));
        assert!(scripted_reply("hello there").starts_with("Hello! Welcome"));
        assert!(scripted_reply("My listing is missing").starts_with("I'd be happy"));
        assert!(scripted_reply("there's an issue with the app").starts_with("I understand"));
        assert_eq!(scripted_reply("Can you call me tomorrow?"), FALLBACK_REPLY);
    }

    #[test]
    fn first_matching_group_wins() {
        // "property" outranks "payment".
        assert!(scripted_reply("payment for my property").starts_with("I'd be happy"));
    }

    #[test]
    fn session_opens_with_welcome_transcript() {
        let session = ChatSession::new(7, "09:00");
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].kind, MessageKind::System);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[test]
    fn submit_then_deliver_cycles_through_typing() {
        let mut session = ChatSession::new(7, "09:00");
        let pending = session.submit("billing help", "09:01").unwrap();
        assert_eq!(session.state(), ChatState::AgentTyping);
        assert!((REPLY_DELAY_MIN_MS..REPLY_DELAY_MAX_MS).contains(&pending.delay_ms));

        assert!(session.deliver(pending.ticket, "09:02"));
        assert_eq!(session.state(), ChatState::Idle);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Agent);
        assert!(last.text.starts_with("For billing"));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new(1, "09:00");
        assert!(session.submit("   ", "09:01").is_none());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut session = ChatSession::new(1, "09:00");
        let pending = session.submit("hi", "09:01").unwrap();
        assert!(session.deliver(pending.ticket, "09:02"));
        assert!(!session.deliver(pending.ticket, "09:03"));
        assert!(!session.deliver(999, "09:03"));
        assert_eq!(session.messages().len(), 4);
    }

    #[test]
    fn delays_are_deterministic_for_a_seed() {
        let mut a = ChatSession::new(42, "09:00");
        let mut b = ChatSession::new(42, "09:00");
        for text in ["one", "two", "three"] {
            assert_eq!(
                a.submit(text, "09:01").map(|p| p.delay_ms),
                b.submit(text, "09:01").map(|p| p.delay_ms)
            );
        }
    }

    #[test]
    fn overlapping_messages_each_get_a_reply() {
        let mut session = ChatSession::new(3, "09:00");
        let first = session.submit("hello", "09:01").unwrap();
        let second = session.submit("payment", "09:01").unwrap();
        assert!(session.deliver(second.ticket, "09:02"));
        assert_eq!(session.state(), ChatState::AgentTyping);
        assert!(session.deliver(first.ticket, "09:03"));
        assert_eq!(session.state(), ChatState::Idle);
        assert_eq!(session.messages().len(), 6);
    }
}
