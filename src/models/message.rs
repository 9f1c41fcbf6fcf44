//! Conversation turn model.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Payload tag for a message.
///
/// Only `Text` and `File` are produced by the current flows; the remaining
/// variants tag structured payloads used by the richer assistant surfaces.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    #[default]
    Text,
    File,
    Image,
    SymptomCheck,
    Medication,
    Appointment,
    Emergency,
}

/// A single conversation turn.
///
/// Messages are immutable once appended to the log: every field is assigned
/// at creation and never touched again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Log-assigned id, strictly increasing across the session.
    pub id: u64,
    /// Display text. Never empty when `attachments` is empty.
    pub text: String,
    /// Author of the turn.
    pub sender: Sender,
    /// Formatted local clock time (e.g. "10:30 AM"), assigned at creation.
    pub timestamp: String,
    /// Payload tag; `File` whenever attachments are present.
    #[serde(default)]
    pub kind: MessageKind,
    /// Attachments owned by this message, in staging order.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Build a turn stamped with the current local time. The kind is derived
    /// from the payload: `File` when attachments are present, `Text` otherwise.
    pub fn new(id: u64, sender: Sender, text: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        let kind = if attachments.is_empty() {
            MessageKind::Text
        } else {
            MessageKind::File
        };
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: clock_timestamp(),
            kind,
            attachments,
        }
    }

    /// Whether this turn carries any attachments.
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// Current wall-clock time formatted for message bubbles.
fn clock_timestamp() -> String {
    Local::now().format("%I:%M %p").to_string()
}
