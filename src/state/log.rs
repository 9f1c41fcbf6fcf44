//! Append-only conversation log.

use tracing::debug;

use crate::error::{SendError, SessionResult};
use crate::models::{Attachment, Message, Sender};

/// Greeting seeded as the first assistant turn of every conversation.
pub const WELCOME_TEXT: &str = "Hello! I'm your AI Medical Assistant. I can help you with symptom checking, medication reminders, appointment scheduling, and answer any health-related questions. How can I assist you today?";

/// Ordered, append-only sequence of conversation turns.
///
/// The log only ever grows, except for [`MessageLog::reset`], which discards
/// the whole history and reseeds the greeting. Message ids keep increasing
/// across resets so no two turns of a session ever share an id.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLog {
    /// A log seeded with the assistant welcome message.
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.push(Sender::Assistant, WELCOME_TEXT, Vec::new());
        log
    }

    /// Append a turn. Rejected with [`SendError::NothingToSend`] when `text`
    /// is blank and there are no attachments; otherwise returns the new
    /// message's id. The kind is `File` when attachments are present.
    pub fn append(
        &mut self,
        sender: Sender,
        text: &str,
        attachments: Vec<Attachment>,
    ) -> SessionResult<u64> {
        if text.trim().is_empty() && attachments.is_empty() {
            return Err(SendError::NothingToSend);
        }
        Ok(self.push(sender, text, attachments))
    }

    fn push(&mut self, sender: Sender, text: &str, attachments: Vec<Attachment>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, sender, text, attachments));
        debug!(id, ?sender, "message appended");
        id
    }

    /// Discard the entire history and reseed the welcome message with a
    /// fresh timestamp. Destructive by design; nothing is archived.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.push(Sender::Assistant, WELCOME_TEXT, Vec::new());
        debug!("conversation log reset");
    }

    /// Index of the most recent assistant turn. `None` only for a log with
    /// no assistant message, which cannot occur after construction.
    pub fn latest_assistant_index(&self) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| m.sender == Sender::Assistant)
    }

    /// All turns, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileBlob, MessageKind};

    fn attachment(name: &str) -> Attachment {
        Attachment::from_blob(FileBlob::new(name, "image/png", &b"bytes"[..]))
    }

    #[test]
    fn test_new_log_is_seeded_with_welcome() {
        let log = MessageLog::new();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Assistant);
        assert_eq!(log.messages()[0].text, WELCOME_TEXT);
        assert_eq!(log.messages()[0].kind, MessageKind::Text);
    }

    #[test]
    fn test_append_rejects_blank_text_without_attachments() {
        let mut log = MessageLog::new();
        assert_eq!(
            log.append(Sender::User, "   ", Vec::new()),
            Err(SendError::NothingToSend)
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_append_with_attachments_is_file_kind() {
        let mut log = MessageLog::new();
        let id = log
            .append(Sender::User, "Shared files", vec![attachment("scan.png")])
            .unwrap();
        let msg = log.messages().last().unwrap();
        assert_eq!(msg.id, id);
        assert_eq!(msg.kind, MessageKind::File);
        assert_eq!(msg.attachments.len(), 1);
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut log = MessageLog::new();
        let a = log.append(Sender::User, "one", Vec::new()).unwrap();
        let b = log.append(Sender::Assistant, "two", Vec::new()).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_reset_yields_single_fresh_welcome() {
        let mut log = MessageLog::new();
        log.append(Sender::User, "hello", Vec::new()).unwrap();
        log.append(Sender::Assistant, "hi", Vec::new()).unwrap();

        let old_welcome_id = log.messages()[0].id;
        log.reset();

        assert_eq!(log.len(), 1);
        let welcome = &log.messages()[0];
        assert_eq!(welcome.sender, Sender::Assistant);
        assert_eq!(welcome.text, WELCOME_TEXT);
        // Ids keep increasing across resets.
        assert!(welcome.id > old_welcome_id);
    }

    #[test]
    fn test_latest_assistant_index() {
        let mut log = MessageLog::new();
        assert_eq!(log.latest_assistant_index(), Some(0));

        log.append(Sender::User, "question", Vec::new()).unwrap();
        assert_eq!(log.latest_assistant_index(), Some(0));

        log.append(Sender::Assistant, "answer", Vec::new()).unwrap();
        assert_eq!(log.latest_assistant_index(), Some(2));
    }
}
