//! Reply dispatcher: the state machine tying the session slices together.
//!
//! `ChatSession` is fully synchronous. Every mutation happens inside one
//! discrete event - a user command, an activity tick, or a reply delivery -
//! which makes the ordering guarantees trivial to uphold: an event runs to
//! completion before the next is processed. Timer scheduling lives in
//! [`crate::driver`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{SendError, SessionResult};
use crate::models::{Attachment, FileBlob, Message, Sender};
use crate::state::activity::{ActivityIndicator, ActivityTask};
use crate::state::attachments::AttachmentRegistry;
use crate::state::log::MessageLog;
use crate::state::preview::{PreviewPanel, PreviewSelection};

/// Assistant reply when the triggering user turn carried attachments.
pub const REPLY_TEXT_WITH_FILES: &str =
    "I've received your files. Let me analyze them and provide you with relevant medical insights.";

/// Assistant reply for a plain text user turn.
pub const REPLY_TEXT_GENERIC: &str =
    "I understand your concern. Based on what you've shared, I'd recommend...";

/// Default user text when only files are sent.
const SHARED_FILES_TEXT: &str = "Shared files";

/// Opaque token identifying one send → reply cycle.
///
/// Handed out by [`ChatSession::send`] and redeemed by
/// [`ChatSession::deliver_reply`]. A token from before the latest reset (or
/// from an already-completed cycle) is stale and redeeming it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyCycle {
    cycle: u64,
}

/// The reply currently being prepared.
#[derive(Debug, Clone)]
struct InFlightReply {
    cycle: u64,
    had_attachments: bool,
}

/// The conversational session state machine.
///
/// Owns the message log, the staged-attachment buffer, the activity
/// indicator, and the preview selection, and orchestrates the
/// `Idle → AwaitingReply → Idle` reply cycle across them. Single-writer:
/// presentation collaborators call command methods and read state back
/// through the accessors (or a [`crate::view_state::SessionSnapshot`]).
#[derive(Debug)]
pub struct ChatSession {
    log: MessageLog,
    registry: AttachmentRegistry,
    activity: ActivityIndicator,
    preview: PreviewPanel,
    rng: StdRng,
    in_flight: Option<InFlightReply>,
    next_cycle: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Session with a seeded task-completion order, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            log: MessageLog::new(),
            registry: AttachmentRegistry::new(),
            activity: ActivityIndicator::new(),
            preview: PreviewPanel::new(),
            rng,
            in_flight: None,
            next_cycle: 0,
        }
    }

    // ------------------------------------------------------------------
    // Composer commands
    // ------------------------------------------------------------------

    /// Stage files for the next send.
    pub fn stage_files(&mut self, files: impl IntoIterator<Item = FileBlob>) {
        self.registry.stage(files);
    }

    /// Remove the staged file at `index`; silent no-op when out of range.
    /// Never affects an in-flight reply cycle.
    pub fn unstage_file(&mut self, index: usize) {
        self.registry.unstage(index);
    }

    /// Drop everything staged. Never affects an in-flight reply cycle.
    pub fn clear_staged(&mut self) {
        self.registry.clear();
    }

    /// Submit the composer contents as a user turn.
    ///
    /// Drains the staged buffer into the new message, starts the activity
    /// indicator, and returns the token the scheduler redeems once the
    /// simulated latency elapses. `Ok` also signals the composer that its
    /// text input has been consumed and should be cleared.
    ///
    /// Rejected when `text` is blank with nothing staged, or when a cycle is
    /// already in flight (one outstanding reply at a time, never queued).
    pub fn send(&mut self, text: &str) -> SessionResult<ReplyCycle> {
        if self.in_flight.is_some() {
            return Err(SendError::ReplyInFlight);
        }
        if text.trim().is_empty() && self.registry.is_empty() {
            return Err(SendError::NothingToSend);
        }

        let attachments = self.registry.drain_for_send();
        let had_attachments = !attachments.is_empty();
        let text = if text.trim().is_empty() {
            SHARED_FILES_TEXT
        } else {
            text
        };

        let message_id = self.log.append(Sender::User, text, attachments)?;

        self.next_cycle += 1;
        let cycle = self.next_cycle;
        self.in_flight = Some(InFlightReply {
            cycle,
            had_attachments,
        });
        self.activity.begin();

        debug!(message_id, cycle, had_attachments, "user turn sent, awaiting reply");
        Ok(ReplyCycle { cycle })
    }

    // ------------------------------------------------------------------
    // Scheduler events
    // ------------------------------------------------------------------

    /// Periodic activity tick. Completes one pending indicator task while a
    /// reply is in flight; no-op otherwise. Returns the completed task index.
    pub fn handle_tick(&mut self) -> Option<usize> {
        if self.in_flight.is_none() {
            return None;
        }
        self.activity.tick(&mut self.rng)
    }

    /// Deliver the simulated assistant reply for `cycle`.
    ///
    /// Forces the activity indicator to all-done and appends the assistant
    /// turn, whose text depends on whether the triggering user turn carried
    /// attachments. A stale token (completed cycle, or any cycle from before
    /// the latest reset) is ignored; returns whether a reply was appended.
    pub fn deliver_reply(&mut self, cycle: ReplyCycle) -> bool {
        let Some(in_flight) = self.in_flight.as_ref() else {
            debug!(cycle = cycle.cycle, "stale reply delivery ignored");
            return false;
        };
        if in_flight.cycle != cycle.cycle {
            debug!(cycle = cycle.cycle, "stale reply delivery ignored");
            return false;
        }

        let had_attachments = in_flight.had_attachments;
        self.in_flight = None;
        self.activity.finish();

        let text = if had_attachments {
            REPLY_TEXT_WITH_FILES
        } else {
            REPLY_TEXT_GENERIC
        };
        match self.log.append(Sender::Assistant, text, Vec::new()) {
            Ok(message_id) => debug!(message_id, cycle = cycle.cycle, "assistant reply delivered"),
            Err(err) => warn!(%err, "assistant reply rejected by log"),
        }
        true
    }

    // ------------------------------------------------------------------
    // Conversation commands
    // ------------------------------------------------------------------

    /// Start a new conversation: abandon any in-flight cycle, clear the
    /// preview (its owning messages are being discarded), stop the activity
    /// indicator, and replace the log with a fresh greeting. The staged
    /// buffer is left as-is.
    pub fn reset(&mut self) {
        if self.in_flight.take().is_some() {
            debug!("reset abandoned an in-flight reply cycle");
        }
        self.activity.finish();
        self.preview.close();
        self.log.reset();
    }

    /// Open the preview panel for an attachment of a logged message.
    /// Returns false (no state change) when the attachment is not found.
    pub fn open_preview(&mut self, message_id: u64, attachment_id: Uuid) -> bool {
        let attachment = self
            .log
            .messages()
            .iter()
            .find(|m| m.id == message_id)
            .and_then(|m| m.attachments.iter().find(|a| a.id == attachment_id));

        match attachment {
            Some(attachment) => {
                self.preview.open(attachment);
                true
            }
            None => false,
        }
    }

    /// Close the preview panel; no-op when already closed.
    pub fn close_preview(&mut self) {
        self.preview.close();
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Whether a reply is currently being prepared.
    pub fn is_replying(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    pub fn latest_assistant_index(&self) -> Option<usize> {
        self.log.latest_assistant_index()
    }

    pub fn staged(&self) -> &[FileBlob] {
        self.registry.staged()
    }

    pub fn tasks(&self) -> &[ActivityTask] {
        self.activity.tasks()
    }

    pub fn preview_selection(&self) -> Option<&PreviewSelection> {
        self.preview.selection()
    }

    /// Attachments of the message with `message_id`, if it exists.
    pub fn attachments_of(&self, message_id: u64) -> Option<&[Attachment]> {
        self.log
            .messages()
            .iter()
            .find(|m| m.id == message_id)
            .map(|m| m.attachments.as_slice())
    }
}
