//! Read-only projections handed to presentation collaborators.
//!
//! A snapshot is a plain-data copy of everything the rendering layer needs:
//! it can be cloned across a channel, serialized for debugging, and never
//! hands out mutable access to the session.

use bytes::Bytes;
use serde::Serialize;

use crate::models::{format_file_size, is_image_file, Message};
use crate::state::activity::ActivityTask;
use crate::state::session::ChatSession;

/// One staged file as the composer's preview area shows it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StagedFileView {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Pre-formatted size ("1.5 KB") per the shared display contract.
    pub display_size: String,
    /// Whether the file renders as an inline image thumbnail.
    pub is_image: bool,
}

/// The attachment currently enlarged in the side panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewView {
    pub name: String,
    pub size_bytes: u64,
    pub display_size: String,
    /// Content handle for rendering the enlarged image.
    #[serde(skip)]
    pub content: Bytes,
}

/// Complete view of the session at one point in time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSnapshot {
    /// Conversation turns, oldest first.
    pub messages: Vec<Message>,
    /// Files staged for the next send, in selection order.
    pub staged: Vec<StagedFileView>,
    /// Activity indicator tasks with their statuses.
    pub tasks: Vec<ActivityTask>,
    /// Current preview selection, if any.
    pub preview: Option<PreviewView>,
    /// Whether a reply is currently being prepared.
    pub is_replying: bool,
}

impl SessionSnapshot {
    /// Project the current session state into a snapshot.
    pub fn capture(session: &ChatSession) -> Self {
        Self {
            messages: session.messages().to_vec(),
            staged: session
                .staged()
                .iter()
                .map(|file| StagedFileView {
                    name: file.name.clone(),
                    mime_type: file.mime_type.clone(),
                    size_bytes: file.size_bytes(),
                    display_size: format_file_size(file.size_bytes()),
                    is_image: is_image_file(&file.name),
                })
                .collect(),
            tasks: session.tasks().to_vec(),
            preview: session.preview_selection().map(|selection| PreviewView {
                name: selection.name.clone(),
                size_bytes: selection.size_bytes,
                display_size: format_file_size(selection.size_bytes),
                content: selection.content.clone(),
            }),
            is_replying: session.is_replying(),
        }
    }
}
