//! Enlarged-image panel selection.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::models::Attachment;

/// Display data for the attachment currently shown in the side panel.
///
/// Holds its own content handle rather than a reference into the log, so the
/// panel state is independent of log position; the session clears it whenever
/// the owning messages are discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewSelection {
    pub name: String,
    pub size_bytes: u64,
    #[serde(skip)]
    pub content: Bytes,
}

/// At most one active preview selection.
#[derive(Debug, Clone, Default)]
pub struct PreviewPanel {
    selection: Option<PreviewSelection>,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `attachment` in the panel, replacing any current selection.
    pub fn open(&mut self, attachment: &Attachment) {
        self.selection = Some(PreviewSelection {
            name: attachment.name.clone(),
            size_bytes: attachment.size_bytes,
            content: attachment.content.clone(),
        });
    }

    /// Clear the selection entirely. No-op when already closed.
    pub fn close(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&PreviewSelection> {
        self.selection.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }
}
