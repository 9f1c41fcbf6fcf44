//! Pending-compose attachment buffer.

use tracing::debug;

use crate::models::{Attachment, FileBlob};

/// Files staged for the next send, in selection order.
///
/// The registry owns a staged file's content handle until `drain_for_send`
/// transfers it to a message; unstaging or clearing drops the handle, which
/// releases the buffer once nothing else references it.
#[derive(Debug, Clone, Default)]
pub struct AttachmentRegistry {
    pending: Vec<FileBlob>,
}

impl AttachmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append files to the pending buffer, preserving order. Staging the same
    /// file twice yields two independent entries; there is no deduplication.
    pub fn stage(&mut self, files: impl IntoIterator<Item = FileBlob>) {
        let before = self.pending.len();
        self.pending.extend(files);
        debug!(staged = self.pending.len() - before, total = self.pending.len(), "files staged");
    }

    /// Remove the entry at `index`. Out-of-range indices are a silent no-op.
    pub fn unstage(&mut self, index: usize) {
        if index < self.pending.len() {
            let removed = self.pending.remove(index);
            debug!(name = %removed.name, "file unstaged");
        }
    }

    /// Empty the pending buffer, releasing all staged content handles.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Finalize the buffer into attachment records with freshly minted ids
    /// and empty it. This is the only path by which staged files become
    /// owned by a message.
    pub fn drain_for_send(&mut self) -> Vec<Attachment> {
        self.pending.drain(..).map(Attachment::from_blob).collect()
    }

    /// Staged files, in selection order.
    pub fn staged(&self) -> &[FileBlob] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
