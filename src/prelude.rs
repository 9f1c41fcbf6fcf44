//! Prelude module for convenient imports.
//!
//! Re-exports the types most consumers need:
//!
//! ```ignore
//! use medichat_core::prelude::*;
//! ```

// Session core
pub use crate::state::{
    ActivityIndicator, ActivityTask, AttachmentRegistry, ChatSession, MessageLog, PreviewPanel,
    PreviewSelection, ReplyCycle, TaskStatus, REPLY_TEXT_GENERIC, REPLY_TEXT_WITH_FILES,
    TASK_LABELS, WELCOME_TEXT,
};

// Models
pub use crate::models::{
    file_icon_kind, format_file_size, is_image_file, Attachment, FileBlob, FileIconKind, Message,
    MessageKind, Sender,
};

// Async driver
pub use crate::driver::{spawn_session, SessionCommand, SessionConfig, SessionHandle};

// Snapshots
pub use crate::view_state::{PreviewView, SessionSnapshot, StagedFileView};

// Errors
pub use crate::error::{SendError, SessionResult};
