//! Session state containers.
//!
//! Each submodule owns one slice of the conversational state:
//! - `attachments`: the pending-compose buffer of staged files
//! - `log`: the append-only message log
//! - `activity`: the simulated "assistant is working" indicator
//! - `preview`: the enlarged-image panel selection
//! - `session`: the reply dispatcher tying the slices together

pub mod activity;
pub mod attachments;
pub mod log;
pub mod preview;
pub mod session;

pub use activity::{pick_next_completion, ActivityIndicator, ActivityTask, TaskStatus, TASK_LABELS};
pub use attachments::AttachmentRegistry;
pub use log::{MessageLog, WELCOME_TEXT};
pub use preview::{PreviewPanel, PreviewSelection};
pub use session::{ChatSession, ReplyCycle, REPLY_TEXT_GENERIC, REPLY_TEXT_WITH_FILES};
