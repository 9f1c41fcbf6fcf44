//! Data models for the chat session core.

mod attachment;
mod format;
mod message;

pub use attachment::{file_icon_kind, is_image_file, Attachment, FileBlob, FileIconKind};
pub use format::format_file_size;
pub use message::{Message, MessageKind, Sender};
