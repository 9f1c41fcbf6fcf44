//! Attachment models and file classification helpers.
//!
//! A [`FileBlob`] is what the presentation layer hands over when the user
//! picks files; an [`Attachment`] is the finalized record owned by a sent
//! message. Content travels as [`bytes::Bytes`], so the buffer is shared by
//! reference and released when the last holder (staging buffer, message, or
//! preview selection) lets go of it.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Extensions treated as inline-previewable images.
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// A raw file selected by the user but not yet sent.
#[derive(Debug, Clone, PartialEq)]
pub struct FileBlob {
    /// File name as picked, extension included.
    pub name: String,
    /// MIME type reported by the source, taken verbatim.
    pub mime_type: String,
    /// Shared handle to the file's bytes.
    pub content: Bytes,
}

impl FileBlob {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    /// Size of the underlying buffer in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// File metadata plus a content handle, owned by exactly one message once sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    /// Unique id, minted when the staged file is finalized for sending.
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Content handle for preview/download. Runtime-only, never serialized;
    /// stays dereferenceable for the lifetime of the owning message.
    #[serde(skip)]
    pub content: Bytes,
}

impl Attachment {
    /// Finalize a staged file into an attachment record with a fresh id.
    pub fn from_blob(blob: FileBlob) -> Self {
        Self {
            id: Uuid::new_v4(),
            size_bytes: blob.content.len() as u64,
            name: blob.name,
            mime_type: blob.mime_type,
            content: blob.content,
        }
    }
}

/// Icon family for a file, derived from its name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIconKind {
    /// PDF documents.
    Document,
    /// Previewable images.
    Image,
    /// Everything else.
    Generic,
}

/// Whether a file name carries an image extension.
///
/// Classification is a pure function of the name; it is computed on demand
/// rather than stored on the attachment.
pub fn is_image_file(name: &str) -> bool {
    match extension(name) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Pick the icon family for a file name.
pub fn file_icon_kind(name: &str) -> FileIconKind {
    match extension(name).as_deref() {
        Some("pdf") => FileIconKind::Document,
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => FileIconKind::Image,
        _ => FileIconKind::Generic,
    }
}

/// Lowercased extension, or `None` when the name has no dot.
fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_blob_keeps_metadata_verbatim() {
        let blob = FileBlob::new("scan.png", "image/png", &b"not a real png"[..]);
        let attachment = Attachment::from_blob(blob.clone());
        assert_eq!(attachment.name, "scan.png");
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.size_bytes, blob.size_bytes());
        assert_eq!(attachment.content, blob.content);
    }

    #[test]
    fn test_from_blob_mints_distinct_ids() {
        let blob = FileBlob::new("a.txt", "text/plain", &b"x"[..]);
        let first = Attachment::from_blob(blob.clone());
        let second = Attachment::from_blob(blob);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file("scan.png"));
        assert!(is_image_file("photo.JPEG"));
        assert!(is_image_file("anim.gif"));
        assert!(is_image_file("pic.webp"));
        assert!(!is_image_file("report.pdf"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("no_extension"));
    }

    #[test]
    fn test_file_icon_kind() {
        assert_eq!(file_icon_kind("report.pdf"), FileIconKind::Document);
        assert_eq!(file_icon_kind("scan.jpg"), FileIconKind::Image);
        assert_eq!(file_icon_kind("data.csv"), FileIconKind::Generic);
        assert_eq!(file_icon_kind("README"), FileIconKind::Generic);
    }

    #[test]
    fn test_content_handle_is_shared_not_copied() {
        let blob = FileBlob::new("scan.png", "image/png", Bytes::from_static(b"pixels"));
        let attachment = Attachment::from_blob(blob);
        let preview_handle = attachment.content.clone();
        assert_eq!(preview_handle, attachment.content);
    }

    #[test]
    fn test_attachment_serialization_skips_content() {
        let attachment = Attachment::from_blob(FileBlob::new("a.png", "image/png", &b"abc"[..]));
        let json = serde_json::to_string(&attachment).unwrap();
        assert!(!json.contains("content"));

        let restored: Attachment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name, "a.png");
        assert_eq!(restored.size_bytes, 3);
        assert!(restored.content.is_empty());
    }
}
