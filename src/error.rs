//! Error types for the session command API.
//!
//! The taxonomy is intentionally shallow: there is no backend and no I/O to
//! fail. Everything not listed here (out-of-range unstage, closing an already
//! closed preview, a reply delivery that arrives after a conversation reset)
//! is a silent no-op by contract.

use thiserror::Error;

/// Failures surfaced when submitting a user turn.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// Message text is blank and no files are staged.
    #[error("nothing to send: text is empty and no files are staged")]
    NothingToSend,

    /// A simulated reply is already being prepared. Only one cycle may be in
    /// flight at a time; overlapping sends are rejected, never queued.
    #[error("a reply is already in flight")]
    ReplyInFlight,
}

/// Result alias for session command handlers.
pub type SessionResult<T> = Result<T, SendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            SendError::NothingToSend.to_string(),
            "nothing to send: text is empty and no files are staged"
        );
        assert_eq!(
            SendError::ReplyInFlight.to_string(),
            "a reply is already in flight"
        );
    }
}
