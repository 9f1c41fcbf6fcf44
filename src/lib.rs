//! MediChat session core - the conversational state machine behind the chat UI.
//!
//! This library owns the message log, the staged-attachment lifecycle, the
//! simulated "assistant is working" activity indicator, reply orchestration,
//! and the image-preview panel selection. Rendering and transport are left to
//! the embedding application; it feeds user intents in as commands and reads
//! state back out as snapshots.

pub mod driver;
pub mod error;
pub mod models;
pub mod prelude;
pub mod state;
pub mod view_state;
