#![deny(unsafe_code)]

/// View-state model for a single-screen messenger.
///
/// The crate owns conversation filtering, selection, the message thread and the composer.
/// Rendering lives in front-end crates that drive [`state::ChatState`] with UI events.
pub mod chat;
pub mod clock;
pub mod error;
pub mod seed;
pub mod state;

pub use chat::{
    Author, ChatFilter, ComposerState, Conversation, ConversationId, ConversationKind,
    EventOutcome, HeaderStatus, Key, Message, MessageId, ThreadMode, UiEvent,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ChatError, ChatResult};
pub use seed::SeedData;
pub use state::ChatState;
