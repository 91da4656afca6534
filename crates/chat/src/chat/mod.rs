pub mod composer;
pub mod directory;
/// Event contracts for wiring a front end to the chat state.
pub mod events;
pub mod filter;
/// Domain entities for conversations and messages.
pub mod message;
pub mod message_log;
pub mod selection;

pub use composer::{Composer, ComposerState};
pub use directory::ChatDirectory;
pub use events::{EventOutcome, Key, UiEvent};
pub use filter::ChatFilter;
pub use message::{
    Author, Conversation, ConversationId, ConversationKind, HeaderStatus, Message, MessageId,
};
pub use message_log::{MessageLog, MessageLogs, ThreadMode};
pub use selection::SelectionController;
