use snafu::OptionExt;

use crate::chat::directory::ChatDirectory;
use crate::chat::filter::ChatFilter;
use crate::chat::message::{Conversation, ConversationId};
use crate::error::{ChatResult, NotFoundSnafu};

/// Tracks the active category filter and the conversation bound to the thread view.
///
/// The two are independent: narrowing the filter never moves the selection, even when the
/// active conversation drops out of the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    current_filter: ChatFilter,
    active_conversation_id: ConversationId,
}

impl SelectionController {
    /// Starts on the first directory entry with every category visible.
    pub fn new(directory: &ChatDirectory) -> Self {
        Self::with_filter(directory, ChatFilter::All)
    }

    pub fn with_filter(directory: &ChatDirectory, filter: ChatFilter) -> Self {
        Self {
            current_filter: filter,
            active_conversation_id: directory.first().id.clone(),
        }
    }

    pub fn current_filter(&self) -> ChatFilter {
        self.current_filter
    }

    pub fn active_conversation_id(&self) -> &ConversationId {
        &self.active_conversation_id
    }

    pub fn set_filter(&mut self, filter: ChatFilter) {
        self.current_filter = filter;
    }

    /// Binds the thread view to `id`, failing with `NotFound` for ids outside the directory.
    pub fn select<'a>(
        &mut self,
        directory: &'a ChatDirectory,
        id: &ConversationId,
    ) -> ChatResult<&'a Conversation> {
        let conversation = directory.get(id).context(NotFoundSnafu {
            stage: "select-conversation",
            id: id.to_string(),
        })?;

        self.active_conversation_id = conversation.id.clone();
        Ok(conversation)
    }

    /// The active id is only ever taken from the directory; `first` covers a foreign directory.
    pub fn active<'a>(&self, directory: &'a ChatDirectory) -> &'a Conversation {
        directory
            .get(&self.active_conversation_id)
            .unwrap_or_else(|| directory.first())
    }
}
