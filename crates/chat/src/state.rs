use crate::chat::composer::{Composer, ComposerState};
use crate::chat::directory::ChatDirectory;
use crate::chat::events::{EventOutcome, UiEvent};
use crate::chat::filter::ChatFilter;
use crate::chat::message::{Author, Conversation, ConversationId, Message};
use crate::chat::message_log::{MessageLogs, ThreadMode};
use crate::chat::selection::SelectionController;
use crate::clock::{Clock, SystemClock};
use crate::error::ChatResult;
use crate::seed::SeedData;

/// Session state behind the chat screen.
///
/// Every transition is synchronous and runs to completion before the next event, so the
/// container needs no locking.
pub struct ChatState {
    directory: ChatDirectory,
    selection: SelectionController,
    logs: MessageLogs,
    composer: Composer,
    clock: Box<dyn Clock>,
}

impl ChatState {
    /// Builds the stock demo session with a shared thread and the system clock.
    pub fn seeded() -> ChatResult<Self> {
        Self::from_seed(SeedData::builtin(), ThreadMode::Shared, Box::new(SystemClock))
    }

    pub fn from_seed(seed: SeedData, mode: ThreadMode, clock: Box<dyn Clock>) -> ChatResult<Self> {
        let directory = ChatDirectory::new(seed.conversations)?;
        let selection = SelectionController::new(&directory);
        let logs = MessageLogs::new(mode, seed.messages, selection.active_conversation_id())?;

        tracing::debug!(
            "chat state ready: {} conversations, thread mode {}",
            directory.len(),
            mode
        );

        Ok(Self {
            directory,
            selection,
            logs,
            composer: Composer::new(),
            clock,
        })
    }

    pub fn directory(&self) -> &ChatDirectory {
        &self.directory
    }

    pub fn thread_mode(&self) -> ThreadMode {
        self.logs.mode()
    }

    pub fn list_conversations(&self, filter: ChatFilter) -> Vec<&Conversation> {
        self.directory.list(filter)
    }

    /// Conversations visible under the current filter.
    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        self.directory.list(self.selection.current_filter())
    }

    pub fn active_conversation(&self) -> &Conversation {
        self.selection.active(&self.directory)
    }

    pub fn select_conversation(&mut self, id: &ConversationId) -> ChatResult<()> {
        match self.selection.select(&self.directory, id) {
            Ok(conversation) => {
                tracing::debug!("selected conversation {}", conversation.id);
                Ok(())
            }
            Err(error) => {
                tracing::warn!("rejected conversation selection: {error}");
                Err(error)
            }
        }
    }

    pub fn current_filter(&self) -> ChatFilter {
        self.selection.current_filter()
    }

    pub fn set_filter(&mut self, filter: ChatFilter) {
        self.selection.set_filter(filter);
        tracing::debug!("filter set to {filter}");
    }

    /// Snapshot of the thread bound to the active conversation.
    pub fn messages(&self) -> &[Message] {
        self.logs.messages(self.selection.active_conversation_id())
    }

    pub fn composer_text(&self) -> &str {
        self.composer.text()
    }

    pub fn composer_state(&self) -> ComposerState {
        self.composer.state()
    }

    pub fn update_composer_text(&mut self, text: impl Into<String>) {
        self.composer.update_text(text);
    }

    /// Sends the buffered text as a local message; empty buffers are left alone.
    pub fn submit_composer(&mut self) -> Option<&Message> {
        let text = self.composer.take_submission()?;
        let active_id = self.selection.active_conversation_id().clone();

        let log = self.logs.log_mut(&active_id);
        Some(log.append(text, Author::Local, self.clock.as_ref()))
    }

    /// Applies one UI event. Enter and the send button share the same submit path.
    pub fn handle(&mut self, event: UiEvent) -> ChatResult<EventOutcome> {
        if event.is_submit() {
            return Ok(match self.submit_composer() {
                Some(message) => EventOutcome::Appended(message.clone()),
                None => EventOutcome::Ignored,
            });
        }

        let outcome = match event {
            UiEvent::FilterChanged(filter) => {
                self.set_filter(filter);
                EventOutcome::Changed
            }
            UiEvent::ConversationSelected(id) => {
                self.select_conversation(&id)?;
                EventOutcome::Changed
            }
            UiEvent::ComposerEdited(text) => {
                self.update_composer_text(text);
                EventOutcome::Changed
            }
            UiEvent::KeyPressed(_) | UiEvent::SendClicked => EventOutcome::Ignored,
        };

        Ok(outcome)
    }
}
