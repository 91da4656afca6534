use std::collections::HashSet;

use snafu::ensure;

use crate::chat::filter::ChatFilter;
use crate::chat::message::{Conversation, ConversationId};
use crate::error::{ChatResult, DuplicateConversationSnafu, EmptyDirectorySnafu};

/// Read-only, ordered catalogue of conversation summaries fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatDirectory {
    conversations: Vec<Conversation>,
}

impl ChatDirectory {
    /// Builds a directory, rejecting empty input and duplicate ids.
    pub fn new(conversations: Vec<Conversation>) -> ChatResult<Self> {
        ensure!(
            !conversations.is_empty(),
            EmptyDirectorySnafu {
                stage: "build-chat-directory",
            }
        );

        let mut seen = HashSet::with_capacity(conversations.len());
        for conversation in &conversations {
            ensure!(
                seen.insert(&conversation.id),
                DuplicateConversationSnafu {
                    stage: "build-chat-directory",
                    id: conversation.id.to_string(),
                }
            );
        }

        Ok(Self { conversations })
    }

    /// Returns the conversations accepted by `filter`, keeping directory order.
    pub fn list(&self, filter: ChatFilter) -> Vec<&Conversation> {
        self.conversations
            .iter()
            .filter(|conversation| filter.matches(conversation.kind))
            .collect()
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|conversation| &conversation.id == id)
    }

    pub fn contains(&self, id: &ConversationId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> &Conversation {
        // Non-empty by construction.
        &self.conversations[0]
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::ConversationKind;
    use crate::error::ChatError;

    fn directory() -> ChatDirectory {
        ChatDirectory::new(vec![
            Conversation::new("a", "Anna", ConversationKind::Personal),
            Conversation::new("b", "Builders", ConversationKind::Group),
            Conversation::new("c", "Crew", ConversationKind::Group),
            Conversation::new("d", "Digest", ConversationKind::Channel),
        ])
        .unwrap()
    }

    fn ids(conversations: &[&Conversation]) -> Vec<String> {
        conversations
            .iter()
            .map(|conversation| conversation.id.to_string())
            .collect()
    }

    #[test]
    fn list_all_returns_everything_in_order() {
        let directory = directory();
        assert_eq!(ids(&directory.list(ChatFilter::All)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn list_by_category_preserves_relative_order() {
        let directory = directory();
        assert_eq!(ids(&directory.list(ChatFilter::Group)), ["b", "c"]);
        assert_eq!(ids(&directory.list(ChatFilter::Channel)), ["d"]);
        assert_eq!(ids(&directory.list(ChatFilter::Personal)), ["a"]);
    }

    #[test]
    fn list_is_a_pure_projection() {
        let directory = directory();
        let first = ids(&directory.list(ChatFilter::Group));
        let second = ids(&directory.list(ChatFilter::Group));
        assert_eq!(first, second);
        assert_eq!(directory.len(), 4);
    }

    #[test]
    fn empty_directory_is_rejected() {
        let error = ChatDirectory::new(Vec::new()).unwrap_err();
        assert!(matches!(error, ChatError::EmptyDirectory { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = ChatDirectory::new(vec![
            Conversation::new("a", "Anna", ConversationKind::Personal),
            Conversation::new("a", "Again", ConversationKind::Group),
        ])
        .unwrap_err();
        assert!(matches!(error, ChatError::DuplicateConversation { ref id, .. } if id == "a"));
    }

    #[test]
    fn lookup_by_id() {
        let directory = directory();
        assert_eq!(directory.first().id.as_str(), "a");
        assert!(directory.contains(&ConversationId::new("d")));
        assert!(directory.get(&ConversationId::new("zz")).is_none());
    }
}
