use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::chat::message::{Author, ConversationId, Message, MessageId};
use crate::clock::Clock;
use crate::error::{ChatError, ChatResult, DuplicateMessageSnafu, UnknownThreadModeSnafu};

/// Append-only, insertion-ordered sequence of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_message_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_message_id: 1,
        }
    }

    /// Seeds the log; the id counter resumes after the largest seeded id.
    ///
    /// Fails with `DuplicateMessage` when two seeded messages share an id.
    pub fn from_messages(messages: Vec<Message>) -> ChatResult<Self> {
        let mut seen = HashSet::with_capacity(messages.len());
        for message in &messages {
            ensure!(
                seen.insert(message.id),
                DuplicateMessageSnafu {
                    stage: "seed-message-log",
                    id: message.id.0,
                }
            );
        }

        let next_message_id = messages
            .iter()
            .map(|message| message.id.0)
            .max()
            .unwrap_or(0)
            .max(messages.len() as u64)
            .saturating_add(1);

        Ok(Self {
            messages,
            next_message_id,
        })
    }

    /// Appends a message stamped with the clock's current time.
    ///
    /// Callers own the non-empty text check; the log stores whatever it is given.
    pub fn append(
        &mut self,
        text: impl Into<String>,
        author: Author,
        clock: &dyn Clock,
    ) -> &Message {
        let id = self.alloc_message_id();
        self.messages
            .push(Message::new(id, text, clock.now_display(), author));

        let appended = &self.messages[self.messages.len() - 1];
        tracing::debug!("appended message {} ({:?})", appended.id, appended.author);
        appended
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn alloc_message_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_message_id);
        self.next_message_id = self.next_message_id.saturating_add(1);
        id
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

/// How message threads relate to conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadMode {
    /// One timeline shared by every conversation.
    #[default]
    Shared,
    /// Each conversation keeps its own timeline.
    PerConversation,
}

impl ThreadMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::PerConversation => "per-conversation",
        }
    }
}

impl fmt::Display for ThreadMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for ThreadMode {
    type Err = ChatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(Self::Shared),
            "per-conversation" | "per_conversation" => Ok(Self::PerConversation),
            _ => UnknownThreadModeSnafu {
                stage: "parse-thread-mode",
                raw: raw.to_string(),
            }
            .fail(),
        }
    }
}

/// Message logs for a session, resolved by the active conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLogs {
    Shared(MessageLog),
    PerConversation(HashMap<ConversationId, MessageLog>),
}

impl MessageLogs {
    /// Seeds the logs; in per-conversation mode the seed belongs to `owner`.
    pub fn new(
        mode: ThreadMode,
        seed: Vec<Message>,
        owner: &ConversationId,
    ) -> ChatResult<Self> {
        let seeded = MessageLog::from_messages(seed)?;
        Ok(match mode {
            ThreadMode::Shared => Self::Shared(seeded),
            ThreadMode::PerConversation => {
                let mut logs = HashMap::new();
                logs.insert(owner.clone(), seeded);
                Self::PerConversation(logs)
            }
        })
    }

    pub fn mode(&self) -> ThreadMode {
        match self {
            Self::Shared(_) => ThreadMode::Shared,
            Self::PerConversation(_) => ThreadMode::PerConversation,
        }
    }

    pub fn messages(&self, conversation_id: &ConversationId) -> &[Message] {
        match self {
            Self::Shared(log) => log.messages(),
            Self::PerConversation(logs) => logs
                .get(conversation_id)
                .map(MessageLog::messages)
                .unwrap_or(&[]),
        }
    }

    pub fn log_mut(&mut self, conversation_id: &ConversationId) -> &mut MessageLog {
        match self {
            Self::Shared(log) => log,
            Self::PerConversation(logs) => logs.entry(conversation_id.clone()).or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn seeded() -> MessageLog {
        MessageLog::from_messages(vec![
            Message::new(MessageId::new(1), "hi", "14:30", Author::Counterpart),
            Message::new(MessageId::new(2), "hello", "14:31", Author::Local),
        ])
        .unwrap()
    }

    #[test]
    fn append_continues_ids_after_seed() {
        let mut log = seeded();
        let clock = FixedClock::new("15:00");

        let appended = log.append("third", Author::Local, &clock).clone();

        assert_eq!(appended.id, MessageId::new(3));
        assert_eq!(appended.time, "15:00");
        assert!(appended.is_mine());
        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some(&appended));
    }

    #[test]
    fn append_keeps_insertion_order_without_dedup() {
        let mut log = MessageLog::new();
        let clock = FixedClock::new("08:00");

        log.append("same", Author::Local, &clock);
        log.append("same", Author::Counterpart, &clock);
        log.append("other", Author::Local, &clock);

        let texts = log
            .messages()
            .iter()
            .map(|message| message.text.as_str())
            .collect::<Vec<_>>();
        let ids = log
            .messages()
            .iter()
            .map(|message| message.id.0)
            .collect::<Vec<_>>();

        assert_eq!(texts, ["same", "same", "other"]);
        assert_eq!(ids, [1, 2, 3]);
        assert!(!log.messages()[1].is_mine());
    }

    #[test]
    fn sparse_seed_ids_never_collide() {
        let mut log = MessageLog::from_messages(vec![Message::new(
            MessageId::new(7),
            "late",
            "10:00",
            Author::Counterpart,
        )])
        .unwrap();

        let appended = log.append("next", Author::Local, &FixedClock::new("10:01"));
        assert_eq!(appended.id, MessageId::new(8));
    }

    #[test]
    fn shared_logs_ignore_conversation() {
        let mut logs = MessageLogs::new(
            ThreadMode::Shared,
            seeded().messages().to_vec(),
            &ConversationId::new("1"),
        )
        .unwrap();

        logs.log_mut(&ConversationId::new("2"))
            .append("from two", Author::Local, &FixedClock::new("11:11"));

        assert_eq!(logs.messages(&ConversationId::new("1")).len(), 3);
        assert_eq!(logs.messages(&ConversationId::new("9")).len(), 3);
    }

    #[test]
    fn per_conversation_logs_are_isolated() {
        let owner = ConversationId::new("1");
        let other = ConversationId::new("2");
        let mut logs = MessageLogs::new(
            ThreadMode::PerConversation,
            seeded().messages().to_vec(),
            &owner,
        )
        .unwrap();

        assert!(logs.messages(&other).is_empty());

        let appended = logs
            .log_mut(&other)
            .append("first", Author::Local, &FixedClock::new("12:00"))
            .clone();

        assert_eq!(appended.id, MessageId::new(1));
        assert_eq!(logs.messages(&owner).len(), 2);
        assert_eq!(logs.messages(&other).len(), 1);
        assert_eq!(logs.mode(), ThreadMode::PerConversation);
    }

    #[test]
    fn seed_with_repeated_message_id_is_rejected() {
        let error = MessageLog::from_messages(vec![
            Message::new(MessageId::new(1), "first", "09:00", Author::Counterpart),
            Message::new(MessageId::new(1), "again", "09:01", Author::Local),
        ])
        .unwrap_err();

        assert!(matches!(error, ChatError::DuplicateMessage { id: 1, .. }));
    }

    #[test]
    fn thread_mode_parses_both_spellings() {
        assert_eq!("shared".parse::<ThreadMode>().unwrap(), ThreadMode::Shared);
        assert_eq!(
            "Per_Conversation".parse::<ThreadMode>().unwrap(),
            ThreadMode::PerConversation
        );
        assert!("threaded".parse::<ThreadMode>().is_err());
    }
}
