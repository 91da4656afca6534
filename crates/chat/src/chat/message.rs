use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for one conversation in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub String);

impl ConversationId {
    /// Creates a typed conversation identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(&self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier for one message, unique within a single log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Category of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Personal,
    Group,
    Channel,
}

impl ConversationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Group => "group",
            Self::Channel => "channel",
        }
    }
}

/// Subtitle shown under the conversation name in the thread header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderStatus {
    Online,
    RecentlySeen,
    Group,
    Channel,
}

impl HeaderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "В сети",
            Self::RecentlySeen => "Была(был) недавно",
            Self::Group => "Группа",
            Self::Channel => "Канал",
        }
    }
}

/// Summary record for one chat thread.
///
/// `avatar_uri` is opaque: it is handed to whatever loads images and never inspected here.
/// `online` only carries meaning for personal conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub name: String,
    #[serde(default)]
    pub avatar_uri: String,
    pub kind: ConversationKind,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub last_activity: String,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub online: Option<bool>,
}

impl Conversation {
    /// Creates a conversation with empty preview fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ConversationKind) -> Self {
        Self {
            id: ConversationId::new(id),
            name: name.into(),
            avatar_uri: String::new(),
            kind,
            last_message: String::new(),
            last_activity: String::new(),
            unread: 0,
            online: None,
        }
    }

    pub fn with_avatar(mut self, avatar_uri: impl Into<String>) -> Self {
        self.avatar_uri = avatar_uri.into();
        self
    }

    pub fn with_preview(
        mut self,
        last_message: impl Into<String>,
        last_activity: impl Into<String>,
    ) -> Self {
        self.last_message = last_message.into();
        self.last_activity = last_activity.into();
        self
    }

    pub fn with_unread(mut self, unread: u32) -> Self {
        self.unread = unread;
        self
    }

    pub fn with_online(mut self, online: bool) -> Self {
        self.online = Some(online);
        self
    }

    pub fn header_status(&self) -> HeaderStatus {
        match self.kind {
            ConversationKind::Personal if self.is_online() => HeaderStatus::Online,
            ConversationKind::Personal => HeaderStatus::RecentlySeen,
            ConversationKind::Group => HeaderStatus::Group,
            ConversationKind::Channel => HeaderStatus::Channel,
        }
    }

    /// Returns the unread counter only when there is something to badge.
    pub fn unread_badge(&self) -> Option<u32> {
        (self.unread > 0).then_some(self.unread)
    }

    /// Character drawn in place of the avatar when the image is unavailable.
    pub fn avatar_fallback(&self) -> Option<char> {
        self.name.chars().next()
    }

    pub fn shows_presence_dot(&self) -> bool {
        self.kind == ConversationKind::Personal && self.is_online()
    }

    fn is_online(&self) -> bool {
        self.online.unwrap_or(false)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Local,
    Counterpart,
}

impl Author {
    pub fn from_is_mine(is_mine: bool) -> Self {
        if is_mine { Self::Local } else { Self::Counterpart }
    }
}

/// One timestamped line of text in a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub time: String,
    pub author: Author,
}

impl Message {
    pub fn new(
        id: MessageId,
        text: impl Into<String>,
        time: impl Into<String>,
        author: Author,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            time: time.into(),
            author,
        }
    }

    pub fn is_mine(&self) -> bool {
        self.author == Author::Local
    }
}
