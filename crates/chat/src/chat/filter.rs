use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chat::message::ConversationKind;
use crate::error::{ChatError, UnknownFilterSnafu};

/// Category selector restricting which conversations the sidebar lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatFilter {
    #[default]
    All,
    Personal,
    Group,
    Channel,
}

impl ChatFilter {
    /// Every filter in tab order.
    pub const ALL: [ChatFilter; 4] = [Self::All, Self::Personal, Self::Group, Self::Channel];

    pub fn matches(&self, kind: ConversationKind) -> bool {
        match self {
            Self::All => true,
            Self::Personal => kind == ConversationKind::Personal,
            Self::Group => kind == ConversationKind::Group,
            Self::Channel => kind == ConversationKind::Channel,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Personal => "personal",
            Self::Group => "group",
            Self::Channel => "channel",
        }
    }

    /// Caption of the sidebar tab.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Personal => "Личные",
            Self::Group => "Группы",
            Self::Channel => "Каналы",
        }
    }
}

impl From<ConversationKind> for ChatFilter {
    fn from(kind: ConversationKind) -> Self {
        match kind {
            ConversationKind::Personal => Self::Personal,
            ConversationKind::Group => Self::Group,
            ConversationKind::Channel => Self::Channel,
        }
    }
}

impl fmt::Display for ChatFilter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for ChatFilter {
    type Err = ChatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|filter| filter.name() == normalized)
            .ok_or_else(|| {
                UnknownFilterSnafu {
                    stage: "parse-chat-filter",
                    raw: raw.to_string(),
                }
                .build()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_kind() {
        for kind in [
            ConversationKind::Personal,
            ConversationKind::Group,
            ConversationKind::Channel,
        ] {
            assert!(ChatFilter::All.matches(kind));
            assert!(ChatFilter::from(kind).matches(kind));
        }
    }

    #[test]
    fn category_filters_are_exclusive() {
        assert!(!ChatFilter::Personal.matches(ConversationKind::Group));
        assert!(!ChatFilter::Group.matches(ConversationKind::Channel));
        assert!(!ChatFilter::Channel.matches(ConversationKind::Personal));
    }

    #[test]
    fn parses_names_loosely() {
        assert_eq!(" Group ".parse::<ChatFilter>().unwrap(), ChatFilter::Group);
        assert_eq!("ALL".parse::<ChatFilter>().unwrap(), ChatFilter::All);

        let error = "favourites".parse::<ChatFilter>().unwrap_err();
        assert!(matches!(error, ChatError::UnknownFilter { ref raw, .. } if raw == "favourites"));
    }
}
