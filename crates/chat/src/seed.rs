use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::chat::message::{Author, Conversation, ConversationKind, Message, MessageId};
use crate::error::{ChatResult, ParseSeedSnafu, ReadSeedSnafu};

/// Initial directory and thread contents for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl SeedData {
    pub fn new(conversations: Vec<Conversation>, messages: Vec<Message>) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    /// Reads seed data from a JSON file.
    pub fn load(path: &Path) -> ChatResult<Self> {
        let content = std::fs::read_to_string(path).context(ReadSeedSnafu {
            stage: "read-seed-file",
            path: path.to_path_buf(),
        })?;

        let seed = serde_json::from_str::<Self>(&content).context(ParseSeedSnafu {
            stage: "parse-seed-json",
            path: path.to_path_buf(),
        })?;

        tracing::info!(
            "loaded seed from {:?}: {} conversations, {} messages",
            path,
            seed.conversations.len(),
            seed.messages.len()
        );
        Ok(seed)
    }

    /// The stock demo data: six conversations and a five-message thread.
    pub fn builtin() -> Self {
        Self::new(builtin_conversations(), builtin_messages())
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_conversations() -> Vec<Conversation> {
    vec![
        Conversation::new("1", "Александра", ConversationKind::Personal)
            .with_avatar("https://api.dicebear.com/7.x/avataaars/svg?seed=Alexandra")
            .with_preview("Привет! Как дела?", "14:32")
            .with_unread(3)
            .with_online(true),
        Conversation::new("2", "Дизайн команда 🎨", ConversationKind::Group)
            .with_avatar("https://api.dicebear.com/7.x/shapes/svg?seed=Design")
            .with_preview("Алексей: Отличная работа!", "13:15")
            .with_unread(12),
        Conversation::new("3", "Разработка", ConversationKind::Group)
            .with_avatar("https://api.dicebear.com/7.x/shapes/svg?seed=Dev")
            .with_preview("Мария: Пушу обновление", "12:48"),
        Conversation::new("4", "Новости Tech 📱", ConversationKind::Channel)
            .with_avatar("https://api.dicebear.com/7.x/shapes/svg?seed=Tech")
            .with_preview("Вышла новая версия React 19", "11:20"),
        Conversation::new("5", "Дмитрий", ConversationKind::Personal)
            .with_avatar("https://api.dicebear.com/7.x/avataaars/svg?seed=Dmitry")
            .with_preview("Созвонимся завтра?", "10:05")
            .with_online(false),
        Conversation::new("6", "Маркетинг", ConversationKind::Group)
            .with_avatar("https://api.dicebear.com/7.x/shapes/svg?seed=Marketing")
            .with_preview("Анна: Нужно обсудить кампанию", "Вчера")
            .with_unread(5),
    ]
}

fn builtin_messages() -> Vec<Message> {
    [
        ("Привет! Как дела?", "14:30", false),
        (
            "Привет! Всё отлично, работаю над новым проектом 🚀",
            "14:31",
            true,
        ),
        ("О, интересно! Расскажешь подробнее?", "14:32", false),
        ("Конечно! Это мессенджер с крутым дизайном", "14:32", true),
        ("Радужный градиент выглядит потрясающе!", "14:33", true),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (text, time, is_mine))| {
        Message::new(
            MessageId::new(index as u64 + 1),
            text,
            time,
            Author::from_is_mine(is_mine),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;

    #[test]
    fn builtin_seed_matches_demo_data() {
        let seed = SeedData::builtin();

        assert_eq!(seed.conversations.len(), 6);
        assert_eq!(seed.messages.len(), 5);
        assert_eq!(seed.conversations[0].name, "Александра");
        assert_eq!(seed.conversations[5].last_activity, "Вчера");
        assert_eq!(seed.messages[4].id, MessageId::new(5));
        assert!(seed.messages[4].is_mine());
        assert!(!seed.messages[0].is_mine());
    }

    #[test]
    fn load_reads_json_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{
                "conversations": [
                    { "id": "ops", "name": "Ops", "kind": "channel", "unread": 2 }
                ]
            }"#,
        )
        .unwrap();

        let seed = SeedData::load(&path).unwrap();

        assert_eq!(seed.conversations.len(), 1);
        assert_eq!(seed.conversations[0].kind, ConversationKind::Channel);
        assert_eq!(seed.conversations[0].unread, 2);
        assert!(seed.messages.is_empty());
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let directory = tempfile::tempdir().unwrap();
        let missing = directory.path().join("missing.json");
        let malformed = directory.path().join("malformed.json");
        std::fs::write(&malformed, "{ not json").unwrap();

        assert!(matches!(
            SeedData::load(&missing).unwrap_err(),
            ChatError::ReadSeed { .. }
        ));
        assert!(matches!(
            SeedData::load(&malformed).unwrap_err(),
            ChatError::ParseSeed { .. }
        ));
    }
}
