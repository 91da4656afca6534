use crate::chat::filter::ChatFilter;
use crate::chat::message::{ConversationId, Message};

/// Key delivered to the composer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

impl Key {
    /// Maps a toolkit key name such as `"Enter"` to a key.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("enter") {
            return Self::Enter;
        }

        let mut characters = name.chars();
        match (characters.next(), characters.next()) {
            (Some(character), None) => Self::Char(character),
            _ => Self::Other,
        }
    }
}

/// Discrete user input driving the chat state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FilterChanged(ChatFilter),
    ConversationSelected(ConversationId),
    ComposerEdited(String),
    KeyPressed(Key),
    SendClicked,
}

impl UiEvent {
    /// Returns true for the events that trigger a composer submit.
    pub fn is_submit(&self) -> bool {
        matches!(self, Self::SendClicked | Self::KeyPressed(Key::Enter))
    }
}

/// What handling one event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A submit appended this message.
    Appended(Message),
    /// Filter, selection or composer text changed.
    Changed,
    /// Nothing happened, e.g. a submit with an empty buffer or an unbound key.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_map_to_keys() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("enter"), Key::Enter);
        assert_eq!(Key::from_name("a"), Key::Char('a'));
        assert_eq!(Key::from_name("Shift"), Key::Other);
    }

    #[test]
    fn only_enter_and_send_submit() {
        assert!(UiEvent::SendClicked.is_submit());
        assert!(UiEvent::KeyPressed(Key::Enter).is_submit());
        assert!(!UiEvent::KeyPressed(Key::Char('\n')).is_submit());
        assert!(!UiEvent::ComposerEdited("x".to_string()).is_submit());
    }
}
