/// Observable state of the pending-input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposerState {
    Empty,
    NonEmpty,
}

/// Pending-input buffer for new messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Whitespace-only buffers count as empty.
    pub fn state(&self) -> ComposerState {
        if self.buffer.trim().is_empty() {
            ComposerState::Empty
        } else {
            ComposerState::NonEmpty
        }
    }

    /// Replaces the buffer as typed, without limits or sanitizing.
    pub fn update_text(&mut self, text: impl Into<String>) -> ComposerState {
        self.buffer = text.into();
        self.state()
    }

    /// Hands out the buffered text and clears it, or leaves everything untouched when empty.
    pub fn take_submission(&mut self) -> Option<String> {
        match self.state() {
            ComposerState::Empty => None,
            ComposerState::NonEmpty => Some(std::mem::take(&mut self.buffer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let composer = Composer::new();
        assert_eq!(composer.text(), "");
        assert_eq!(composer.state(), ComposerState::Empty);
    }

    #[test]
    fn update_tracks_state_transitions() {
        let mut composer = Composer::new();

        assert_eq!(composer.update_text("hi"), ComposerState::NonEmpty);
        assert_eq!(composer.update_text("   \t"), ComposerState::Empty);
        assert_eq!(composer.update_text(""), ComposerState::Empty);
        assert_eq!(composer.update_text(" x "), ComposerState::NonEmpty);
    }

    #[test]
    fn whitespace_submission_keeps_buffer() {
        let mut composer = Composer::new();
        composer.update_text("   ");

        assert_eq!(composer.take_submission(), None);
        assert_eq!(composer.text(), "   ");
    }

    #[test]
    fn submission_returns_raw_text_and_clears() {
        let mut composer = Composer::new();
        composer.update_text("  hello ");

        assert_eq!(composer.take_submission().as_deref(), Some("  hello "));
        assert_eq!(composer.text(), "");
        assert_eq!(composer.take_submission(), None);
    }
}
