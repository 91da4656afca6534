/// Line parsing for console input.
pub mod command;
/// Plain-text rendering of the chat list and thread.
pub mod render;

use messenger_chat::{ChatState, EventOutcome, Key, UiEvent};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use snafu::ResultExt;

use crate::console::command::{ConsoleCommand, HELP_TEXT, describe_error, parse_line};
use crate::error::{AppResult, ReadlineSnafu};

const PROMPT: &str = "> ";

/// What the loop should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Silent,
    Quit,
}

/// Console front end translating typed lines into chat events.
pub struct Console {
    state: ChatState,
}

impl Console {
    pub fn new(state: ChatState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Full screen: chat list on top, open thread below.
    pub fn render_screen(&self) -> String {
        format!(
            "{}\n\n{}",
            render::render_sidebar(&self.state),
            render::render_thread(&self.state)
        )
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        match parse_line(line) {
            ConsoleCommand::Filter(filter) => {
                self.dispatch(UiEvent::FilterChanged(filter));
                Step::Print(render::render_sidebar(&self.state))
            }
            ConsoleCommand::Open(id) => match self.state.handle(UiEvent::ConversationSelected(id)) {
                Ok(_) => Step::Print(render::render_thread(&self.state)),
                Err(error) => Step::Print(describe_error(&error)),
            },
            ConsoleCommand::List => Step::Print(render::render_sidebar(&self.state)),
            ConsoleCommand::Messages => Step::Print(render::render_thread(&self.state)),
            ConsoleCommand::Help => Step::Print(HELP_TEXT.to_string()),
            ConsoleCommand::Quit => Step::Quit,
            ConsoleCommand::Invalid(reason) => Step::Print(reason),
            ConsoleCommand::Compose(text) => {
                // Typing a line and hitting Enter is the same submit as the send button.
                self.dispatch(UiEvent::ComposerEdited(text));
                match self.dispatch(UiEvent::KeyPressed(Key::Enter)) {
                    Some(EventOutcome::Appended(message)) => {
                        Step::Print(render::render_message(&message))
                    }
                    _ => Step::Silent,
                }
            }
        }
    }

    fn dispatch(&mut self, event: UiEvent) -> Option<EventOutcome> {
        match self.state.handle(event) {
            Ok(outcome) => Some(outcome),
            Err(error) => {
                tracing::warn!("console event failed: {error}");
                None
            }
        }
    }

    /// Runs the interactive loop until `/quit`, Ctrl-C or end of input.
    pub fn run(mut self) -> AppResult<()> {
        let mut editor = DefaultEditor::new().context(ReadlineSnafu {
            stage: "create-line-editor",
        })?;

        println!("{}", self.render_screen());
        println!("\n{}", HELP_TEXT);

        loop {
            let line = match editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(error) => {
                    return Err(error).context(ReadlineSnafu {
                        stage: "read-console-line",
                    });
                }
            };

            if !line.trim().is_empty()
                && let Err(error) = editor.add_history_entry(line.as_str())
            {
                tracing::debug!("failed to record history entry: {error}");
            }

            match self.handle_line(&line) {
                Step::Print(output) => println!("{output}"),
                Step::Silent => {}
                Step::Quit => break,
            }
        }

        tracing::info!(
            "console closed with {} messages in the open thread",
            self.state.messages().len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use messenger_chat::{ChatFilter, FixedClock, SeedData, ThreadMode};

    fn console() -> Console {
        Console::new(
            ChatState::from_seed(
                SeedData::builtin(),
                ThreadMode::Shared,
                Box::new(FixedClock::new("09:41")),
            )
            .unwrap(),
        )
    }

    #[test]
    fn typed_line_is_sent() {
        let mut console = console();

        let step = console.handle_line("Тест");

        assert!(matches!(step, Step::Print(ref output) if output.contains("Тест")));
        assert_eq!(console.state().messages().len(), 6);
        assert_eq!(console.state().composer_text(), "");
    }

    #[test]
    fn blank_line_sends_nothing() {
        let mut console = console();

        assert_eq!(console.handle_line("   "), Step::Silent);
        assert_eq!(console.state().messages().len(), 5);
        // The whitespace buffer stays in the composer, as with any empty submit.
        assert_eq!(console.state().composer_text(), "   ");
    }

    #[test]
    fn filter_and_open_commands_drive_state() {
        let mut console = console();

        console.handle_line("/filter channel");
        let step = console.handle_line("/open 4");

        assert_eq!(console.state().current_filter(), ChatFilter::Channel);
        assert_eq!(console.state().active_conversation().id.as_str(), "4");
        assert!(matches!(step, Step::Print(ref output) if output.contains("Канал")));
    }

    #[test]
    fn unknown_conversation_is_reported() {
        let mut console = console();

        let step = console.handle_line("/open 77");

        assert_eq!(step, Step::Print("no conversation with id 77".to_string()));
        assert_eq!(console.state().active_conversation().id.as_str(), "1");
    }

    #[test]
    fn quit_stops_the_loop() {
        assert_eq!(console().handle_line("/quit"), Step::Quit);
    }

    #[test]
    fn screen_contains_list_and_thread() {
        let screen = console().render_screen();
        assert!(screen.contains("Маркетинг"));
        assert!(screen.contains("Радужный градиент выглядит потрясающе!"));
    }
}
