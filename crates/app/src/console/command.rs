use messenger_chat::{ChatError, ChatFilter, ConversationId};

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Filter(ChatFilter),
    Open(ConversationId),
    List,
    Messages,
    Help,
    Quit,
    /// Plain text: typed into the composer, then Enter.
    Compose(String),
    /// A slash command the console does not know or could not parse.
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
/filter <all|personal|group|channel>  show one category of chats
/open <id>                            open a conversation
/list                                 redraw the chat list
/messages                             redraw the open thread
/help                                 show this help
/quit                                 leave
anything else is sent as a message";

pub fn parse_line(line: &str) -> ConsoleCommand {
    let Some(command_line) = line.trim_start().strip_prefix('/') else {
        return ConsoleCommand::Compose(line.to_string());
    };

    let (name, argument) = match command_line.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command_line.trim_end(), ""),
    };

    match (name, argument) {
        ("filter", raw) => match raw.parse::<ChatFilter>() {
            Ok(filter) => ConsoleCommand::Filter(filter),
            Err(error) => ConsoleCommand::Invalid(error.to_string()),
        },
        ("open", "") => ConsoleCommand::Invalid("usage: /open <id>".to_string()),
        ("open", raw) => ConsoleCommand::Open(ConversationId::new(raw)),
        ("list", _) => ConsoleCommand::List,
        ("messages", _) => ConsoleCommand::Messages,
        ("help", _) => ConsoleCommand::Help,
        ("quit" | "exit", _) => ConsoleCommand::Quit,
        (other, _) => ConsoleCommand::Invalid(format!("unknown command /{other}, try /help")),
    }
}

/// Human-readable message for errors the console reports inline.
pub fn describe_error(error: &ChatError) -> String {
    match error {
        ChatError::NotFound { id, .. } => format!("no conversation with id {id}"),
        other => other.to_string(),
    }
}
