use colored::Colorize;
use messenger_chat::{ChatFilter, ChatState, Conversation, Message};

const OWN_MESSAGE_INDENT: &str = "                ";

/// Filter tabs with the current one bracketed, e.g. `[Все] Личные Группы Каналы`.
pub fn render_filter_tabs(current: ChatFilter) -> String {
    ChatFilter::ALL
        .iter()
        .map(|filter| {
            if *filter == current {
                format!("[{}]", filter.label()).bold().to_string()
            } else {
                filter.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_conversation_row(conversation: &Conversation, is_active: bool) -> String {
    let marker = if is_active { ">" } else { " " };
    let presence = if conversation.shows_presence_dot() {
        "●"
    } else {
        " "
    };
    let badge = conversation
        .unread_badge()
        .map(|unread| format!(" ({unread})").magenta().to_string())
        .unwrap_or_default();

    format!(
        "{marker} {id:>3} {presence} {name}  {time}{badge}\n        {preview}",
        id = conversation.id,
        name = conversation.name,
        time = conversation.last_activity.dimmed(),
        preview = conversation.last_message.dimmed(),
    )
}

/// Sidebar: tabs followed by the conversations visible under the current filter.
pub fn render_sidebar(state: &ChatState) -> String {
    let active_id = &state.active_conversation().id;
    let visible = state.visible_conversations();

    let mut lines = vec![render_filter_tabs(state.current_filter())];
    if visible.is_empty() {
        lines.push("  (no chats in this category)".dimmed().to_string());
    }
    lines.extend(visible.into_iter().map(|conversation| {
        render_conversation_row(conversation, &conversation.id == active_id)
    }));
    lines.join("\n")
}

pub fn render_header(conversation: &Conversation) -> String {
    let avatar = conversation.avatar_fallback().unwrap_or('?');
    format!(
        "({avatar}) {name}\n    {status}",
        name = conversation.name.bold(),
        status = conversation.header_status().label().dimmed(),
    )
}

pub fn render_message(message: &Message) -> String {
    if message.is_mine() {
        format!(
            "{OWN_MESSAGE_INDENT}{text} {time}",
            text = message.text.cyan(),
            time = message.time.dimmed(),
        )
    } else {
        format!("{text} {time}", text = message.text, time = message.time.dimmed())
    }
}

/// Thread view: header of the active conversation and its messages in order.
pub fn render_thread(state: &ChatState) -> String {
    let mut lines = vec![render_header(state.active_conversation())];
    lines.extend(state.messages().iter().map(render_message));
    lines.join("\n")
}
