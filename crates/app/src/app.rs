use std::path::PathBuf;

use messenger_chat::{ChatFilter, ChatState, Clock, SeedData, SystemClock, ThreadMode};
use snafu::ResultExt;

use crate::error::{AppResult, ChatStateSnafu, SettingsSnafu};
use crate::settings::{MessengerSettings, SettingsStore};

/// Command-line overrides layered on top of persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed_path: Option<PathBuf>,
    pub thread_mode: Option<ThreadMode>,
    pub initial_filter: Option<ChatFilter>,
}

impl Overrides {
    pub fn apply(&self, settings: &MessengerSettings) -> MessengerSettings {
        MessengerSettings {
            thread_mode: self.thread_mode.unwrap_or(settings.thread_mode),
            seed_path: self
                .seed_path
                .clone()
                .or_else(|| settings.seed_path.clone()),
            initial_filter: self.initial_filter.unwrap_or(settings.initial_filter),
        }
        .normalized()
    }
}

/// Builds the session state described by `settings`, reading the system clock for new messages.
pub fn build_state(settings: &MessengerSettings) -> AppResult<ChatState> {
    build_state_with_clock(settings, Box::new(SystemClock))
}

pub fn build_state_with_clock(
    settings: &MessengerSettings,
    clock: Box<dyn Clock>,
) -> AppResult<ChatState> {
    let seed = match settings.seed_path.as_deref() {
        Some(path) => SeedData::load(path).context(ChatStateSnafu {
            stage: "load-seed-file",
        })?,
        None => SeedData::builtin(),
    };

    let mut state = ChatState::from_seed(seed, settings.thread_mode, clock).context(
        ChatStateSnafu {
            stage: "build-chat-state",
        },
    )?;
    state.set_filter(settings.initial_filter);

    tracing::info!(
        "session ready: {} conversations, thread mode {}, filter {}",
        state.directory().len(),
        state.thread_mode(),
        state.current_filter()
    );
    Ok(state)
}

/// Persists `settings` as the new defaults for later sessions.
pub fn save_settings(store: &SettingsStore, settings: MessengerSettings) -> AppResult<()> {
    store.update(settings).context(SettingsSnafu {
        stage: "save-effective-settings",
    })
}
