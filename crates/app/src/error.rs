use snafu::Snafu;

use crate::settings::SettingsError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AppError {
    #[snafu(display("failed to prepare chat state on `{stage}`: {source}"))]
    ChatState {
        stage: &'static str,
        source: messenger_chat::ChatError,
    },
    #[snafu(display("failed to save settings on `{stage}`: {source}"))]
    Settings {
        stage: &'static str,
        source: SettingsError,
    },
    #[snafu(display("line editor failed on `{stage}`: {source}"))]
    Readline {
        stage: &'static str,
        source: rustyline::error::ReadlineError,
    },
}

pub type AppResult<T> = Result<T, AppError>;
