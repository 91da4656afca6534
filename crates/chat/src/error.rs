use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ChatError {
    #[snafu(display("conversation '{id}' was not found in the directory"))]
    NotFound { stage: &'static str, id: String },
    #[snafu(display("chat directory must contain at least one conversation"))]
    EmptyDirectory { stage: &'static str },
    #[snafu(display("conversation id '{id}' appears more than once in the directory"))]
    DuplicateConversation { stage: &'static str, id: String },
    #[snafu(display("message id {id} appears more than once in the seeded thread"))]
    DuplicateMessage { stage: &'static str, id: u64 },
    #[snafu(display("unknown chat filter '{raw}', expected all, personal, group or channel"))]
    UnknownFilter { stage: &'static str, raw: String },
    #[snafu(display("unknown thread mode '{raw}', expected shared or per-conversation"))]
    UnknownThreadMode { stage: &'static str, raw: String },
    #[snafu(display("failed to read seed data from {path:?}"))]
    ReadSeed {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to parse seed data from {path:?}: {source}"))]
    ParseSeed {
        stage: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ChatError {
    /// Returns true for the selection failure surfaced to callers as `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
