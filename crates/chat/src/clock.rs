use chrono::Local;

/// Format used for message timestamps: 24-hour, zero-padded `HH:MM`.
pub const MESSAGE_TIME_FORMAT: &str = "%H:%M";

/// Source of display timestamps for newly composed messages.
pub trait Clock: Send + Sync {
    fn now_display(&self) -> String;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_display(&self) -> String {
        Local::now().format(MESSAGE_TIME_FORMAT).to_string()
    }
}

/// Always reports the same time. Useful for deterministic tests and replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }
}

impl Clock for FixedClock {
    fn now_display(&self) -> String {
        self.0.clone()
    }
}
