#![deny(unsafe_code)]

/// Session bootstrap from settings and command-line overrides.
pub mod app;
/// Line-oriented console front end for the chat state.
pub mod console;
pub mod error;
/// Settings persistence.
pub mod settings;
