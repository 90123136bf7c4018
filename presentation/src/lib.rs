//! Presentation layer for bedrock-playground
//!
//! This crate contains CLI definitions, output formatting, and the
//! interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
