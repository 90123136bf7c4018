//! Interactive chat module
//!
//! Provides a readline-based chat interface with an in-session transcript.

mod repl;

pub use repl::ChatRepl;
