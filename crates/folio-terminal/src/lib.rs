//! Command interpreter for the folio terminal.
//!
//! The terminal is a registry-based dispatch system over a single-level
//! virtual file tree. Commands implement the `Command` trait and are
//! registered by name; the hosting shell tokenizes each input line and the
//! registry resolves the name and dispatches `execute()`. The one piece of
//! mutable state, the working directory, lives in a `Session` threaded
//! through every call.

mod commands;
mod interpreter;
pub mod resolver;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, typed lines, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch and completion.
pub use interpreter::CommandRegistry;
/// Shared mutable environment passed to every command.
pub use interpreter::Session;
/// Quote-aware line tokenizer for hosting shells.
pub use interpreter::tokenize;
/// Current working directory value.
pub use resolver::Cwd;
