//! Command trait, registry, and dispatch logic.
//!
//! The hosting shell collects one line of input, tokenizes it, and hands the
//! command name plus arguments to [`CommandRegistry::dispatch`]. Commands
//! return their output as a [`CommandOutput`] value; the shell decides how to
//! render it (plain, typed animation, clear).

use std::collections::HashMap;

use folio_net::JokeSource;
use folio_registry::Directories;
use folio_types::error::{FolioError, Result};

use crate::resolver::Cwd;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Lines the host renders with a typing animation, in order.
    ///
    /// The host blanks the prompt before the first line and restores it after
    /// the last, so the animation never interleaves with prompt redraws.
    Typed {
        lines: Vec<String>,
        /// Per-character delay hint, in milliseconds.
        delay_ms: u64,
    },
    /// Command produced no visible output.
    None,
    /// Signal to the host to clear its scrollback.
    Clear,
}

/// Shared mutable environment passed to every command.
///
/// Owns the one piece of session state, the working directory; everything
/// else is a read-only collaborator. Each hosting shell (tab, test) makes its
/// own `Session`, so sessions are isolated by construction.
pub struct Session<'a> {
    /// Current working directory.
    pub cwd: Cwd,
    /// The directory registry.
    pub dirs: &'a dyn Directories,
    /// Joke source for the `joke` command, if one is wired up.
    pub jokes: Option<&'a dyn JokeSource>,
    /// Per-character delay hint for typed output, in milliseconds.
    pub typing_delay_ms: u64,
}

impl<'a> Session<'a> {
    /// Create a session rooted at `~` over the given registry.
    pub fn new(dirs: &'a dyn Directories) -> Self {
        Self {
            cwd: Cwd::Root,
            dirs,
            jokes: None,
            typing_delay_ms: 50,
        }
    }

    /// Render the shell prompt for this session.
    pub fn prompt(&self, user: &str, host: &str) -> String {
        format!("{user}@{host}:{}$ ", self.cwd)
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[path\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and session.
    fn execute(&self, args: &[&str], session: &mut Session<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch and completion.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Tokenize a line and dispatch it.
    ///
    /// Empty and whitespace-only lines produce no output.
    pub fn execute(&self, line: &str, session: &mut Session<'_>) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }
        let tokens = tokenize(trimmed)?;
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(name, &args, session)
    }

    /// Look up a command by name and execute it.
    ///
    /// Names are matched case-insensitively. Unknown names fail with
    /// `UnknownCommand` and leave the session untouched.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        session: &mut Session<'_>,
    ) -> Result<CommandOutput> {
        let name_lower = name.to_ascii_lowercase();
        log::debug!("dispatch: {name_lower} {args:?}");

        // `help` needs the command table, so the registry handles it itself.
        if name_lower == "help" {
            return self.execute_help();
        }

        match self.commands.get(name_lower.as_str()) {
            Some(cmd) => cmd.execute(args, session),
            None => Err(FolioError::UnknownCommand(name.to_string())),
        }
    }

    /// Built-in help: every recognized name as a spoken-style list.
    fn execute_help(&self) -> Result<CommandOutput> {
        let names = self.command_names();
        Ok(CommandOutput::Text(format!(
            "Available commands:\n{}",
            format_conjunction(&names),
        )))
    }

    /// All recognized command names (registered plus the intercepted `help`),
    /// sorted alphabetically.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.push("help".to_string());
        names.sort();
        names.dedup();
        names
    }

    /// Completion candidates for partially-typed input.
    ///
    /// For `cd` and `ls`: a `~/`-prefixed partial completes to every
    /// directory as `~/<name>`; at the root a bare partial completes to the
    /// bare directory names; inside a section there is nothing relative to
    /// complete, so candidates fall back to command names. Every other
    /// command completes to command names. The host narrows candidates by
    /// prefix itself.
    pub fn completions(&self, command: &str, partial: &str, session: &Session<'_>) -> Vec<String> {
        let command = command.to_ascii_lowercase();
        if command == "cd" || command == "ls" {
            if partial.starts_with("~/") {
                return session
                    .dirs
                    .keys()
                    .iter()
                    .map(|name| format!("~/{name}"))
                    .collect();
            }
            if session.cwd == Cwd::Root {
                return session.dirs.keys().to_vec();
            }
        }
        self.command_names()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Join names like a spoken list: "a", "a and b", "a, b, and c".
fn format_conjunction(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

// ---------------------------------------------------------------------------
// Tokenizer: handles single quotes, double quotes, and backslash escapes.
// ---------------------------------------------------------------------------

/// Tokenize a command line respecting quotes and backslash escapes.
///
/// - Single-quoted text is preserved literally.
/// - Double quotes group words; a backslash inside escapes `"` and `\`.
/// - A backslash outside quotes escapes the next character.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    #[derive(PartialEq, Eq)]
    enum Mode {
        Plain,
        Single,
        Double,
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut mode = Mode::Plain;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match mode {
            Mode::Single => {
                if ch == '\'' {
                    mode = Mode::Plain;
                } else {
                    current.push(ch);
                }
            },
            Mode::Double => match ch {
                '"' => mode = Mode::Plain,
                '\\' if matches!(chars.peek(), Some(&('"' | '\\'))) => {
                    current.push(chars.next().unwrap_or('\\'));
                },
                _ => current.push(ch),
            },
            Mode::Plain => match ch {
                '\'' => mode = Mode::Single,
                '"' => mode = Mode::Double,
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                },
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                },
                _ => current.push(ch),
            },
        }
    }

    match mode {
        Mode::Single => return Err(FolioError::Command("unterminated single quote".to_string())),
        Mode::Double => return Err(FolioError::Command("unterminated double quote".to_string())),
        Mode::Plain => {},
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}
