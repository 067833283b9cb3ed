//! Built-in commands for the folio terminal.

use folio_net::JokePayload;
use folio_registry::Directories;
use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Session};
use crate::resolver::{Listing, resolve_cd, resolve_ls};

/// Register all built-in commands into a registry.
///
/// `help` is not registered here: the registry intercepts it because it
/// needs access to the command table.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(JokeCmd));
    reg.register(Box::new(CreditsCmd));
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print arguments"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _session: &mut Session<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::None);
        }
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change working directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn execute(&self, args: &[&str], session: &mut Session<'_>) -> Result<CommandOutput> {
        // cwd is only assigned on the success path.
        session.cwd = resolve_cd(session.dirs, args.first().copied())?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [dir]"
    }
    fn execute(&self, args: &[&str], session: &mut Session<'_>) -> Result<CommandOutput> {
        let lines = match resolve_ls(session.dirs, &session.cwd, args.first().copied())? {
            Listing::Keys => session.dirs.keys().to_vec(),
            Listing::Section(name) => session
                .dirs
                .get(&name)
                .ok_or_else(|| FolioError::InvalidPath(name.clone()))?
                .to_vec(),
        };
        if lines.is_empty() {
            return Ok(CommandOutput::Text("(empty)".to_string()));
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// joke
// ---------------------------------------------------------------------------

struct JokeCmd;
impl Command for JokeCmd {
    fn name(&self) -> &str {
        "joke"
    }
    fn description(&self) -> &str {
        "Fetch a programming joke"
    }
    fn usage(&self) -> &str {
        "joke"
    }
    fn execute(&self, _args: &[&str], session: &mut Session<'_>) -> Result<CommandOutput> {
        let Some(source) = session.jokes else {
            return Ok(CommandOutput::Text(
                "joke: no joke source available".to_string(),
            ));
        };
        let payload = source.fetch_joke().map_err(|e| {
            log::warn!("joke fetch failed: {e}");
            FolioError::Command(format!("joke: {e}"))
        })?;
        let lines = match payload {
            JokePayload::TwoPart { setup, delivery } => {
                vec![format!("Q: {setup}"), format!("A: {delivery}")]
            },
            JokePayload::Single { joke } => vec![joke],
        };
        Ok(CommandOutput::Typed {
            lines,
            delay_ms: session.typing_delay_ms,
        })
    }
}

// ---------------------------------------------------------------------------
// credits
// ---------------------------------------------------------------------------

struct CreditsCmd;
impl Command for CreditsCmd {
    fn name(&self) -> &str {
        "credits"
    }
    fn description(&self) -> &str {
        "Show libraries and services used"
    }
    fn usage(&self) -> &str {
        "credits"
    }
    fn execute(&self, _args: &[&str], _session: &mut Session<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            [
                "",
                "Libraries and services used by this terminal:",
                "* JokeAPI        https://jokeapi.dev",
                "* serde + toml   content and payload decoding",
                "* env_logger     diagnostics",
                "",
            ]
            .join("\n"),
        ))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _session: &mut Session<'_>) -> Result<CommandOutput> {
        // The actual clearing is the hosting shell's job.
        Ok(CommandOutput::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_net::JokeSource;
    use folio_registry::SectionRegistry;

    use crate::resolver::Cwd;

    fn setup() -> (CommandRegistry, SectionRegistry) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let mut dirs = SectionRegistry::new();
        dirs.insert("education", vec!["BSc CS".to_string()]).unwrap();
        dirs.insert("skills", vec!["Go".to_string(), "Rust".to_string()])
            .unwrap();
        dirs.insert("projects", Vec::new()).unwrap();
        (reg, dirs)
    }

    fn text(output: CommandOutput) -> String {
        match output {
            CommandOutput::Text(s) => s,
            other => panic!("expected text, got {other:?}"),
        }
    }

    // -- echo ------------------------------------------------------------

    #[test]
    fn echo_no_args_produces_no_output() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        assert_eq!(reg.execute("echo", &mut session).unwrap(), CommandOutput::None);
    }

    #[test]
    fn echo_joins_args_with_spaces() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        assert_eq!(text(reg.execute("echo a b", &mut session).unwrap()), "a b");
    }

    // -- cd / ls ---------------------------------------------------------

    #[test]
    fn ls_at_root_lists_keys_in_registration_order() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        assert_eq!(
            text(reg.execute("ls", &mut session).unwrap()),
            "education\nskills\nprojects"
        );
    }

    #[test]
    fn cd_then_ls_yields_section_entries() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        for key in ["education", "skills", "projects"] {
            reg.execute(&format!("cd {key}"), &mut session).unwrap();
            assert_eq!(session.cwd, Cwd::Section(key.to_string()));
            let expected = dirs.get(key).unwrap();
            let listed = text(reg.execute("ls", &mut session).unwrap());
            if expected.is_empty() {
                assert_eq!(listed, "(empty)");
            } else {
                assert_eq!(listed, expected.join("\n"));
            }
            reg.execute("cd ..", &mut session).unwrap();
        }
    }

    #[test]
    fn cd_parent_from_root_is_a_noop() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        reg.execute("cd ..", &mut session).unwrap();
        assert_eq!(session.cwd, Cwd::Root);
    }

    #[test]
    fn failed_cd_leaves_listing_unchanged() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        let before = text(reg.execute("ls", &mut session).unwrap());
        let err = reg.execute("cd attic", &mut session).unwrap_err();
        assert!(matches!(err, FolioError::NoSuchDirectory(ref p) if p == "attic"));
        let after = text(reg.execute("ls", &mut session).unwrap());
        assert_eq!(before, after);
        assert_eq!(session.cwd, Cwd::Root);
    }

    #[test]
    fn ls_root_path_from_anywhere_matches_root_listing() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        let at_root = text(reg.execute("ls", &mut session).unwrap());
        reg.execute("cd skills", &mut session).unwrap();
        assert_eq!(text(reg.execute("ls ~", &mut session).unwrap()), at_root);
        assert_eq!(text(reg.execute("ls ~/", &mut session).unwrap()), at_root);
    }

    #[test]
    fn ls_bare_name_succeeds_only_at_root() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        assert_eq!(text(reg.execute("ls skills", &mut session).unwrap()), "Go\nRust");
        reg.execute("cd skills", &mut session).unwrap();
        let err = reg.execute("ls skills", &mut session).unwrap_err();
        assert!(matches!(err, FolioError::InvalidPath(_)));
    }

    #[test]
    fn ls_two_segments_always_invalid() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        assert!(reg.execute("ls ~/a/b", &mut session).is_err());
        assert!(reg.execute("ls ~/skills/Go", &mut session).is_err());
    }

    #[test]
    fn cd_roundtrip_reaches_same_state() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        reg.execute("cd ~/skills", &mut session).unwrap();
        let first = session.cwd.clone();
        reg.execute("cd ..", &mut session).unwrap();
        reg.execute("cd ~/skills", &mut session).unwrap();
        assert_eq!(session.cwd, first);
    }

    #[test]
    fn cd_bare_name_works_from_inside_a_section() {
        // The scenario from the original page: skills -> projects directly.
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        reg.execute("cd skills", &mut session).unwrap();
        assert_eq!(text(reg.execute("ls", &mut session).unwrap()), "Go\nRust");
        reg.execute("cd projects", &mut session).unwrap();
        assert_eq!(session.cwd, Cwd::Section("projects".to_string()));
        assert_eq!(text(reg.execute("ls", &mut session).unwrap()), "(empty)");
    }

    #[test]
    fn ls_dotdot_inside_section_lists_keys() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        reg.execute("cd education", &mut session).unwrap();
        assert_eq!(
            text(reg.execute("ls ..", &mut session).unwrap()),
            "education\nskills\nprojects"
        );
    }

    #[test]
    fn help_lists_builtins_and_clear() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        let out = text(reg.execute("help", &mut session).unwrap());
        assert_eq!(
            out,
            "Available commands:\ncd, clear, credits, echo, help, joke, and ls"
        );
    }

    // -- credits ---------------------------------------------------------

    #[test]
    fn credits_is_static_text() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        let out = text(reg.execute("credits", &mut session).unwrap());
        assert!(out.contains("JokeAPI"));
        assert_eq!(session.cwd, Cwd::Root);
    }

    // -- clear -----------------------------------------------------------

    #[test]
    fn clear_returns_clear_signal() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        assert_eq!(reg.execute("clear", &mut session).unwrap(), CommandOutput::Clear);
    }

    // -- joke ------------------------------------------------------------

    struct FixedJoke(JokePayload);
    impl JokeSource for FixedJoke {
        fn fetch_joke(&self) -> Result<JokePayload> {
            Ok(self.0.clone())
        }
    }

    struct BrokenJoke;
    impl JokeSource for BrokenJoke {
        fn fetch_joke(&self) -> Result<JokePayload> {
            Err(FolioError::Net("connection refused".to_string()))
        }
    }

    #[test]
    fn joke_without_source_reports_unavailable() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        let out = text(reg.execute("joke", &mut session).unwrap());
        assert!(out.contains("no joke source"));
    }

    #[test]
    fn joke_twopart_types_two_lines_in_order() {
        let (reg, dirs) = setup();
        let source = FixedJoke(JokePayload::TwoPart {
            setup: "setup".to_string(),
            delivery: "delivery".to_string(),
        });
        let mut session = Session::new(&dirs);
        session.jokes = Some(&source);
        session.typing_delay_ms = 5;
        match reg.execute("joke", &mut session).unwrap() {
            CommandOutput::Typed { lines, delay_ms } => {
                assert_eq!(lines, ["Q: setup", "A: delivery"]);
                assert_eq!(delay_ms, 5);
            },
            other => panic!("expected typed output, got {other:?}"),
        }
    }

    #[test]
    fn joke_single_types_one_line() {
        let (reg, dirs) = setup();
        let source = FixedJoke(JokePayload::Single {
            joke: "It works on my machine.".to_string(),
        });
        let mut session = Session::new(&dirs);
        session.jokes = Some(&source);
        match reg.execute("joke", &mut session).unwrap() {
            CommandOutput::Typed { lines, .. } => {
                assert_eq!(lines, ["It works on my machine."]);
            },
            other => panic!("expected typed output, got {other:?}"),
        }
    }

    #[test]
    fn joke_fetch_failure_is_a_command_error() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);
        session.jokes = Some(&BrokenJoke);
        let err = reg.execute("joke", &mut session).unwrap_err();
        assert!(format!("{err}").contains("joke:"));
        assert_eq!(session.cwd, Cwd::Root);
    }

    // -- multi-step sessions --------------------------------------------

    #[test]
    fn session_navigation_with_errors_in_between() {
        let (reg, dirs) = setup();
        let mut session = Session::new(&dirs);

        reg.execute("cd ~/education", &mut session).unwrap();
        assert_eq!(text(reg.execute("ls", &mut session).unwrap()), "BSc CS");

        // Bare ls inside a section fails; state survives.
        assert!(reg.execute("ls skills", &mut session).is_err());
        assert_eq!(session.cwd, Cwd::Section("education".to_string()));

        // Unknown command fails; state survives.
        assert!(reg.execute("pwd", &mut session).is_err());
        assert_eq!(session.cwd, Cwd::Section("education".to_string()));

        reg.execute("cd ..", &mut session).unwrap();
        assert_eq!(session.cwd, Cwd::Root);
    }

    #[test]
    fn two_sessions_are_isolated() {
        let (reg, dirs) = setup();
        let mut a = Session::new(&dirs);
        let mut b = Session::new(&dirs);
        reg.execute("cd skills", &mut a).unwrap();
        assert_eq!(a.cwd, Cwd::Section("skills".to_string()));
        assert_eq!(b.cwd, Cwd::Root);
        reg.execute("cd projects", &mut b).unwrap();
        assert_eq!(a.cwd, Cwd::Section("skills".to_string()));
        assert_eq!(b.cwd, Cwd::Section("projects".to_string()));
    }
}
