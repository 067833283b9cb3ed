//! folio-term entry point.
//!
//! A minimal hosting shell: reads lines from stdin, dispatches them through
//! the interpreter, and renders the output. Run with `--offline` to use the
//! canned joke source instead of the joke API.

mod content_setup;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use folio_net::{CannedJokeSource, HttpJokeSource, JokeSource};
use folio_registry::SectionRegistry;
use folio_terminal::{CommandRegistry, Session, register_builtins};
use folio_types::config::TermConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!("Starting folio-term ({}@{})", config.user, config.host);

    let dirs = match config.content_path.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            SectionRegistry::from_toml(&text)?
        },
        None => content_setup::demo_sections(),
    };
    log::info!("Loaded {} sections", dirs.len());

    let mut commands = CommandRegistry::new();
    register_builtins(&mut commands);

    let offline = std::env::args().any(|arg| arg == "--offline");
    let jokes: Box<dyn JokeSource> = if offline {
        Box::new(CannedJokeSource::new())
    } else {
        Box::new(HttpJokeSource::new(&config.joke_url))
    };

    let mut session = Session::new(&dirs);
    session.jokes = Some(jokes.as_ref());
    session.typing_delay_ms = config.typing_delay_ms;

    render::greeting(&dirs);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", session.prompt(&config.user, &config.host));
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match commands.execute(&line, &mut session) {
            Ok(output) => render::render(&output),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

/// Load `folio.toml` from the working directory, falling back to defaults.
fn load_config() -> Result<TermConfig> {
    match std::fs::read_to_string("folio.toml") {
        Ok(text) => Ok(TermConfig::from_toml(&text)?),
        Err(_) => Ok(TermConfig::default()),
    }
}
