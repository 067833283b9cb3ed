//! Output rendering for the hosting shell.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use folio_registry::Directories;
use folio_terminal::CommandOutput;

/// Print the startup greeting.
pub fn greeting(dirs: &dyn Directories) {
    println!("Welcome to the folio terminal!");
    println!(
        "{} sections available. Use 'ls' to list them, 'cd <section>' for details,",
        dirs.keys().len(),
    );
    println!("and 'help' for the other commands.");
    println!();
}

/// Render one command output.
pub fn render(output: &CommandOutput) {
    match output {
        CommandOutput::Text(text) => println!("{text}"),
        CommandOutput::Typed { lines, delay_ms } => type_lines(lines, *delay_ms),
        CommandOutput::Clear => {
            // ANSI: clear the screen and move the cursor home.
            print!("\x1b[2J\x1b[H");
            let _ = io::stdout().flush();
        },
        CommandOutput::None => {},
    }
}

/// Print lines character by character.
///
/// No prompt is on screen while this runs; the REPL redraws it only after
/// the last line has been printed.
fn type_lines(lines: &[String], delay_ms: u64) {
    let delay = Duration::from_millis(delay_ms);
    for line in lines {
        for ch in line.chars() {
            print!("{ch}");
            let _ = io::stdout().flush();
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        println!();
    }
}
