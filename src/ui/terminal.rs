use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::protocol::{ReadOutcome, Renderer};

const SEPARATOR_WIDTH: usize = 65;
const TYPEWRITER_DELAY: Duration = Duration::from_millis(30);

const BANNER: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                                                               ║
║   ██████╗ ██╗   ██╗███╗   ██╗ ██████╗ ███████╗ ██████╗ ███╗   ║
║   ██╔══██╗██║   ██║████╗  ██║██╔════╝ ██╔════╝██╔═══██╗████╗  ║
║   ██║  ██║██║   ██║██╔██╗ ██║██║  ███╗█████╗  ██║   ██║██╔██╗ ║
║   ██║  ██║██║   ██║██║╚██╗██║██║   ██║██╔══╝  ██║   ██║██║╚██╗║
║   ██████╔╝╚██████╔╝██║ ╚████║╚██████╔╝███████╗╚██████╔╝██║ ╚██║
║   ╚═════╝  ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝ ╚═════╝ ╚═╝  ╚═║
║                                                               ║
║                  ~ TEXT ADVENTURE GAME ~                      ║
║                                                               ║
╚═══════════════════════════════════════════════════════════════╝"#;

/// Retro terminal front end: banner art, colored speaker labels, and
/// typewriter-style narration. Presentation only; turn logic never leaks
/// in here.
pub struct TerminalRenderer {
    editor: DefaultEditor,
}

impl TerminalRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let editor = DefaultEditor::new().context("cannot open the input line editor")?;
        Ok(Self { editor })
    }

    pub fn show_banner(&self) {
        println!("{}", BANNER.magenta().bold());
    }

    /// Print text one character at a time, retro style.
    pub fn typewriter(&self, text: &str, delay: Duration) {
        let mut out = io::stdout();
        for ch in text.chars() {
            print!("{ch}");
            let _ = out.flush();
            thread::sleep(delay);
        }
        println!();
    }

    fn separator(&self) {
        println!("{}", "═".repeat(SEPARATOR_WIDTH).magenta());
    }
}

impl Renderer for TerminalRenderer {
    fn read_line(&mut self) -> anyhow::Result<ReadOutcome> {
        println!();
        let prompt = format!("{} ", "[COMMAND]>".green().bold());
        match self.editor.readline(&prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line.trim().to_string())),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Ok(ReadOutcome::Interrupted)
            }
            Err(e) => Err(e).context("input stream is broken"),
        }
    }

    fn show_narration(&mut self, text: &str) {
        println!("\n{}", "[GAME MASTER]".yellow().bold());
        self.separator();
        self.typewriter(&text.cyan().to_string(), TYPEWRITER_DELAY);
        self.separator();
    }

    fn show_error(&mut self, message: &str) {
        println!("\n{} {}", "[ERROR]".red().bold(), message.red());
        println!(
            "{}",
            "The mystical forces seem disturbed... try again.".yellow()
        );
    }

    fn show_notice(&mut self, message: &str) {
        println!("{}", message.red());
    }

    fn show_help(&mut self) {
        println!("\n{}", "[HELP]".cyan().bold());
        println!("{}", "Commands: Type any action you want to take".yellow());
        println!("{}", "Special: 'help', 'quit', 'exit', 'clear'".yellow());
    }

    fn show_farewell(&mut self) {
        println!(
            "\n{} Connection terminated...",
            "[SYSTEM]".red().bold()
        );
        self.typewriter(
            &"The dungeon fades into darkness. Until next time, brave adventurer!"
                .yellow()
                .to_string(),
            TYPEWRITER_DELAY,
        );
    }

    fn show_thinking(&mut self) {
        println!("\n{}", "Processing...".magenta());
    }

    fn clear(&mut self) {
        // ANSI clear plus cursor home, then the banner again.
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
        self.show_banner();
    }
}
