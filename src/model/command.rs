/// One classified line of player input.
/// Produced fresh for every line and consumed by the turn controller
/// in the same iteration; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    ClearScreen,
    EmptyInput,
    /// Anything that is not a control word is narrated as a gameplay action.
    Action(String),
}

impl Command {
    /// Classify a raw input line. Total over all strings, no side effects.
    ///
    /// The renderer hands over trimmed input, but trimming again here keeps
    /// the contract self-contained for callers that do not.
    pub fn classify(raw: &str) -> Command {
        let line = raw.trim();
        if line.is_empty() {
            return Command::EmptyInput;
        }

        match line.to_lowercase().as_str() {
            "exit" | "quit" | "q" => Command::Quit,
            "help" => Command::Help,
            "clear" => Command::ClearScreen,
            _ => Command::Action(line.to_string()),
        }
    }
}
