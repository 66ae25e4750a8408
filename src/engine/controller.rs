use log::{debug, warn};

use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{NarrationEngine, ReadOutcome, Renderer};
use crate::model::command::Command;
use crate::model::session::Session;

/// Where the loop goes after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnOutcome {
    Continue,
    Terminate,
}

/// Drives the session: read a line, classify it, and either handle the
/// control command or play a gameplay turn against the narration engine.
///
/// Owns the session exclusively. A gameplay turn only reaches the ledger
/// after the engine has answered, so any failure leaves the history exactly
/// as it was before the turn was attempted.
pub struct TurnController<R: Renderer, E: NarrationEngine> {
    renderer: R,
    engine: E,
    session: Session,
}

impl<R: Renderer, E: NarrationEngine> TurnController<R, E> {
    pub fn new(renderer: R, engine: E) -> Self {
        Self {
            renderer,
            engine,
            session: Session::new(),
        }
    }

    /// Run until the player quits or interrupts. Only a broken input stream
    /// escapes as an error; everything else is contained per turn.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let outcome = match self.renderer.read_line()? {
                ReadOutcome::Line(line) => self.handle_line(&line),
                ReadOutcome::Interrupted => {
                    self.renderer.show_farewell();
                    TurnOutcome::Terminate
                }
            };

            if outcome == TurnOutcome::Terminate {
                debug!("session over after {} turns", self.session.turns_played());
                return Ok(());
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> TurnOutcome {
        match Command::classify(line) {
            Command::Quit => {
                self.renderer.show_farewell();
                TurnOutcome::Terminate
            }
            Command::Help => {
                self.renderer.show_help();
                TurnOutcome::Continue
            }
            Command::ClearScreen => {
                self.renderer.clear();
                TurnOutcome::Continue
            }
            Command::EmptyInput => {
                self.renderer.show_notice("Please enter a command...");
                TurnOutcome::Continue
            }
            Command::Action(text) => {
                self.play_turn(&text);
                TurnOutcome::Continue
            }
        }
    }

    /// One gameplay turn: compose, invoke, and on success (and only then)
    /// record the exchange and render it. A failed turn is discarded whole.
    fn play_turn(&mut self, action: &str) {
        let prompt = PromptBuilder::build(&self.session.snapshot(), action);

        self.renderer.show_thinking();
        match self.engine.generate(&prompt) {
            Ok(narration) => {
                self.session.record_turn(action.to_string(), narration.clone());
                self.renderer.show_narration(&narration);
                debug!("turn {} narrated", self.session.turns_played());
            }
            Err(e) => {
                warn!("turn failed, ledger untouched: {e}");
                self.renderer.show_error(&e.to_string());
            }
        }
    }

    #[cfg(test)]
    fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::protocol::EngineError;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Scripted renderer: feeds canned lines and records every call.
    struct ScriptedRenderer {
        lines: VecDeque<ReadOutcome>,
        calls: Vec<String>,
    }

    impl ScriptedRenderer {
        fn with_lines(lines: &[&str]) -> Self {
            Self {
                lines: lines
                    .iter()
                    .map(|l| ReadOutcome::Line(l.to_string()))
                    .collect(),
                calls: Vec::new(),
            }
        }
    }

    impl Renderer for ScriptedRenderer {
        fn read_line(&mut self) -> anyhow::Result<ReadOutcome> {
            Ok(self
                .lines
                .pop_front()
                // Script exhausted: behave like the player quitting rather
                // than erroring, so tests can omit an explicit "quit".
                .unwrap_or(ReadOutcome::Interrupted))
        }

        fn show_narration(&mut self, text: &str) {
            self.calls.push(format!("narration:{text}"));
        }

        fn show_error(&mut self, message: &str) {
            self.calls.push(format!("error:{message}"));
        }

        fn show_notice(&mut self, message: &str) {
            self.calls.push(format!("notice:{message}"));
        }

        fn show_help(&mut self) {
            self.calls.push("help".into());
        }

        fn show_farewell(&mut self) {
            self.calls.push("farewell".into());
        }

        fn show_thinking(&mut self) {
            self.calls.push("thinking".into());
        }

        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
    }

    /// Recording stub engine with a scripted result per call.
    struct StubEngine {
        results: RefCell<VecDeque<Result<String, EngineError>>>,
        prompts: Rc<RefCell<Vec<String>>>,
    }

    impl StubEngine {
        fn new(results: Vec<Result<String, EngineError>>) -> Self {
            Self {
                results: RefCell::new(results.into()),
                prompts: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn prompts(&self) -> Rc<RefCell<Vec<String>>> {
            Rc::clone(&self.prompts)
        }
    }

    impl NarrationEngine for StubEngine {
        fn generate(&self, prompt: &str) -> Result<String, EngineError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(EngineError::Empty))
        }
    }

    fn run_script(
        lines: &[&str],
        results: Vec<Result<String, EngineError>>,
    ) -> (Vec<String>, String, Rc<RefCell<Vec<String>>>) {
        let engine = StubEngine::new(results);
        let prompts = engine.prompts();
        let mut controller = TurnController::new(ScriptedRenderer::with_lines(lines), engine);
        controller.run().unwrap();
        let snapshot = controller.session().snapshot();
        (controller.renderer.calls, snapshot, prompts)
    }

    #[test]
    fn successful_turn_updates_ledger_and_renders() {
        let (calls, snapshot, _) = run_script(
            &["look around", "quit"],
            vec![Ok("You see a torch.".to_string())],
        );

        assert_eq!(snapshot, "User: look around\nGM: You see a torch.\n");
        assert!(calls.contains(&"narration:You see a torch.".to_string()));
        assert_eq!(calls.last().unwrap(), "farewell");
    }

    #[test]
    fn help_makes_no_engine_call() {
        let (calls, snapshot, prompts) = run_script(&["help", "quit"], vec![]);

        assert!(prompts.borrow().is_empty());
        assert_eq!(snapshot, "");
        assert!(calls.contains(&"help".to_string()));
    }

    #[test]
    fn clear_makes_no_engine_call() {
        let (calls, snapshot, prompts) = run_script(&["clear", "quit"], vec![]);

        assert!(prompts.borrow().is_empty());
        assert_eq!(snapshot, "");
        assert!(calls.contains(&"clear".to_string()));
    }

    #[test]
    fn empty_input_reprompts_without_engine_call() {
        let (calls, snapshot, prompts) = run_script(&["", "   ", "quit"], vec![]);

        assert!(prompts.borrow().is_empty());
        assert_eq!(snapshot, "");
        assert_eq!(
            calls
                .iter()
                .filter(|c| c.starts_with("notice:"))
                .count(),
            2
        );
    }

    #[test]
    fn failed_turn_leaves_snapshot_byte_identical() {
        let (calls, snapshot, _) = run_script(
            &["look around", "open door", "quit"],
            vec![
                Ok("You see a torch.".to_string()),
                Err(EngineError::Unavailable("connection refused".into())),
            ],
        );

        // Failed second turn is discarded whole.
        assert_eq!(snapshot, "User: look around\nGM: You see a torch.\n");
        assert!(calls.iter().any(|c| c.starts_with("error:")));
    }

    #[test]
    fn resubmission_after_failure_is_a_fresh_turn() {
        let (_, snapshot, prompts) = run_script(
            &["open door", "open door", "quit"],
            vec![
                Err(EngineError::Unavailable("connection refused".into())),
                Ok("The door groans open.".to_string()),
            ],
        );

        assert_eq!(snapshot, "User: open door\nGM: The door groans open.\n");
        // Both attempts composed the same prompt: the failed turn left no
        // trace in the history the second one saw.
        let prompts = prompts.borrow();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], prompts[1]);
    }

    #[test]
    fn later_input_never_appears_in_earlier_prompts() {
        let (_, _, prompts) = run_script(
            &["look around", "take the torch", "quit"],
            vec![
                Ok("You see a torch.".to_string()),
                Ok("It burns steadily.".to_string()),
            ],
        );

        let prompts = prompts.borrow();
        assert!(!prompts[0].contains("take the torch"));
        assert!(prompts[1].contains("look around"));
        assert!(prompts[1].contains("You see a torch."));
    }

    #[test]
    fn quit_stops_reading_immediately() {
        let (calls, _, prompts) = run_script(&["quit", "look around"], vec![]);

        // The line after quit is never read, so no prompt is ever composed.
        assert!(prompts.borrow().is_empty());
        assert_eq!(calls, vec!["farewell".to_string()]);
    }

    #[test]
    fn interrupt_takes_the_farewell_path() {
        let engine = StubEngine::new(vec![]);
        let mut renderer = ScriptedRenderer::with_lines(&[]);
        renderer.lines.push_back(ReadOutcome::Interrupted);
        let mut controller = TurnController::new(renderer, engine);
        controller.run().unwrap();

        assert_eq!(controller.renderer.calls, vec!["farewell".to_string()]);
    }
}
