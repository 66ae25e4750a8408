use thiserror::Error;

/// Why a narration request produced no usable text. Every variant is
/// non-fatal to the session: the controller reports it and the turn is
/// discarded without touching the ledger.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("narration backend unreachable: {0}")]
    Unavailable(String),

    #[error("narration backend returned an unusable response: {0}")]
    Malformed(String),

    #[error("narration backend returned no text")]
    Empty,
}

/// Result of one blocking read at the command prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input, already trimmed by the renderer.
    Line(String),
    /// The player interrupted (Ctrl-C / end of input). Graceful exit, not
    /// an error.
    Interrupted,
}

/// Presentation collaborator. The core assumes nothing about fidelity
/// beyond these calls completing; the terminal front end is one
/// implementation, test stubs are another.
pub trait Renderer {
    /// Block until the player submits a line (or interrupts). Fails only
    /// when the input stream itself is broken; the session cannot continue
    /// without a way to read input, so that error is allowed to propagate.
    fn read_line(&mut self) -> anyhow::Result<ReadOutcome>;

    fn show_narration(&mut self, text: &str);
    fn show_error(&mut self, message: &str);
    fn show_notice(&mut self, message: &str);
    fn show_help(&mut self);
    fn show_farewell(&mut self);
    /// Shown just before a blocking engine call.
    fn show_thinking(&mut self);
    fn clear(&mut self);
}

/// The narration service: opaque, potentially slow, potentially failing.
/// Constructed once at session start and injected into the controller.
pub trait NarrationEngine {
    fn generate(&self, prompt: &str) -> Result<String, EngineError>;
}
