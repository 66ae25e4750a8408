/// One resolved exchange: what the player typed and what the game master
/// answered. Only successful turns become records.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub player_input: String,
    pub narration: String,
}

/// Append-only record of the session's turns.
///
/// Kept as a sequence of records rather than one concatenated string so a
/// truncation or summarization policy could be added later without changing
/// this contract. Growth is unbounded on purpose: very long sessions enlarge
/// every subsequent prompt, and that trade-off is accepted.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<TurnRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The only mutator. Called exactly once per successfully narrated turn,
    /// after the engine has returned; failed turns must never reach this.
    pub fn append(&mut self, player_input: String, narration: String) {
        self.records.push(TurnRecord {
            player_input,
            narration,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full accumulated history in turn order, one labeled line per
    /// utterance. The labels match what the prompt template tells the model
    /// to expect, and keep the raw history readable to a human.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str("User: ");
            out.push_str(&record.player_input);
            out.push('\n');
            out.push_str("GM: ");
            out.push_str(&record.narration);
            out.push('\n');
        }
        out
    }
}
