use crate::model::ledger::HistoryLedger;

/// The live game session: the ledger of prior turns plus a turn counter for
/// diagnostics. Owned exclusively by the turn controller and discarded when
/// the loop terminates; nothing here is ever persisted.
#[derive(Debug, Default)]
pub struct Session {
    ledger: HistoryLedger,
    turns_played: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one resolved turn into the history. Only called after the
    /// narration engine has returned successfully.
    pub fn record_turn(&mut self, player_input: String, narration: String) {
        self.ledger.append(player_input, narration);
        self.turns_played += 1;
    }

    pub fn snapshot(&self) -> String {
        self.ledger.snapshot()
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }
}
