/// Builds the full prompt sent to the narration engine.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no engine logic.
pub struct PromptBuilder;

/// Fixed framing for every turn. Kept byte-stable across a session so the
/// model's voice stays consistent turn to turn.
const SYSTEM_FRAMING: &str = "\
You are a mysterious and atmospheric text-based adventure game master for a retro-style dungeon crawler.
Use vivid, immersive descriptions and create an engaging fantasy atmosphere.
Keep responses concise but atmospheric (2-4 sentences max).";

const CLOSING_INSTRUCTION: &str = "\
Narrate the next scene dramatically and ask what the player does next.
Use atmospheric language fitting for a retro text adventure.";

impl PromptBuilder {
    /// Assemble the instruction payload: framing, then the accumulated
    /// history, then the player's current action, in that order. Pure and
    /// deterministic over its inputs.
    pub fn build(history: &str, player_input: &str) -> String {
        let mut prompt = String::new();

        push_system_framing(&mut prompt);
        push_history_section(&mut prompt, history);
        push_player_action(&mut prompt, player_input);
        push_closing_instruction(&mut prompt);

        prompt
    }
}

fn push_system_framing(prompt: &mut String) {
    prompt.push_str(SYSTEM_FRAMING);
    prompt.push_str("\n\n");
}

fn push_history_section(prompt: &mut String, history: &str) {
    prompt.push_str("History:\n");
    prompt.push_str(history);
    prompt.push('\n');
}

fn push_player_action(prompt: &mut String, player_input: &str) {
    prompt.push_str("User: ");
    prompt.push_str(player_input);
    prompt.push_str("\n\n");
}

fn push_closing_instruction(prompt: &mut String) {
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt.push('\n');
}
