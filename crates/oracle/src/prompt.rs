//! Prompt construction and reply sanitization for the hosted model.

use crate::Difficulty;

/// The move request sent to the oracle: persona, position, history, and a
/// strict output contract so replies stay machine-parseable.
pub fn build_move_prompt(fen: &str, san_history: &[String], difficulty: Difficulty) -> String {
    format!(
        "CHESS ENGINE.\n\
         Level: {}\n\
         FEN: {}\n\
         History: {}\n\
         \n\
         TASK: Return ONLY the next move in Standard Algebraic Notation (SAN). \
         Example: 'e4', 'Nf3', 'O-O'. NO CHAT.",
        difficulty.persona(),
        fen,
        san_history.join(", ")
    )
}

pub fn build_analysis_prompt(fen: &str) -> String {
    format!("Briefly assess this chess position in at most 15 words: {fen}")
}

/// Reduce a raw model reply to its first token, stripped to characters
/// that can occur in SAN or coordinate notation. `-` is kept so castling
/// (`O-O`) survives. Returns `None` when nothing usable remains.
pub fn sanitize_reply(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '=' | '-'))
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
