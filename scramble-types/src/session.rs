use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No word in play; the player is picking a category.
    Idle,
    /// A scrambled word has been issued and is awaiting answers.
    Active,
}

/// Log entry for one correctly answered word. Immutable once appended
/// to the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: String, // ISO 8601 string
    pub category: String,
    pub word: String,
    pub attempts: u32,
    pub time_taken: u64, // seconds
    pub score: u32,
}

/// Safe view of a session for the hosting layer. Never exposes the
/// unscrambled target word while a game is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub category: Option<String>,
    pub scrambled_word: String,
    pub word_length: usize,
    pub score: u32,
    pub attempts: u32,
    pub hints_remaining: u32,
    pub words_issued: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// The submission matched the target word; carries the score awarded.
    Correct { score: u32 },
    Incorrect,
    /// Empty or whitespace-only input. Not counted as an attempt.
    Blank,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }
}

/// One revealed letter, bought with a hint. Position is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}
