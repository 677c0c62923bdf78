use crate::{
    GameRules, ScoreCalculator, SessionEvent, SessionEventBus, SessionEventHandler, WordCatalog,
    compute_stats, scramble_word, select_word,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scramble_types::{
    AnswerOutcome, GameError, GameRecord, Hint, SessionPhase, SessionSnapshot, SessionStats,
};
use std::collections::{HashMap, HashSet};
use std::time::SystemTime;
use tracing::{debug, info};
use uuid::Uuid;

pub type SessionId = Uuid;

/// One player's game state for the lifetime of their interaction.
/// All mutation goes through the operation methods; each operation
/// runs to completion before the next, so a session is never observed
/// mid-transition.
pub struct Session {
    pub catalog: WordCatalog,
    pub rules: GameRules,
    /// Target answer; empty while no game is active.
    pub current_word: String,
    pub scrambled_word: String,
    pub score: u32,
    pub attempts: u32,
    pub game_active: bool,
    pub start_time: Option<SystemTime>,
    pub current_category: Option<String>,
    pub hints_remaining: u32,
    pub history: Vec<GameRecord>,
    pub words_played: HashSet<String>,
    pub words_issued: u32,
    rng: StdRng,
    event_bus: SessionEventBus,
}

impl Session {
    pub fn new(catalog: WordCatalog, rules: GameRules) -> Self {
        Self::with_rng(catalog, rules, StdRng::from_entropy())
    }

    /// Deterministic constructor for tests and replays.
    pub fn seeded(catalog: WordCatalog, rules: GameRules, seed: u64) -> Self {
        Self::with_rng(catalog, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: WordCatalog, rules: GameRules, rng: StdRng) -> Self {
        Self {
            catalog,
            rules,
            current_word: String::new(),
            scrambled_word: String::new(),
            score: 0,
            attempts: 0,
            game_active: false,
            start_time: None,
            current_category: None,
            hints_remaining: 0,
            history: Vec::new(),
            words_played: HashSet::new(),
            words_issued: 0,
            rng,
            event_bus: SessionEventBus::new(),
        }
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn category_names(&self) -> Vec<String> {
        self.catalog.category_names()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_active {
            SessionPhase::Active
        } else {
            SessionPhase::Idle
        }
    }

    /// Issue a fresh scrambled word from `category`. Valid from either
    /// phase; an in-flight word is discarded without scoring.
    pub fn start_new_game(&mut self, category: &str) -> Result<SessionSnapshot, GameError> {
        let word = select_word(&self.catalog, category, &mut self.words_played, &mut self.rng)?;
        let scrambled = scramble_word(&word, &mut self.rng);

        info!("Starting game in category {}: {} letters", category, word.len());

        self.current_category = Some(category.to_string());
        self.current_word = word;
        self.scrambled_word = scrambled;
        self.game_active = true;
        self.start_time = Some(SystemTime::now());
        self.hints_remaining = self.rules.hints_per_word;
        self.attempts = 0;
        self.words_issued += 1;

        self.event_bus.publish(SessionEvent::GameStarted {
            category: category.to_string(),
            scrambled_word: self.scrambled_word.clone(),
            word_length: self.current_word.len(),
        });

        Ok(self.snapshot())
    }

    /// Skip the current word and draw another from the same category.
    /// The abandoned word earns nothing and leaves no history entry.
    pub fn next_word(&mut self) -> Result<SessionSnapshot, GameError> {
        if !self.game_active {
            return Err(GameError::NoActiveGame);
        }
        let category = self
            .current_category
            .clone()
            .ok_or(GameError::NoActiveGame)?;
        self.start_new_game(&category)
    }

    /// Check a submission against the target word, case-insensitively.
    /// Blank input does not count as an attempt. A correct answer
    /// scores the word, appends a history record, and returns the
    /// session to Idle.
    pub fn submit_answer(&mut self, text: &str) -> Result<AnswerOutcome, GameError> {
        if !self.game_active {
            return Err(GameError::NoActiveGame);
        }

        let answer = text.trim();
        if answer.is_empty() {
            return Ok(AnswerOutcome::Blank);
        }

        self.attempts += 1;

        if answer.to_uppercase() != self.current_word {
            debug!("Incorrect answer, attempt {}", self.attempts);
            self.event_bus.publish(SessionEvent::AnswerIncorrect {
                attempts: self.attempts,
            });
            return Ok(AnswerOutcome::Incorrect);
        }

        let time_taken = self.elapsed_seconds();
        let score = ScoreCalculator::new(self.rules.clone()).score(time_taken, self.attempts);

        let record = GameRecord {
            date: chrono::Utc::now().to_rfc3339(),
            category: self.current_category.clone().unwrap_or_default(),
            word: self.current_word.clone(),
            attempts: self.attempts,
            time_taken,
            score,
        };

        info!(
            "Word {} solved in {}s after {} attempts for {} points",
            record.word, time_taken, self.attempts, score
        );

        self.score += score;
        self.history.push(record.clone());
        self.clear_active_word();

        self.event_bus.publish(SessionEvent::AnswerCorrect {
            record,
            session_score: self.score,
        });

        Ok(AnswerOutcome::Correct { score })
    }

    /// Reveal one letter of the target word at a random position,
    /// spending one of the per-word hints. Position is 1-indexed.
    pub fn request_hint(&mut self) -> Result<Hint, GameError> {
        if !self.game_active {
            return Err(GameError::NoActiveGame);
        }
        if self.hints_remaining == 0 {
            return Err(GameError::NoHintsRemaining);
        }

        self.hints_remaining -= 1;

        let letters: Vec<char> = self.current_word.chars().collect();
        let index = self.rng.gen_range(0..letters.len());
        let hint = Hint {
            position: index + 1,
            letter: letters[index],
        };

        debug!(
            "Hint used at position {}, {} remaining",
            hint.position, self.hints_remaining
        );
        self.event_bus.publish(SessionEvent::HintUsed {
            hint,
            hints_remaining: self.hints_remaining,
        });

        Ok(hint)
    }

    /// Abandon the current word and return to Idle. Session score and
    /// history survive.
    pub fn end_game(&mut self) -> Result<SessionSnapshot, GameError> {
        if !self.game_active {
            return Err(GameError::NoActiveGame);
        }

        let category = self.current_category.clone().unwrap_or_default();
        let abandoned_word = self.current_word.clone();
        info!("Game ended in category {}", category);

        self.clear_active_word();
        self.event_bus.publish(SessionEvent::GameEnded {
            category,
            abandoned_word,
        });

        Ok(self.snapshot())
    }

    /// Whole seconds since the current word was issued, clamped at
    /// zero. Zero while Idle.
    pub fn elapsed_seconds(&self) -> u64 {
        match self.start_time {
            Some(start) => SystemTime::now()
                .duration_since(start)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            None => 0,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            category: self.current_category.clone(),
            scrambled_word: self.scrambled_word.clone(),
            word_length: self.current_word.len(),
            score: self.score,
            attempts: self.attempts,
            hints_remaining: self.hints_remaining,
            words_issued: self.words_issued,
        }
    }

    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    pub fn stats(&self) -> SessionStats {
        compute_stats(&self.history)
    }

    fn clear_active_word(&mut self) {
        self.current_word.clear();
        self.scrambled_word.clear();
        self.game_active = false;
        self.start_time = None;
        self.attempts = 0;
        self.hints_remaining = 0;
    }
}

/// Owns many isolated sessions, one per player. Sessions share nothing
/// mutable; the catalog and rules are cloned into each.
pub struct SessionManager {
    pub sessions: HashMap<SessionId, Session>,
    catalog: WordCatalog,
    rules: GameRules,
}

impl SessionManager {
    pub fn new(catalog: WordCatalog, rules: GameRules) -> Self {
        Self {
            sessions: HashMap::new(),
            catalog,
            rules,
        }
    }

    pub fn create_session(&mut self) -> SessionId {
        let id = Uuid::new_v4();
        let session = Session::new(self.catalog.clone(), self.rules.clone());
        self.sessions.insert(id, session);
        info!("Created session {}", id);
        id
    }

    pub fn session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn session_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn remove_session(&mut self, id: &SessionId) -> Option<Session> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            info!("Removed session {}", id);
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
