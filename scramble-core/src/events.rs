use scramble_types::{GameRecord, Hint};

/// Notifications published on every session transition, so a hosting
/// layer can re-render without polling the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    GameStarted {
        category: String,
        scrambled_word: String,
        word_length: usize,
    },
    AnswerCorrect {
        record: GameRecord,
        session_score: u32,
    },
    AnswerIncorrect {
        attempts: u32,
    },
    HintUsed {
        hint: Hint,
        hints_remaining: u32,
    },
    GameEnded {
        category: String,
        abandoned_word: String,
    },
}

/// Handler trait for processing session events
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: SessionEvent);
}

/// Simple event bus for distributing session events
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}
