use scramble_core::{
    GameRules, Session, SessionEvent, SessionEventHandler, SessionManager, WordCatalog,
};
use std::sync::{Arc, Mutex};

/// Creates a catalog with known, small categories
pub fn create_test_catalog() -> WordCatalog {
    WordCatalog::from_word_list(
        "Fruits: APPLE, BANANA, MANGO\n\
         Animals: ZEBRA, TIGER\n\
         Single: ORANGE",
    )
    .expect("test catalog parses")
}

/// Creates a session over the test catalog with a fixed seed
pub fn create_test_session() -> Session {
    Session::seeded(create_test_catalog(), GameRules::default(), 1234)
}

/// Creates a session manager over the default catalog
pub fn create_test_manager() -> SessionManager {
    SessionManager::new(WordCatalog::default(), GameRules::default())
}

/// Event collector for asserting on published session events
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
