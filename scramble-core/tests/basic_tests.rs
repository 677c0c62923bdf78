mod common;

use common::*;
use scramble_types::SessionPhase;

#[test]
fn test_session_starts_idle() {
    let session = create_test_session();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.score, 0);
    assert!(session.history().is_empty());
}

#[test]
fn test_catalog_listing() {
    let session = create_test_session();
    assert_eq!(session.category_names(), vec!["Fruits", "Animals", "Single"]);
}

#[test]
fn test_manager_creation() {
    let manager = create_test_manager();
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn test_start_game_activates_session() {
    let mut session = create_test_session();
    let snapshot = session.start_new_game("Animals").unwrap();

    assert_eq!(snapshot.phase, SessionPhase::Active);
    assert_eq!(snapshot.category.as_deref(), Some("Animals"));
    assert_eq!(snapshot.word_length, 5);
    assert_eq!(snapshot.hints_remaining, 3);
    assert_eq!(snapshot.words_issued, 1);
}
