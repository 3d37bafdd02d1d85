use super::*;
use crate::board::Position;
use crate::types::{parse_square, Color};

fn sq(name: &str) -> u8 {
    parse_square(name).unwrap()
}

fn play(record: &mut GameRecord, from: &str, to: &str) -> String {
    record
        .attempt(sq(from), sq(to), None)
        .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"))
        .san
        .clone()
}

#[test]
fn record_appends_and_tracks_current() {
    let mut record = GameRecord::new();
    assert_eq!(record.ply_count(), 0);
    assert_eq!(record.current(), &Position::startpos());

    assert_eq!(play(&mut record, "e2", "e4"), "e4");
    assert_eq!(play(&mut record, "e7", "e5"), "e5");
    assert_eq!(play(&mut record, "g1", "f3"), "Nf3");

    assert_eq!(record.ply_count(), 3);
    assert_eq!(record.san_history(), vec!["e4", "e5", "Nf3"]);
    assert_eq!(record.last_move().map(|m| m.to), Some(sq("f3")));
    assert_eq!(record.current().side_to_move, Color::Black);
}

#[test]
fn rejected_attempt_changes_nothing() {
    let mut record = GameRecord::new();
    let before_fen = record.current().to_fen();

    assert!(record.attempt(sq("e2"), sq("e5"), None).is_err());
    assert_eq!(record.ply_count(), 0);
    assert_eq!(record.current().to_fen(), before_fen);
}

#[test]
fn ledger_groups_two_plies_per_row() {
    let mut record = GameRecord::new();
    play(&mut record, "e2", "e4");
    play(&mut record, "e7", "e5");
    play(&mut record, "g1", "f3");

    let rows = record.ledger();
    assert_eq!(
        rows,
        vec![
            LedgerRow {
                num: 1,
                white: "e4".into(),
                black: Some("e5".into())
            },
            LedgerRow {
                num: 2,
                white: "Nf3".into(),
                black: None
            },
        ]
    );

    play(&mut record, "b8", "c6");
    let rows = record.ledger();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].black.as_deref(), Some("Nc6"));
}

#[test]
fn ledger_is_empty_for_fresh_record() {
    assert!(GameRecord::new().ledger().is_empty());
}

#[test]
fn no_moves_accepted_after_game_over() {
    let mut record = GameRecord::new();
    // Fool's mate.
    play(&mut record, "f2", "f3");
    play(&mut record, "e7", "e5");
    play(&mut record, "g2", "g4");
    assert_eq!(play(&mut record, "d8", "h4"), "Qh4#");

    assert_eq!(
        record.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(
        record.attempt(sq("e2"), sq("e4"), None),
        Err(MoveError::GameOver)
    );
    assert_eq!(record.ply_count(), 4);
}

#[test]
fn threefold_repetition_detected() {
    let mut record = GameRecord::new();
    for _ in 0..2 {
        play(&mut record, "g1", "f3");
        play(&mut record, "g8", "f6");
        play(&mut record, "f3", "g1");
        play(&mut record, "f6", "g8");
    }
    // Start position has now occurred three times (initially plus twice).
    assert!(record.is_threefold_repetition());
}

#[test]
fn repetition_requires_three_occurrences() {
    let mut record = GameRecord::new();
    play(&mut record, "g1", "f3");
    play(&mut record, "g8", "f6");
    play(&mut record, "f3", "g1");
    play(&mut record, "f6", "g8");
    // Second occurrence only.
    assert!(!record.is_threefold_repetition());
}

#[test]
fn record_seeds_from_fen() {
    let fen = "2r3k1/1p3p1p/p5p1/5b2/3Q4/1P6/P4PPP/2R3K1 b - - 0 1";
    let record = GameRecord::from_fen(fen).unwrap();
    assert_eq!(record.current().to_fen(), fen);
    assert_eq!(record.starting_position().to_fen(), fen);
    assert!(GameRecord::from_fen("not a fen").is_err());
}
