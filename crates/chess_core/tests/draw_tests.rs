//! Draw detection across the public API: stalemate, fifty-move rule,
//! threefold repetition and insufficient material.

use chess_core::{game_status, legal_moves, Color, GameRecord, GameStatus, Position};

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn stalemate_king_in_corner() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black));
    assert_eq!(game_status(&pos), GameStatus::Stalemate);
}

#[test]
fn stalemate_king_and_pawn_endgame() {
    // White king g6, white pawn g7, black king g8.
    let pos = Position::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(!pos.in_check(Color::Black));
    assert_eq!(game_status(&pos), GameStatus::Stalemate);
}

// =============================================================================
// Fifty-move rule
// =============================================================================

#[test]
fn fifty_move_rule_at_100_halfmoves() {
    let pos = Position::from_fen("8/8/8/4k3/8/3QK3/8/8 w - - 100 60").unwrap();
    assert!(pos.is_fifty_move_draw());
    assert_eq!(game_status(&pos), GameStatus::FiftyMoveDraw);
}

#[test]
fn fifty_move_rule_not_yet_at_99_halfmoves() {
    let pos = Position::from_fen("8/8/8/4k3/8/3QK3/8/8 w - - 99 60").unwrap();
    assert!(!pos.is_fifty_move_draw());
    assert_eq!(game_status(&pos), GameStatus::Ongoing);
}

#[test]
fn pawn_move_resets_halfmove_clock() {
    let pos = Position::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").unwrap();
    let pawn_sq = chess_core::parse_square("e2").unwrap();
    let mv = legal_moves(&pos)
        .into_iter()
        .find(|m| m.from == pawn_sq)
        .expect("pawn move available");

    let next = pos.apply(mv);
    assert_eq!(next.halfmove_clock, 0);
    assert!(!next.is_fifty_move_draw());
}

// =============================================================================
// Threefold repetition (record-level, zobrist history)
// =============================================================================

#[test]
fn knight_shuffle_reaches_threefold() {
    let mut record = GameRecord::new();
    let mv = |r: &mut GameRecord, from: &str, to: &str| {
        r.attempt(
            chess_core::parse_square(from).unwrap(),
            chess_core::parse_square(to).unwrap(),
            None,
        )
        .unwrap();
    };

    mv(&mut record, "g1", "f3");
    mv(&mut record, "g8", "f6");
    mv(&mut record, "f3", "g1");
    mv(&mut record, "f6", "g8");
    assert!(!record.is_threefold_repetition(), "only two occurrences");

    mv(&mut record, "g1", "f3");
    mv(&mut record, "g8", "f6");
    mv(&mut record, "f3", "g1");
    mv(&mut record, "f6", "g8");
    assert!(record.is_threefold_repetition());
}

#[test]
fn repetition_ignores_clock_fields() {
    // Same board, different clocks: must count as the same position.
    let a = Position::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    )
    .unwrap();
    let b = Position::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5",
    )
    .unwrap();
    assert_eq!(a.position_hash(), b.position_hash());
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn king_vs_king_is_drawn() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert_eq!(game_status(&pos), GameStatus::InsufficientMaterial);
}

#[test]
fn lone_minor_piece_is_drawn() {
    for fen in [
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(
            game_status(&pos),
            GameStatus::InsufficientMaterial,
            "{fen}"
        );
    }
}

#[test]
fn same_color_bishops_are_drawn() {
    let pos = Position::from_fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();
    assert_eq!(game_status(&pos), GameStatus::InsufficientMaterial);
}

#[test]
fn opposite_color_bishops_are_not_drawn() {
    let pos = Position::from_fen("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();
    assert_eq!(game_status(&pos), GameStatus::Ongoing);
}

#[test]
fn mating_material_is_not_drawn() {
    for fen in [
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(game_status(&pos), GameStatus::Ongoing, "{fen}");
    }
}

// =============================================================================
// Mate is not a draw
// =============================================================================

#[test]
fn checkmate_is_not_stalemate() {
    let pos = Position::from_fen(
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
    )
    .unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(pos.in_check(Color::Black));
    assert_eq!(
        game_status(&pos),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn check_with_escapes_is_not_checkmate() {
    let pos = Position::from_fen(
        "rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2",
    )
    .unwrap();
    assert!(!legal_moves(&pos).is_empty());
    assert!(pos.in_check(Color::Black));
    assert_eq!(game_status(&pos), GameStatus::Ongoing);
}
