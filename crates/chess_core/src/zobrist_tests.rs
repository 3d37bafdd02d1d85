use super::*;

#[test]
fn identical_positions_hash_equal() {
    assert_eq!(
        hash_position(&Position::startpos()),
        hash_position(&Position::startpos())
    );
}

#[test]
fn side_to_move_changes_hash() {
    let w = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_ne!(hash_position(&w), hash_position(&b));
}

#[test]
fn castling_rights_change_hash() {
    let all = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let some = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
    assert_ne!(hash_position(&all), hash_position(&some));
}

#[test]
fn en_passant_file_changes_hash() {
    let with =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
    let without =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_ne!(hash_position(&with), hash_position(&without));
}

#[test]
fn clocks_do_not_affect_hash() {
    let a = Position::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    )
    .unwrap();
    let b = Position::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5",
    )
    .unwrap();
    assert_eq!(hash_position(&a), hash_position(&b));
}
