use super::*;
use chess_core::parse_square;

fn sq(name: &str) -> u8 {
    parse_square(name).unwrap()
}

fn custom(fen: &str, solution: &[&str]) -> PuzzleSession {
    PuzzleSession::new(vec![Puzzle {
        id: "t1".to_string(),
        fen: fen.to_string(),
        solution: solution.iter().map(|s| s.to_string()).collect(),
        description: "test".to_string(),
        difficulty: "Casual".to_string(),
    }])
    .unwrap()
}

#[test]
fn back_rank_puzzle_accepts_the_coordinate_submission() {
    let mut session = PuzzleSession::builtin().unwrap();
    session.goto(9); // Rxc1+ back-rank puzzle
    assert_eq!(session.puzzle().solution, vec!["Rxc1+".to_string()]);

    let status = session.submit(sq("c8"), sq("c1")).unwrap();
    assert_eq!(status, SolveStatus::Correct);
    // The winning move stays on the board.
    assert!(session.fen().starts_with("6k1/1p3p1p/p5p1/5b2/3Q4/1P6/P4PPP/2r3K1"));
}

#[test]
fn wrong_move_is_rolled_back_with_the_verdict() {
    let mut session = PuzzleSession::builtin().unwrap();
    let before = session.fen();

    // Legal queen retreat, but not the answer.
    let status = session.submit(sq("h5"), sq("g4")).unwrap();
    assert_eq!(status, SolveStatus::Incorrect);
    assert_eq!(session.fen(), before, "wrong move must not stay applied");

    session.clear_verdict();
    assert_eq!(session.status(), SolveStatus::Solving);

    // The real answer still works afterwards.
    let status = session.submit(sq("h5"), sq("f7")).unwrap();
    assert_eq!(status, SolveStatus::Correct);
}

#[test]
fn illegal_move_is_rejected_without_state_change() {
    let mut session = PuzzleSession::builtin().unwrap();
    let before = session.fen();

    assert!(session.submit(sq("e1"), sq("e3")).is_err());
    assert_eq!(session.status(), SolveStatus::Solving);
    assert_eq!(session.fen(), before);
}

#[test]
fn correct_is_terminal_for_the_attempt() {
    let mut session = PuzzleSession::builtin().unwrap();
    session.submit(sq("h5"), sq("f7")).unwrap();
    assert_eq!(session.status(), SolveStatus::Correct);
    let solved_fen = session.fen();

    // Further submissions are ignored entirely.
    let status = session.submit(sq("e2"), sq("e4")).unwrap();
    assert_eq!(status, SolveStatus::Correct);
    assert_eq!(session.fen(), solved_fen);
}

#[test]
fn promotion_defaults_to_queen() {
    let mut session = custom("8/P7/8/8/8/8/8/k3K3 w - - 0 1", &["a8=Q+"]);
    let status = session.submit(sq("a7"), sq("a8")).unwrap();
    assert_eq!(status, SolveStatus::Correct);
}

#[test]
fn coordinate_pair_answers_are_accepted() {
    let mut session = custom(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &["e2e4"],
    );
    let status = session.submit(sq("e2"), sq("e4")).unwrap();
    assert_eq!(status, SolveStatus::Correct);
}

#[test]
fn check_suffix_differences_do_not_fail_a_correct_answer() {
    // Puzzle 4's listed answer is "Qf6+", but with best defense exhausted
    // the move is in fact mate, so the engine writes "Qf6#".
    let mut session = PuzzleSession::builtin().unwrap();
    session.goto(3);
    let status = session.submit(sq("f3"), sq("f6")).unwrap();
    assert_eq!(status, SolveStatus::Correct);
}

#[test]
fn navigation_resets_attempt_state() {
    let mut session = PuzzleSession::builtin().unwrap();
    session.submit(sq("h5"), sq("f7")).unwrap();
    assert_eq!(session.status(), SolveStatus::Correct);

    session.next();
    assert_eq!(session.index(), 1);
    assert_eq!(session.status(), SolveStatus::Solving);
    assert_eq!(session.fen(), session.puzzle().fen);

    session.prev();
    assert_eq!(session.index(), 0);
    // A fresh attempt: the solved board was discarded wholesale.
    assert_eq!(session.fen(), session.puzzle().fen);
}

#[test]
fn navigation_wraps_around_the_catalog() {
    let mut session = PuzzleSession::builtin().unwrap();
    session.prev();
    assert_eq!(session.index(), session.len() - 1);
    session.next();
    assert_eq!(session.index(), 0);
}

#[test]
fn empty_catalog_cannot_build_a_session() {
    assert!(matches!(
        PuzzleSession::new(Vec::new()),
        Err(CatalogError::Empty)
    ));
}
