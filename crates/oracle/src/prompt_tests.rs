use super::*;

#[test]
fn move_prompt_carries_position_history_and_persona() {
    let history = vec!["e4".to_string(), "e5".to_string()];
    let prompt = build_move_prompt(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &history,
        Difficulty::Expert,
    );

    assert!(prompt.contains("FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    assert!(prompt.contains("History: e4, e5"));
    assert!(prompt.contains(Difficulty::Expert.persona()));
    assert!(prompt.contains("Standard Algebraic Notation"));
}

#[test]
fn sanitize_takes_first_token() {
    assert_eq!(sanitize_reply("e4"), Some("e4".to_string()));
    assert_eq!(sanitize_reply("Nf3 is a fine move"), Some("Nf3".to_string()));
    assert_eq!(sanitize_reply("  Qxf7#\n"), Some("Qxf7#".to_string()));
}

#[test]
fn sanitize_strips_decorations_but_keeps_san_characters() {
    assert_eq!(sanitize_reply("'e4'."), Some("e4".to_string()));
    assert_eq!(sanitize_reply("(Nf3!)"), Some("Nf3".to_string()));
    assert_eq!(sanitize_reply("e8=Q+"), Some("e8=Q+".to_string()));
}

#[test]
fn sanitize_preserves_castling() {
    assert_eq!(sanitize_reply("O-O"), Some("O-O".to_string()));
    assert_eq!(sanitize_reply("O-O-O,"), Some("O-O-O".to_string()));
}

#[test]
fn sanitize_rejects_empty_replies() {
    assert_eq!(sanitize_reply(""), None);
    assert_eq!(sanitize_reply("   \n\t"), None);
    assert_eq!(sanitize_reply("...  e4"), None);
}
