use super::*;
use std::time::Duration;

#[test]
fn defaults_match_the_reference_pacing() {
    let config = SessionConfig::default();
    assert_eq!(config.difficulty, Difficulty::Intermediate);
    assert_eq!(config.player, PlayerSide::White);
    assert_eq!(config.think.min_visible_delay(), Duration::from_millis(600));
    assert_eq!(config.think.response_ceiling(), Duration::from_secs(2));
}

#[test]
fn full_config_parses_from_toml() {
    let config = SessionConfig::from_toml_str(
        r#"
        difficulty = "expert"
        player = "black"

        [think]
        min_visible_delay_ms = 250
        response_ceiling_ms = 1500
        "#,
    )
    .unwrap();

    assert_eq!(config.difficulty, Difficulty::Expert);
    assert_eq!(config.player, PlayerSide::Black);
    assert_eq!(config.think.min_visible_delay_ms, 250);
    assert_eq!(config.think.response_ceiling_ms, 1500);
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let config = SessionConfig::from_toml_str("difficulty = \"novice\"").unwrap();
    assert_eq!(config.difficulty, Difficulty::Novice);
    assert_eq!(config.player, PlayerSide::White);
    assert_eq!(config.think, ThinkPolicy::default());

    assert_eq!(
        SessionConfig::from_toml_str("").unwrap(),
        SessionConfig::default()
    );
}

#[test]
fn bad_toml_is_a_parse_error() {
    assert!(matches!(
        SessionConfig::from_toml_str("difficulty = \"impossible\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn residual_wait_enforces_the_minimum_visible_delay() {
    let policy = ThinkPolicy::default();
    assert_eq!(
        policy.residual_wait(Duration::from_millis(200)),
        Duration::from_millis(400)
    );
    assert_eq!(
        policy.residual_wait(Duration::from_secs(1)),
        Duration::ZERO
    );
}
