use crate::logging::select_level;
use tracing::Level;

#[test]
fn verbose_overrides_env() {
    assert_eq!(select_level(true, Some("error")), (Level::DEBUG, None));
}

#[test]
fn env_level_is_case_insensitive_and_trimmed() {
    assert_eq!(select_level(false, Some(" TRACE ")), (Level::TRACE, None));
    assert_eq!(select_level(false, Some("Warn")), (Level::WARN, None));
    assert_eq!(select_level(false, Some("verbose")), (Level::DEBUG, None));
}

#[test]
fn missing_env_uses_info() {
    assert_eq!(select_level(false, None), (Level::INFO, None));
    assert_eq!(select_level(false, Some("  ")), (Level::INFO, None));
}

#[test]
fn unknown_env_value_falls_back_with_a_warning() {
    let (level, warning) = select_level(false, Some("loud"));

    assert_eq!(level, Level::INFO);
    assert!(warning.unwrap().contains("`loud`"));
}
