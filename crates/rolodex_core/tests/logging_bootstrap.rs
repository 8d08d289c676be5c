use rolodex_core::{default_log_level, init_logging, logging_status};

// Logging state is process-global, so the whole lifecycle runs in one test.
#[test]
fn init_is_idempotent_and_rejects_conflicts() {
    assert_eq!(logging_status(), None);
    assert!(init_logging("loud").is_err());
    assert_eq!(logging_status(), None);

    init_logging("info").unwrap();
    assert_eq!(logging_status(), Some("info"));

    // Same level again, including alternate spellings, stays Ok.
    init_logging("info").unwrap();
    init_logging(" INFO ").unwrap();

    let err = init_logging("debug").unwrap_err();
    assert!(err.contains("already initialized"));
    assert_eq!(logging_status(), Some("info"));
}

#[test]
fn default_level_matches_build_mode() {
    if cfg!(debug_assertions) {
        assert_eq!(default_log_level(), "debug");
    } else {
        assert_eq!(default_log_level(), "info");
    }
}
