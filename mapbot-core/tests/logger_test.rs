//! Integration test for [`mapbot_core::init_tracing`].

/// **Test: init_tracing creates the log directory and file.**
///
/// **Setup:** Temp dir; log path two levels below it.
/// **Action:** `init_tracing(path)` then emit one event.
/// **Expected:** Ok; file exists. A second call fails because the global subscriber is already set.
#[test]
fn test_init_tracing_creates_log_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("logs").join("mapbot.log");
    let log_path_str = log_path.to_str().expect("utf-8 path");

    mapbot_core::init_tracing(log_path_str).expect("first init must succeed");
    tracing::info!(test = true, "logger initialised");

    assert!(log_path.exists());
    assert!(mapbot_core::init_tracing(log_path_str).is_err());
}
